mod job_flow;
mod job_template;

pub use job_flow::*;
pub use job_template::*;

pub const VERSION: &str = "v1alpha1";
