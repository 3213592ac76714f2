pub mod v1alpha1;

pub const FLOW_VOLCANO_GROUP: &str = "flow.volcano.sh";
