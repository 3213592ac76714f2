mod gvk;

pub use gvk::*;

// Terraform-style ids for namespaced objects are "<name>/<namespace>", which is the reverse of
// the usual kubectl "<namespace>/<name>" ordering.
pub fn object_id(name: &str, namespace: &str) -> String {
    format!("{name}/{namespace}")
}
