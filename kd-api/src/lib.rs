pub mod flow;

use schemars::{
    json_schema,
    Schema,
    SchemaGenerator,
};

// Embedded upstream objects (pod templates, PVC specs, patches) are passed through verbatim
// instead of being modelled field-by-field; the apiserver is the source of truth for their shape.
pub fn preserve_unknown_fields(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "x-kubernetes-preserve-unknown-fields": true,
    })
}
