use std::collections::BTreeMap;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    JSONSchemaProps,
    JSONSchemaPropsOrArray,
    JSONSchemaPropsOrBool,
};

use super::*;
use crate::errors::*;

err_impl! {SchemaError,
    #[error("properties map to the same attribute name: {0}")]
    DuplicateAttribute(String),
}

// Maps one node of a CRD's OpenAPI v3 schema onto an attribute type.  Anything we can't express
// precisely (preserve-unknown-fields objects, int-or-string, tuple arrays, untyped nodes) is
// passed through as a dynamic value instead of being rejected.  The only hard error is two
// properties of the same object whose names collapse to the same attribute name.
pub fn attribute_type_for(props: &JSONSchemaProps) -> anyhow::Result<AttributeType> {
    if props.x_kubernetes_int_or_string == Some(true) {
        return Ok(AttributeType::Dynamic);
    }

    let attr_type = match props.type_.as_deref() {
        Some("string") => AttributeType::String,
        Some("integer") => AttributeType::Int64,
        Some("number") => AttributeType::Float64,
        Some("boolean") => AttributeType::Bool,
        Some("array") => match &props.items {
            Some(JSONSchemaPropsOrArray::Schema(items)) => AttributeType::List(Box::new(attribute_type_for(items)?)),
            _ => AttributeType::List(Box::new(AttributeType::Dynamic)),
        },
        Some("object") | None => object_type_for(props)?,
        Some(_) => AttributeType::Dynamic,
    };
    Ok(attr_type)
}

fn object_type_for(props: &JSONSchemaProps) -> anyhow::Result<AttributeType> {
    if let Some(properties) = props.properties.as_ref().filter(|p| !p.is_empty()) {
        return Ok(AttributeType::Object(computed_attributes(properties)?));
    }

    if props.x_kubernetes_preserve_unknown_fields == Some(true) {
        return Ok(AttributeType::Dynamic);
    }

    let attr_type = match &props.additional_properties {
        Some(JSONSchemaPropsOrBool::Schema(values)) => AttributeType::Map(Box::new(attribute_type_for(values)?)),
        Some(JSONSchemaPropsOrBool::Bool(true)) => AttributeType::Map(Box::new(AttributeType::Dynamic)),
        _ => AttributeType::Dynamic,
    };
    Ok(attr_type)
}

fn computed_attributes(properties: &BTreeMap<String, JSONSchemaProps>) -> anyhow::Result<BTreeMap<String, Attribute>> {
    let mut attrs: BTreeMap<String, Attribute> = BTreeMap::new();
    for (json_name, props) in properties {
        let name = snake_case(json_name);
        if let Some(existing) = attrs.get(&name) {
            return Err(SchemaError::duplicate_attribute(&format!("{} and {json_name} => {name}", existing.json_name)));
        }

        let attr = Attribute {
            json_name: json_name.clone(),
            description: props.description.clone(),
            required: false,
            computed: true,
            attr_type: attribute_type_for(props)?,
        };
        attrs.insert(name, attr);
    }
    Ok(attrs)
}
