mod naming;
mod openapi;
mod state;

use std::collections::BTreeMap;

use serde::Serialize;

pub use naming::snake_case;
pub use openapi::attribute_type_for;

use crate::constants::*;

// The attribute types a data source schema can declare.  Objects nest arbitrarily deep; lists and
// maps of objects become nested attributes whose element attributes carry their own flags.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Float64,
    Bool,
    Dynamic,
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
    Object(BTreeMap<String, Attribute>),
}

impl AttributeType {
    // Returns the child attributes of a nested type, looking through lists and maps
    pub fn nested_attributes(&self) -> Option<&BTreeMap<String, Attribute>> {
        match self {
            AttributeType::Object(attrs) => Some(attrs),
            AttributeType::List(elem) | AttributeType::Map(elem) => elem.nested_attributes(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attribute {
    pub json_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub required: bool,
    pub computed: bool,

    #[serde(rename = "type")]
    pub attr_type: AttributeType,
}

impl Attribute {
    pub fn required(json_name: &str, attr_type: AttributeType) -> Attribute {
        Attribute {
            json_name: json_name.into(),
            description: None,
            required: true,
            computed: false,
            attr_type,
        }
    }

    pub fn computed(json_name: &str, attr_type: AttributeType) -> Attribute {
        Attribute {
            json_name: json_name.into(),
            description: None,
            required: false,
            computed: true,
            attr_type,
        }
    }

    pub fn with_description(mut self, description: &str) -> Attribute {
        self.description = Some(description.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    // Every data source shares the same id/api_version/kind/metadata attributes; only the shape of
    // `spec` differs between kinds.
    pub fn for_resource(kind: &str, api_version: &str, spec_type: AttributeType) -> Schema {
        let metadata = BTreeMap::from([
            (
                NAME_ATTR.into(),
                Attribute::required("name", AttributeType::String)
                    .with_description("Name of the resource, unique within its namespace."),
            ),
            (
                NAMESPACE_ATTR.into(),
                Attribute::required("namespace", AttributeType::String)
                    .with_description("Namespace the resource lives in."),
            ),
            (
                LABELS_ATTR.into(),
                Attribute::computed("labels", AttributeType::Map(Box::new(AttributeType::String))),
            ),
            (
                ANNOTATIONS_ATTR.into(),
                Attribute::computed("annotations", AttributeType::Map(Box::new(AttributeType::String))),
            ),
        ]);

        let attributes = BTreeMap::from([
            (
                ID_ATTR.into(),
                Attribute::computed("id", AttributeType::String)
                    .with_description("Contains the value 'metadata.name/metadata.namespace'."),
            ),
            (
                API_VERSION_ATTR.into(),
                Attribute::computed("apiVersion", AttributeType::String)
                    .with_description("The API group and version of the resource."),
            ),
            (
                KIND_ATTR.into(),
                Attribute::computed("kind", AttributeType::String).with_description("The kind of the resource."),
            ),
            (
                METADATA_ATTR.into(),
                Attribute {
                    json_name: "metadata".into(),
                    description: Some("Data that helps uniquely identify the object.".into()),
                    required: true,
                    computed: false,
                    attr_type: AttributeType::Object(metadata),
                },
            ),
            (SPEC_ATTR.into(), Attribute::computed("spec", spec_type)),
        ]);

        Schema {
            description: format!("Reads a {api_version} {kind} from the Kubernetes API."),
            attributes,
        }
    }

    // Looks up an attribute by its dotted path, e.g. "spec.tasks.template"; lists and maps of
    // objects are traversed transparently.
    pub fn attribute(&self, path: &str) -> Option<&Attribute> {
        let mut parts = path.split('.');
        let mut attr = self.attributes.get(parts.next()?)?;
        for part in parts {
            attr = attr.attr_type.nested_attributes()?.get(part)?;
        }
        Some(attr)
    }

    // All non-nested attributes, keyed by their dotted path
    pub fn leaves(&self) -> Vec<(String, &Attribute)> {
        let mut leaves = vec![];
        collect_leaves("", &self.attributes, &mut leaves);
        leaves
    }
}

fn collect_leaves<'a>(prefix: &str, attrs: &'a BTreeMap<String, Attribute>, leaves: &mut Vec<(String, &'a Attribute)>) {
    for (name, attr) in attrs {
        let path = if prefix.is_empty() { name.clone() } else { format!("{prefix}.{name}") };
        match attr.attr_type.nested_attributes() {
            Some(children) => collect_leaves(&path, children, leaves),
            None => leaves.push((path, attr)),
        }
    }
}
