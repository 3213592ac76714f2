use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use kube::api::{
    ApiResource,
    GroupVersionKind,
};
use serde::{
    de,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

use crate::errors::*;
use crate::schema::snake_case;

// GVK is a "newtype" wrapper around the kube GroupVersionKind object that lets us provide custom
// serialization methods and the naming helpers that data sources need.
//
// The string format is "group/version.kind" (or "version.kind" for the core group).  Both
// "version.kind" and "/version.kind" parse as core-group GVKs.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct GVK(GroupVersionKind);

impl GVK {
    pub fn new(group: &str, version: &str, kind: &str) -> GVK {
        GVK(GroupVersionKind::gvk(group, version, kind))
    }

    pub fn api_resource(&self, plural: &str) -> ApiResource {
        ApiResource::from_gvk_with_plural(&self.0, plural)
    }

    // The fixed suffix appended to the provider type name, e.g.
    // flow.volcano.sh/v1alpha1.JobTemplate => _flow_volcano_sh_job_template_v1alpha1
    pub fn type_name_suffix(&self) -> String {
        let kind = snake_case(&self.0.kind);
        if self.0.group.is_empty() {
            format!("_{kind}_{}", self.0.version)
        } else {
            let group = self.0.group.replace(['.', '-'], "_");
            format!("_{group}_{kind}_{}", self.0.version)
        }
    }
}

// Impl Deref lets a GVK act like a GroupVersionKind anywhere one of those is expected
impl Deref for GVK {
    type Target = GroupVersionKind;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for GVK {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut group = Cow::from(&self.0.group);
        if !group.is_empty() {
            group.to_mut().push('/');
        }

        write!(f, "{group}{}.{}", self.0.version, self.0.kind)
    }
}

impl FromStr for GVK {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<GVK> {
        let p1: Vec<_> = value.split('/').collect();
        let (group, rest) = match p1.len() {
            2 => (p1[0], p1[1]),
            1 => ("", p1[0]),
            _ => bail!("invalid format for gvk: {value}"),
        };

        // Neither versions nor kinds may contain a '.'
        match rest.split_once('.') {
            Some((version, kind)) if !version.is_empty() && !kind.is_empty() && !kind.contains('.') => {
                Ok(GVK::new(group, version, kind))
            },
            _ => bail!("invalid format for gvk: {value}"),
        }
    }
}

impl Serialize for GVK {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // reuse the display impl for serializing
        serializer.serialize_str(&format!("{self}"))
    }
}

struct GVKVisitor;

impl<'de> de::Visitor<'de> for GVKVisitor {
    type Value = GVK;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a GroupVersionKind in the format group/version.kind")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        GVK::from_str(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for GVK {
    fn deserialize<D>(deserializer: D) -> Result<GVK, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(GVKVisitor)
    }
}
