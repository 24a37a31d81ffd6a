//! Capability descriptors.

use crate::errors::{DescriptorError, DescriptorResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A named capability contract: the member names a candidate must (or must
/// not) expose before the capability can be used.
///
/// The two property lists carry one polarity each: every name in
/// `required_properties` must be present on the candidate, every name in
/// `forbidden_properties` must be absent. Method names must resolve to
/// invocable members; property presence accepts a member of any kind.
///
/// Member lists keep their construction order, and checks report the first
/// violation in that order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CapabilityDescriptor {
    /// Label used in error messages and reports.
    pub name: String,

    /// Members the candidate must expose as invocable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_methods: Vec<String>,

    /// Members the candidate must expose.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_properties: Vec<String>,

    /// Members the candidate must not expose.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forbidden_properties: Vec<String>,
}

impl CapabilityDescriptor {
    /// Create a descriptor requiring the given methods.
    pub fn new<I, S>(name: impl Into<String>, required_methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            required_methods: required_methods.into_iter().map(Into::into).collect(),
            required_properties: Vec::new(),
            forbidden_properties: Vec::new(),
        }
    }

    /// Create a descriptor with no method requirements; property
    /// requirements are added with the `with_*` builders.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_required_property(mut self, property: impl Into<String>) -> Self {
        self.required_properties.push(property.into());
        self
    }

    pub fn with_forbidden_property(mut self, property: impl Into<String>) -> Self {
        self.forbidden_properties.push(property.into());
        self
    }

    /// True when the descriptor places no requirements at all.
    pub fn is_vacuous(&self) -> bool {
        self.required_methods.is_empty()
            && self.required_properties.is_empty()
            && self.forbidden_properties.is_empty()
    }

    /// Build a descriptor from dynamic data crossing a deserialization
    /// boundary.
    ///
    /// Unlike the serde derive, this path is lenient about entry types:
    /// non-string entries inside the member-name arrays are silently
    /// dropped. A missing array field is treated as empty; a field that is
    /// present but not an array is rejected.
    pub fn from_value(value: &Value) -> DescriptorResult<Self> {
        let object = value.as_object().ok_or(DescriptorError::NotAnObject)?;

        let name = object
            .get("name")
            .and_then(Value::as_str)
            .ok_or(DescriptorError::MissingName)?;

        Ok(Self {
            name: name.to_string(),
            required_methods: string_entries(object, "required_methods")?,
            required_properties: string_entries(object, "required_properties")?,
            forbidden_properties: string_entries(object, "forbidden_properties")?,
        })
    }
}

impl fmt::Display for CapabilityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} methods, {} required / {} forbidden properties)",
            self.name,
            self.required_methods.len(),
            self.required_properties.len(),
            self.forbidden_properties.len()
        )
    }
}

fn string_entries(
    object: &serde_json::Map<String, Value>,
    field: &str,
) -> DescriptorResult<Vec<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => Ok(entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()),
        Some(_) => Err(DescriptorError::InvalidField(field.to_string())),
    }
}
