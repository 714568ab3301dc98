//! # Property Schema
//!
//! Typed property bags exchanged with the provider. The schema distinguishes
//! "absent" from any default value: an unset field never appears on the wire
//! and reading it yields `None` rather than an error.
//!
//! The [`ResourceInputs`] trait is the seam between a typed argument struct
//! and the wire format. Argument construction never validates; required
//! fields are checked at dispatch time by the client, which is also the only
//! place [`ResourceInputs::validate`] is called from.

use crate::error::RegistrationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single property value.
///
/// The resource schemas this SDK serves only carry strings and booleans, so
/// the value space is deliberately small. Serialization is untagged: a
/// string property is a JSON string, a boolean property a JSON boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Bool(bool),
}

impl PropertyValue {
    /// The string payload, or `None` for non-string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(value) => Some(value),
            PropertyValue::Bool(_) => None,
        }
    }

    /// The boolean payload, or `None` for non-boolean values.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(value) => Some(*value),
            PropertyValue::String(_) => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

/// Named property bag sent to (and received from) the provider.
///
/// Setting a key twice keeps the last value. Unset keys are absent: they
/// serialize as no key at all, never as `null` or an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(BTreeMap<String, PropertyValue>);

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a property, overwriting any prior value under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Read a property. Unset keys yield `None`.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    /// Read a string property. `None` when unset or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropertyValue::as_str)
    }

    /// Read a boolean property. `None` when unset or not a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(PropertyValue::as_bool)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Typed argument sets that can be dispatched as a property bag.
///
/// Implementors project only the fields that are actually set; the client
/// calls [`validate`](Self::validate) right before building the envelope,
/// unless the options bind to an existing resource.
pub trait ResourceInputs: Send + Sync {
    /// Check that required fields are present and non-empty.
    fn validate(&self) -> Result<(), RegistrationError>;

    /// Project the set fields into wire properties. Unset fields must be
    /// left out entirely.
    fn to_properties(&self) -> PropertyMap;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_prior_value() {
        let mut properties = PropertyMap::new();
        properties.set("sitePath", "/old");
        properties.set("sitePath", "/new");
        assert_eq!(properties.len(), 1);
        assert_eq!(properties.get_str("sitePath"), Some("/new"));
    }

    #[test]
    fn test_unset_key_reads_as_absent() {
        let properties = PropertyMap::new();
        assert!(properties.get("indexDocument").is_none());
        assert!(!properties.contains("indexDocument"));
    }

    #[test]
    fn test_typed_accessors_reject_mismatched_values() {
        let mut properties = PropertyMap::new();
        properties.set("withCDN", true);
        assert_eq!(properties.get_bool("withCDN"), Some(true));
        assert_eq!(properties.get_str("withCDN"), None);
    }

    #[test]
    fn test_unset_keys_serialize_as_absent() {
        let mut properties = PropertyMap::new();
        properties.set("sitePath", "/www");
        properties.set("withCDN", true);

        let json = serde_json::to_value(&properties).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "sitePath": "/www", "withCDN": true })
        );
        // No null placeholders for the fields that were never set.
        assert!(json.get("indexDocument").is_none());
        assert!(json.get("errorDocument").is_none());
    }

    #[test]
    fn test_property_value_roundtrip() {
        let json = serde_json::json!({ "sitePath": "/www", "withCDN": false });
        let properties: PropertyMap = serde_json::from_value(json).unwrap();
        assert_eq!(properties.get_str("sitePath"), Some("/www"));
        assert_eq!(properties.get_bool("withCDN"), Some(false));
    }
}
