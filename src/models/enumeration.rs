//! Property-pane descriptors
//!
//! Shapes returned to the host's property editor from
//! `enumerateObjectInstances`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::settings::{ColorValue, NumberRange};

/// Typed value shown in the pane, serialized as `{"fill": ...}` or `{"integer": n}`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum PropertyValue {
    Fill(ColorValue),
    Integer(f64),
}

/// One editable property: label, localization key and current value
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub display_name: String,
    pub display_name_key: String,
    #[serde(rename = "type")]
    pub value: PropertyValue,
}

impl PropertyDescriptor {
    pub fn new(display_name: &str, display_name_key: &str, value: PropertyValue) -> Self {
        Self {
            display_name: display_name.to_string(),
            display_name_key: display_name_key.to_string(),
            value,
        }
    }
}

/// Validation metadata for a bounded property
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidValues {
    pub number_range: NumberRange,
}

/// A configuration group as consumed by the host's property editor
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisualObjectInstance {
    pub object_name: String,
    pub display_name: String,
    pub properties: BTreeMap<String, PropertyDescriptor>,
    pub valid_values: BTreeMap<String, ValidValues>,
    /// Always null: the banner has no per-data-point settings
    pub selector: Option<serde_json::Value>,
}

impl VisualObjectInstance {
    pub fn new(object_name: &str, display_name: &str) -> Self {
        Self {
            object_name: object_name.to_string(),
            display_name: display_name.to_string(),
            properties: BTreeMap::new(),
            valid_values: BTreeMap::new(),
            selector: None,
        }
    }

    pub fn with_property(mut self, name: &str, descriptor: PropertyDescriptor) -> Self {
        self.properties.insert(name.to_string(), descriptor);
        self
    }

    pub fn with_range(mut self, name: &str, range: NumberRange) -> Self {
        self.valid_values
            .insert(name.to_string(), ValidValues { number_range: range });
        self
    }

    /// Numeric value of an integer property, if present
    pub fn integer(&self, name: &str) -> Option<f64> {
        match self.properties.get(name).map(|p| &p.value) {
            Some(PropertyValue::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    /// Color of a fill property, if present
    pub fn color(&self, name: &str) -> Option<&str> {
        match self.properties.get(name).map(|p| &p.value) {
            Some(PropertyValue::Fill(color)) => Some(color.color()),
            _ => None,
        }
    }

    pub fn range(&self, name: &str) -> Option<NumberRange> {
        self.valid_values.get(name).map(|v| v.number_range)
    }
}
