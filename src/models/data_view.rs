//! Host update payload
//!
//! Mirrors the subset of the host's `VisualUpdateOptions` the banner reads:
//! the viewport, and the first data view's table and metadata objects.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::settings::{SettingsPatch, SETTINGS_OBJECT_NAME};
use crate::errors::BannerError;

/// Viewport size in device-independent pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A single table cell value
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PrimitiveValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        PrimitiveValue::Number(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Text(value.to_string())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Text(value)
    }
}

/// Plain string form (numbers unformatted)
impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Number(n) => write!(f, "{}", n),
            PrimitiveValue::Text(s) => f.write_str(s),
            PrimitiveValue::Bool(b) => write!(f, "{}", b),
            PrimitiveValue::Null => Ok(()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DataViewTable {
    #[serde(default)]
    pub rows: Vec<Vec<PrimitiveValue>>,
}

/// Persisted property-pane objects, keyed by object name
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct DataViewObjects(pub HashMap<String, serde_json::Value>);

impl DataViewObjects {
    /// Parse the `settings` object into a patch; absent object is an empty patch
    pub fn settings_patch(&self) -> SettingsPatch {
        self.0
            .get(SETTINGS_OBJECT_NAME)
            .map(SettingsPatch::from_value)
            .unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DataViewMetadata {
    #[serde(default)]
    pub objects: Option<DataViewObjects>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DataView {
    #[serde(default)]
    pub metadata: DataViewMetadata,
    #[serde(default)]
    pub table: DataViewTable,
}

/// The update payload delivered by the host on each update event
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisualUpdateOptions {
    pub viewport: Viewport,
    #[serde(default)]
    pub data_views: Vec<DataView>,
}

/// Everything one banner update needs, pulled out of the host payload
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateInput {
    pub value: PrimitiveValue,
    pub label: PrimitiveValue,
    pub viewport: Viewport,
    pub settings: SettingsPatch,
}

impl UpdateInput {
    pub fn new(
        value: impl Into<PrimitiveValue>,
        label: impl Into<PrimitiveValue>,
        viewport: Viewport,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            viewport,
            settings: SettingsPatch::default(),
        }
    }

    pub fn with_settings(mut self, settings: SettingsPatch) -> Self {
        self.settings = settings;
        self
    }
}

impl TryFrom<&VisualUpdateOptions> for UpdateInput {
    type Error = BannerError;

    /// Requires at least one data view with a first row of two columns
    fn try_from(options: &VisualUpdateOptions) -> Result<Self, Self::Error> {
        let data_view = options
            .data_views
            .first()
            .ok_or_else(|| BannerError::invalid_input("no data view supplied"))?;

        let row = data_view
            .table
            .rows
            .first()
            .ok_or_else(|| BannerError::invalid_input("data view table has no rows"))?;

        if row.len() < 2 {
            return Err(BannerError::invalid_input(format!(
                "first row has {} column(s), expected 2",
                row.len()
            )));
        }

        let settings = match &data_view.metadata.objects {
            Some(objects) => objects.settings_patch(),
            None => SettingsPatch::default(),
        };

        Ok(UpdateInput {
            value: row[0].clone(),
            label: row[1].clone(),
            viewport: options.viewport,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(json: &str) -> VisualUpdateOptions {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extracts_first_row_and_settings() {
        let opts = options(
            r#"{
                "viewport": {"width": 300, "height": 200},
                "dataViews": [{
                    "metadata": {"objects": {"settings": {"topSizePercent": 60}}},
                    "table": {"rows": [[1234, "Sales"], [5, "ignored"]]}
                }]
            }"#,
        );

        let input = UpdateInput::try_from(&opts).unwrap();
        assert_eq!(input.value, PrimitiveValue::Number(1234.0));
        assert_eq!(input.label, PrimitiveValue::Text("Sales".to_string()));
        assert_eq!(input.viewport, Viewport::new(300.0, 200.0));
        assert_eq!(input.settings.top_size_percent, Some(60.0));
    }

    #[test]
    fn test_missing_objects_is_empty_patch() {
        let opts = options(
            r#"{"viewport": {"width": 1, "height": 1},
                "dataViews": [{"metadata": {}, "table": {"rows": [["a", "b"]]}}]}"#,
        );
        let input = UpdateInput::try_from(&opts).unwrap();
        assert_eq!(input.settings, SettingsPatch::default());
    }

    #[test]
    fn test_no_data_view_is_invalid() {
        let opts = options(r#"{"viewport": {"width": 1, "height": 1}, "dataViews": []}"#);
        assert!(matches!(
            UpdateInput::try_from(&opts),
            Err(BannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_no_rows_is_invalid() {
        let opts = options(
            r#"{"viewport": {"width": 1, "height": 1}, "dataViews": [{"table": {"rows": []}}]}"#,
        );
        assert!(matches!(
            UpdateInput::try_from(&opts),
            Err(BannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_single_column_is_invalid() {
        let opts = options(
            r#"{"viewport": {"width": 1, "height": 1}, "dataViews": [{"table": {"rows": [[42]]}}]}"#,
        );
        let err = UpdateInput::try_from(&opts).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: first row has 1 column(s), expected 2"
        );
    }

    #[test]
    fn test_malformed_settings_field_is_ignored() {
        let opts = options(
            r#"{"viewport": {"width": 1, "height": 1},
                "dataViews": [{"metadata": {"objects": {"settings": {"topSizePercent": "big", "topColor": 5}}},
                               "table": {"rows": [[1, 2]]}}]}"#,
        );
        let input = UpdateInput::try_from(&opts).unwrap();
        assert_eq!(input.value, PrimitiveValue::Number(1.0));
        assert_eq!(input.settings, SettingsPatch::default());
    }

    #[test]
    fn test_primitive_display() {
        assert_eq!(PrimitiveValue::Bool(true).to_string(), "true");
        assert_eq!(PrimitiveValue::Null.to_string(), "");
        assert_eq!(PrimitiveValue::from("x").to_string(), "x");
    }
}
