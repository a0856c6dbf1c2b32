//! Banner settings record and host-driven merge
//!
//! Settings are stored exactly as the host's property pane sends them
//! (percentages stay percentages). Range enforcement happens at layout time,
//! see `Settings::top_size_ratio` and `Settings::max_height_ratio`.

use serde::{Deserialize, Serialize};

/// Name of the property-pane object that carries the banner settings
pub const SETTINGS_OBJECT_NAME: &str = "settings";

/// Default color for both lines
pub const DEFAULT_COLOR: &str = "Black";

/// Default share of the usable height given to the primary line
pub const DEFAULT_TOP_SIZE_PERCENT: f64 = 75.0;

/// Default share of the viewport height usable by both lines
pub const DEFAULT_MAX_HEIGHT_PERCENT: f64 = 100.0;

/// Declared range for `topSizePercent`
pub const TOP_SIZE_RANGE: NumberRange = NumberRange { min: 10.0, max: 100.0 };

/// Declared range for `maxHeightPercent`
pub const MAX_HEIGHT_RANGE: NumberRange = NumberRange { min: 50.0, max: 100.0 };

/// Inclusive numeric range advertised to the property pane
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
}

impl NumberRange {
    /// Clamp a value into the range
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Color in the host's fill shape (`{ "solid": { "color": "Red" } }`)
/// or as a bare string
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ColorValue {
    Fill { solid: SolidColor },
    Plain(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SolidColor {
    pub color: String,
}

impl ColorValue {
    pub fn solid(color: impl Into<String>) -> Self {
        ColorValue::Fill {
            solid: SolidColor { color: color.into() },
        }
    }

    /// The textual color regardless of shape
    pub fn color(&self) -> &str {
        match self {
            ColorValue::Fill { solid } => &solid.color,
            ColorValue::Plain(color) => color,
        }
    }
}

/// The banner configuration record
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub top_color: String,
    pub bottom_color: String,
    pub top_size_percent: f64,
    pub max_height_percent: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_color: DEFAULT_COLOR.to_string(),
            bottom_color: DEFAULT_COLOR.to_string(),
            top_size_percent: DEFAULT_TOP_SIZE_PERCENT,
            max_height_percent: DEFAULT_MAX_HEIGHT_PERCENT,
        }
    }
}

impl Settings {
    /// Merge a patch in place: present fields override, absent fields are kept.
    ///
    /// Returns true when any field changed.
    pub fn merge(&mut self, patch: &SettingsPatch) -> bool {
        let before = self.clone();

        if let Some(color) = &patch.top_color {
            self.top_color = color.color().to_string();
        }
        if let Some(color) = &patch.bottom_color {
            self.bottom_color = color.color().to_string();
        }
        if let Some(percent) = patch.top_size_percent.filter(|p| p.is_finite()) {
            self.top_size_percent = percent;
        }
        if let Some(percent) = patch.max_height_percent.filter(|p| p.is_finite()) {
            self.max_height_percent = percent;
        }

        *self != before
    }

    /// Primary line share as a ratio, clamped to the declared range
    pub fn top_size_ratio(&self) -> f64 {
        TOP_SIZE_RANGE.clamp(self.top_size_percent) / 100.0
    }

    /// Usable height share as a ratio, clamped to the declared range
    pub fn max_height_ratio(&self) -> f64 {
        MAX_HEIGHT_RANGE.clamp(self.max_height_percent) / 100.0
    }
}

/// Partial settings as delivered by the host under `objects["settings"]`
///
/// Every field is optional; unknown keys are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_color: Option<ColorValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_color: Option<ColorValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_size_percent: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height_percent: Option<f64>,
}

impl SettingsPatch {
    /// Parse the host's settings object field by field.
    ///
    /// A field that does not parse is treated as absent so the current value
    /// is kept; only the data payload can fail an update.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let Some(object) = value.as_object() else {
            if !value.is_null() {
                log::warn!("Ignoring settings object that is not a map: {}", value);
            }
            return Self::default();
        };

        Self {
            top_color: lenient_field(object, "topColor"),
            bottom_color: lenient_field(object, "bottomColor"),
            top_size_percent: lenient_field(object, "topSizePercent"),
            max_height_percent: lenient_field(object, "maxHeightPercent"),
        }
    }
}

fn lenient_field<T: serde::de::DeserializeOwned>(
    object: &serde_json::Map<String, serde_json::Value>,
    name: &str,
) -> Option<T> {
    let value = object.get(name).filter(|v| !v.is_null())?;
    match T::deserialize(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("Ignoring settings.{} = {}: {}", name, value, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.top_color, "Black");
        assert_eq!(settings.bottom_color, "Black");
        assert_eq!(settings.top_size_percent, 75.0);
        assert_eq!(settings.max_height_percent, 100.0);
    }

    #[test]
    fn test_merge_preserves_unspecified_fields() {
        let mut settings = Settings {
            top_color: "Red".to_string(),
            ..Settings::default()
        };
        let patch = SettingsPatch {
            bottom_color: Some(ColorValue::solid("Blue")),
            ..SettingsPatch::default()
        };

        assert!(settings.merge(&patch));
        assert_eq!(
            settings,
            Settings {
                top_color: "Red".to_string(),
                bottom_color: "Blue".to_string(),
                top_size_percent: 75.0,
                max_height_percent: 100.0,
            }
        );
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut settings = Settings::default();
        assert!(!settings.merge(&SettingsPatch::default()));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_non_finite_percent_is_ignored() {
        let mut settings = Settings::default();
        let patch = SettingsPatch {
            top_size_percent: Some(f64::NAN),
            max_height_percent: Some(f64::INFINITY),
            ..SettingsPatch::default()
        };
        assert!(!settings.merge(&patch));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_out_of_range_stored_but_clamped_for_layout() {
        let mut settings = Settings::default();
        settings.merge(&SettingsPatch {
            top_size_percent: Some(5.0),
            max_height_percent: Some(150.0),
            ..SettingsPatch::default()
        });

        assert_eq!(settings.top_size_percent, 5.0);
        assert_eq!(settings.max_height_percent, 150.0);
        assert_eq!(settings.top_size_ratio(), 0.1);
        assert_eq!(settings.max_height_ratio(), 1.0);
    }

    #[test]
    fn test_patch_accepts_fill_and_plain_colors() {
        let patch: SettingsPatch = serde_json::from_str(
            r##"{"topColor": {"solid": {"color": "#ff0000"}}, "bottomColor": "Blue", "extra": 1}"##,
        )
        .unwrap();

        assert_eq!(patch.top_color.as_ref().map(|c| c.color()), Some("#ff0000"));
        assert_eq!(patch.bottom_color.as_ref().map(|c| c.color()), Some("Blue"));
        assert!(patch.top_size_percent.is_none());
    }

    #[test]
    fn test_bad_fields_are_dropped_individually() {
        let value = serde_json::json!({
            "topColor": 5,
            "bottomColor": {"solid": {"color": "Blue"}},
            "topSizePercent": "big",
            "maxHeightPercent": 80
        });
        let patch = SettingsPatch::from_value(&value);

        assert_eq!(patch.top_color, None);
        assert_eq!(patch.bottom_color, Some(ColorValue::solid("Blue")));
        assert_eq!(patch.top_size_percent, None);
        assert_eq!(patch.max_height_percent, Some(80.0));
    }

    #[test]
    fn test_non_map_settings_is_empty_patch() {
        assert_eq!(
            SettingsPatch::from_value(&serde_json::json!("oops")),
            SettingsPatch::default()
        );
    }

    #[test]
    fn test_range_clamp() {
        assert_eq!(TOP_SIZE_RANGE.clamp(0.0), 10.0);
        assert_eq!(TOP_SIZE_RANGE.clamp(90.0), 90.0);
        assert_eq!(MAX_HEIGHT_RANGE.clamp(49.9), 50.0);
    }
}
