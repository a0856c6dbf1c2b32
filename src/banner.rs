//! The banner component
//!
//! Owns the settings record and the last rendered scene. Each update merges
//! the incoming settings, formats the two values, recomputes the layout and
//! replaces the scene; the DOM surface (see `api::surface`) only applies it.

use num_format::Locale;

use crate::errors::BannerError;
use crate::models::{
    ColorValue, PropertyDescriptor, PropertyValue, Settings, UpdateInput, VisualObjectInstance,
    VisualUpdateOptions, MAX_HEIGHT_RANGE, SETTINGS_OBJECT_NAME, TOP_SIZE_RANGE,
};
use crate::renderers::{BannerLayout, BannerScene};
use crate::utils::{format_value, resolve_locale};

/// Display name of the settings group in the property pane
pub const SETTINGS_DISPLAY_NAME: &str = "Colors";

#[derive(Debug)]
pub struct Banner {
    settings: Settings,
    locale: Locale,
    scene: Option<BannerScene>,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}

impl Banner {
    /// Create a banner with default settings and English formatting
    pub fn new() -> Self {
        Self::with_locale(Locale::en)
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            settings: Settings::default(),
            locale,
            scene: None,
        }
    }

    /// Create a banner for a host locale tag such as `"en-US"`
    pub fn for_locale_tag(tag: &str) -> Self {
        Self::with_locale(resolve_locale(tag))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Scene from the most recent update, None before the first one
    pub fn scene(&self) -> Option<&BannerScene> {
        self.scene.as_ref()
    }

    /// Run one update from the host payload.
    ///
    /// Invalid payloads are rejected before any state changes.
    pub fn update_from_options(
        &mut self,
        options: &VisualUpdateOptions,
    ) -> Result<&BannerScene, BannerError> {
        let input = UpdateInput::try_from(options)?;
        self.update(&input)
    }

    /// Merge settings, format values and rebuild the scene
    pub fn update(&mut self, input: &UpdateInput) -> Result<&BannerScene, BannerError> {
        let viewport = input.viewport;
        if !viewport.width.is_finite() || !viewport.height.is_finite() {
            return Err(BannerError::invalid_input(format!(
                "viewport must be finite, got {}x{}",
                viewport.width, viewport.height
            )));
        }

        if self.settings.merge(&input.settings) {
            log::debug!("Settings updated: {:?}", self.settings);
        }

        let value = format_value(&input.value, &self.locale);
        let label = format_value(&input.label, &self.locale);

        let layout = BannerLayout::compute(&self.settings, viewport);
        log::debug!(
            "Banner layout {}x{}: primary={}px secondary={:?}",
            layout.width,
            layout.height,
            layout.primary.font_size,
            layout.secondary.map(|s| s.font_size)
        );

        let scene = BannerScene::build(&layout, &self.settings, &value, &label);
        Ok(&*self.scene.insert(scene))
    }

    /// Describe the editable settings for the host's property pane.
    ///
    /// Only the `settings` group is recognized; any other name yields an
    /// empty list.
    pub fn enumerate_configuration_options(&self, object_name: &str) -> Vec<VisualObjectInstance> {
        if object_name != SETTINGS_OBJECT_NAME {
            return Vec::new();
        }

        let s = &self.settings;
        let instance = VisualObjectInstance::new(SETTINGS_OBJECT_NAME, SETTINGS_DISPLAY_NAME)
            .with_property(
                "topColor",
                PropertyDescriptor::new(
                    "Top Color",
                    "Visual_DefaultColorTop",
                    PropertyValue::Fill(ColorValue::solid(s.top_color.as_str())),
                ),
            )
            .with_property(
                "bottomColor",
                PropertyDescriptor::new(
                    "Bottom Color",
                    "Visual_DefaultColorBottom",
                    PropertyValue::Fill(ColorValue::solid(s.bottom_color.as_str())),
                ),
            )
            .with_property(
                "topSizePercent",
                PropertyDescriptor::new(
                    "Top Text %",
                    "Visual_TopHeight",
                    PropertyValue::Integer(s.top_size_percent),
                ),
            )
            .with_property(
                "maxHeightPercent",
                PropertyDescriptor::new(
                    "Max Height %",
                    "Visual_MaxHeight",
                    PropertyValue::Integer(s.max_height_percent),
                ),
            )
            .with_range("topSizePercent", TOP_SIZE_RANGE)
            .with_range("maxHeightPercent", MAX_HEIGHT_RANGE);

        vec![instance]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrimitiveValue, SettingsPatch, Viewport};

    #[test]
    fn test_no_scene_before_first_update() {
        let banner = Banner::new();
        assert!(banner.scene().is_none());
        assert_eq!(banner.settings(), &Settings::default());
    }

    #[test]
    fn test_update_formats_number_and_keeps_label() {
        let mut banner = Banner::new();
        let input = UpdateInput::new(1234567.0, "Revenue", Viewport::new(300.0, 200.0));

        let scene = banner.update(&input).unwrap();
        assert_eq!(scene.primary.text, "1,234,567");
        assert_eq!(scene.secondary.text, "Revenue");
    }

    #[test]
    fn test_update_uses_locale() {
        let mut banner = Banner::for_locale_tag("de-DE");
        let input = UpdateInput::new(1234.5, PrimitiveValue::Null, Viewport::new(10.0, 10.0));
        assert_eq!(banner.update(&input).unwrap().primary.text, "1.234,5");
    }

    #[test]
    fn test_non_finite_viewport_rejected_without_state_change() {
        let mut banner = Banner::new();
        let input = UpdateInput::new(1.0, "x", Viewport::new(f64::NAN, 10.0)).with_settings(
            SettingsPatch {
                top_size_percent: Some(50.0),
                ..SettingsPatch::default()
            },
        );

        assert!(matches!(banner.update(&input), Err(BannerError::InvalidInput(_))));
        assert_eq!(banner.settings().top_size_percent, 75.0);
        assert!(banner.scene().is_none());
    }

    #[test]
    fn test_enumeration_reflects_current_settings() {
        let mut banner = Banner::new();
        let input = UpdateInput::new(1.0, "x", Viewport::new(10.0, 10.0)).with_settings(
            SettingsPatch {
                top_color: Some(ColorValue::solid("Green")),
                max_height_percent: Some(80.0),
                ..SettingsPatch::default()
            },
        );
        banner.update(&input).unwrap();

        let instances = banner.enumerate_configuration_options("settings");
        assert_eq!(instances.len(), 1);

        let instance = &instances[0];
        assert_eq!(instance.display_name, "Colors");
        assert_eq!(instance.color("topColor"), Some("Green"));
        assert_eq!(instance.color("bottomColor"), Some("Black"));
        assert_eq!(instance.integer("maxHeightPercent"), Some(80.0));
        assert_eq!(instance.range("maxHeightPercent"), Some(MAX_HEIGHT_RANGE));
        assert!(instance.selector.is_none());
    }

    #[test]
    fn test_enumeration_unknown_group() {
        assert!(Banner::new().enumerate_configuration_options("dataPoint").is_empty());
    }
}
