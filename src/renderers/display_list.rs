//! Scene graph for banner rendering
//!
//! A `BannerScene` holds every attribute, style and text content the drawing
//! surface needs, so renderers only copy values onto nodes and never do
//! layout arithmetic themselves.

use serde::{Deserialize, Serialize};

use super::layout::{BannerLayout, LineMetrics};
use crate::models::Settings;

/// CSS class of the root `<svg>` element
pub const SVG_CLASS: &str = "circleCard";

/// CSS class of the `<g>` holding both lines
pub const CONTAINER_CLASS: &str = "container";

/// CSS class of the primary (value) text node
pub const PRIMARY_CLASS: &str = "textValue";

/// CSS class of the secondary (label) text node
pub const SECONDARY_CLASS: &str = "textLabel";

/// Horizontal position shared by both lines
pub const CENTER_X: &str = "50%";

/// Vertical position of the primary line box
pub const TOP_Y: &str = "0%";

/// Position, size and color of a visible text line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextPlacement {
    pub x: String,
    pub y: String,
    pub dy: f64,
    pub text_anchor: String,
    pub font_size: f64,
    pub fill: String,
}

impl TextPlacement {
    fn new(y: String, metrics: &LineMetrics, fill: &str) -> Self {
        Self {
            x: CENTER_X.to_string(),
            y,
            dy: metrics.dy,
            text_anchor: "middle".to_string(),
            font_size: metrics.font_size,
            fill: fill.to_string(),
        }
    }

    /// SVG presentation attributes in document order
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("x", self.x.clone()),
            ("y", self.y.clone()),
            ("dy", self.dy.to_string()),
            ("text-anchor", self.text_anchor.clone()),
        ]
    }

    /// Inline style carrying font size and fill
    pub fn style(&self) -> String {
        format!("font-size: {}px; fill: {};", self.font_size, self.fill)
    }
}

/// One `<text>` node
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextNode {
    pub class: String,
    pub text: String,
    /// None when the line is cleared
    pub placement: Option<TextPlacement>,
}

impl TextNode {
    pub fn empty(class: &str) -> Self {
        Self {
            class: class.to_string(),
            text: String::new(),
            placement: None,
        }
    }
}

/// Full render state of the banner after an update
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BannerScene {
    pub width: f64,
    pub height: f64,
    pub primary: TextNode,
    pub secondary: TextNode,
}

impl BannerScene {
    /// Build the scene from a computed layout and the formatted strings
    pub fn build(layout: &BannerLayout, settings: &Settings, value: &str, label: &str) -> Self {
        let primary = TextNode {
            class: PRIMARY_CLASS.to_string(),
            text: value.to_string(),
            placement: Some(TextPlacement::new(
                TOP_Y.to_string(),
                &layout.primary,
                &settings.top_color,
            )),
        };

        // Single-line mode clears the label entirely
        let secondary = match &layout.secondary {
            Some(metrics) => TextNode {
                class: SECONDARY_CLASS.to_string(),
                text: label.to_string(),
                placement: Some(TextPlacement::new(
                    metrics.y.to_string(),
                    metrics,
                    &settings.bottom_color,
                )),
            },
            None => TextNode::empty(SECONDARY_CLASS),
        };

        Self {
            width: layout.width,
            height: layout.height,
            primary,
            secondary,
        }
    }
}
