//! Layout calculation for the two banner lines
//!
//! Pure arithmetic: given the settings and the viewport, compute the font
//! sizes and vertical offsets of the primary and secondary lines.

use crate::models::{Settings, Viewport};

/// Baseline offset as a fraction of the font size (glyph ascent)
pub const BASELINE_RATIO: f64 = 0.9;

/// Secondary font is this fraction of the height left over by the primary line
pub const SECONDARY_SCALE: f64 = 0.9;

/// Top-size ratios above this hide the secondary line
pub const SINGLE_LINE_THRESHOLD: f64 = 0.9;

/// Vertical placement of one line of text
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMetrics {
    /// Font size in pixels
    pub font_size: f64,
    /// Top of the line box
    pub y: f64,
    /// Baseline shift below `y`
    pub dy: f64,
}

impl LineMetrics {
    fn at(y: f64, font_size: f64) -> Self {
        Self {
            font_size,
            y,
            dy: font_size * BASELINE_RATIO,
        }
    }
}

/// Computed layout for one update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BannerLayout {
    pub width: f64,
    pub height: f64,
    pub primary: LineMetrics,
    /// None in single-line mode
    pub secondary: Option<LineMetrics>,
}

impl BannerLayout {
    pub fn compute(settings: &Settings, viewport: Viewport) -> Self {
        let width = viewport.width.max(0.0);
        let height = viewport.height.max(0.0);

        let top_ratio = settings.top_size_ratio();
        let usable = height * settings.max_height_ratio();

        let primary_size = usable * top_ratio;
        let primary = LineMetrics::at(0.0, primary_size);

        let secondary = if top_ratio <= SINGLE_LINE_THRESHOLD {
            let secondary_size = usable * (1.0 - top_ratio) * SECONDARY_SCALE;
            Some(LineMetrics::at(primary_size, secondary_size))
        } else {
            None
        };

        Self {
            width,
            height,
            primary,
            secondary,
        }
    }
}
