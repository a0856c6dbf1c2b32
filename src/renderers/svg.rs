//! SVG markup output
//!
//! Renders a `BannerScene` as a standalone SVG document string, for hosts
//! that want markup instead of live DOM nodes.

use std::fmt::Write;

use super::display_list::{BannerScene, TextNode, CONTAINER_CLASS, SVG_CLASS};

/// SVG document generator
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn render(scene: &BannerScene) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" width="{}" height="{}">"#,
            SVG_CLASS, scene.width, scene.height
        );
        let _ = write!(out, r#"<g class="{}">"#, CONTAINER_CLASS);
        Self::render_text(&mut out, &scene.primary);
        Self::render_text(&mut out, &scene.secondary);
        out.push_str("</g></svg>");
        out
    }

    fn render_text(out: &mut String, node: &TextNode) {
        let _ = write!(out, r#"<text class="{}""#, escape(&node.class));
        if let Some(placement) = &node.placement {
            for (name, value) in placement.attributes() {
                let _ = write!(out, r#" {}="{}""#, name, escape(&value));
            }
            let _ = write!(out, r#" style="{}""#, escape(&placement.style()));
        }
        let _ = write!(out, ">{}</text>", escape(&node.text));
    }
}

/// Escape text for use in XML content and double-quoted attributes
fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Settings, Viewport};
    use crate::renderers::layout::BannerLayout;

    #[test]
    fn test_render_two_lines() {
        let settings = Settings::default();
        let layout = BannerLayout::compute(&settings, Viewport::new(400.0, 200.0));
        let scene = BannerScene::build(&layout, &settings, "1,234", "Sales");

        let svg = SvgRenderer::render(&scene);
        assert_eq!(
            svg,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" class="circleCard" width="400" height="200">"#,
                r#"<g class="container">"#,
                r#"<text class="textValue" x="50%" y="0%" dy="135" text-anchor="middle" style="font-size: 150px; fill: Black;">1,234</text>"#,
                r#"<text class="textLabel" x="50%" y="150" dy="40.5" text-anchor="middle" style="font-size: 45px; fill: Black;">Sales</text>"#,
                "</g></svg>"
            )
        );
    }

    #[test]
    fn test_escapes_text() {
        let settings = Settings {
            top_size_percent: 100.0,
            ..Settings::default()
        };
        let layout = BannerLayout::compute(&settings, Viewport::new(10.0, 10.0));
        let scene = BannerScene::build(&layout, &settings, "A & <B>", "hidden");

        let svg = SvgRenderer::render(&scene);
        assert!(svg.contains(">A &amp; &lt;B&gt;</text>"));
        assert!(svg.contains(r#"<text class="textLabel"></text>"#));
    }
}
