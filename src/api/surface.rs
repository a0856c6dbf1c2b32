//! Retained SVG nodes inside the host's mounting element
//!
//! The surface is created once at construction and mutated in place on
//! every update by copying a `BannerScene` onto the nodes.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::renderers::display_list::{
    BannerScene, TextNode, CONTAINER_CLASS, PRIMARY_CLASS, SECONDARY_CLASS, SVG_CLASS,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Attributes a cleared text node must not keep
const TEXT_ATTRIBUTES: [&str; 5] = ["x", "y", "dy", "text-anchor", "style"];

pub struct SvgSurface {
    svg: Element,
    primary: Element,
    secondary: Element,
}

impl SvgSurface {
    /// Append `<svg><g><text/><text/></g></svg>` to the mounting element
    pub fn mount(parent: &Element) -> Result<Self, JsValue> {
        let document = parent
            .owner_document()
            .ok_or_else(|| JsValue::from_str("Mounting element has no owner document"))?;

        let svg = create(&document, "svg", SVG_CLASS)?;
        let container = create(&document, "g", CONTAINER_CLASS)?;
        let primary = create(&document, "text", PRIMARY_CLASS)?;
        let secondary = create(&document, "text", SECONDARY_CLASS)?;

        container.append_child(&primary)?;
        container.append_child(&secondary)?;
        svg.append_child(&container)?;
        parent.append_child(&svg)?;

        Ok(Self {
            svg,
            primary,
            secondary,
        })
    }

    /// Copy the scene onto the retained nodes
    pub fn apply(&self, scene: &BannerScene) -> Result<(), JsValue> {
        self.svg.set_attribute("width", &scene.width.to_string())?;
        self.svg.set_attribute("height", &scene.height.to_string())?;
        apply_text(&self.primary, &scene.primary)?;
        apply_text(&self.secondary, &scene.secondary)?;
        Ok(())
    }
}

fn create(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element_ns(Some(SVG_NS), tag)?;
    element.set_attribute("class", class)?;
    Ok(element)
}

fn apply_text(element: &Element, node: &TextNode) -> Result<(), JsValue> {
    element.set_text_content(Some(node.text.as_str()));
    match &node.placement {
        Some(placement) => {
            for (name, value) in placement.attributes() {
                element.set_attribute(name, &value)?;
            }
            element.set_attribute("style", &placement.style())?;
        }
        None => {
            for name in TEXT_ATTRIBUTES {
                element.remove_attribute(name)?;
            }
        }
    }
    Ok(())
}
