//! JavaScript-facing banner visual
//!
//! The host's JS shim constructs one `BannerVisual` per visual instance,
//! forwards every update event, and asks it to enumerate property-pane
//! objects.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::helpers::{deserialize, serialize, to_js_error};
use super::surface::SvgSurface;
use crate::banner::Banner;
use crate::models::VisualUpdateOptions;
use crate::renderers::SvgRenderer;
use crate::{wasm_info, wasm_log};

#[wasm_bindgen]
pub struct BannerVisual {
    banner: Banner,
    surface: SvgSurface,
}

#[wasm_bindgen]
impl BannerVisual {
    /// Mount the banner's SVG into `element`.
    ///
    /// `locale` is the host's locale tag (e.g. `"en-US"`); English when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(element: Element, locale: Option<String>) -> Result<BannerVisual, JsValue> {
        let banner = match locale.as_deref() {
            Some(tag) => Banner::for_locale_tag(tag),
            None => Banner::new(),
        };
        let surface = SvgSurface::mount(&element)?;

        wasm_info!("BannerVisual constructed (locale: {:?})", banner.locale());
        Ok(BannerVisual { banner, surface })
    }

    /// Apply one host update (`VisualUpdateOptions`)
    pub fn update(&mut self, options: JsValue) -> Result<(), JsValue> {
        let options: VisualUpdateOptions = deserialize(options, "update options")?;
        wasm_log!(
            "update: viewport {}x{}, {} data view(s)",
            options.viewport.width,
            options.viewport.height,
            options.data_views.len()
        );

        let scene = self
            .banner
            .update_from_options(&options)
            .map_err(|e| to_js_error(&e, "update"))?;
        self.surface.apply(scene)
    }

    /// Property-pane objects for `objectName`; empty for unknown groups
    #[wasm_bindgen(js_name = enumerateObjectInstances)]
    pub fn enumerate_object_instances(&self, object_name: &str) -> Result<JsValue, JsValue> {
        let instances = self.banner.enumerate_configuration_options(object_name);
        serialize(&instances, "enumerateObjectInstances")
    }

    /// Current settings as a plain object
    pub fn settings(&self) -> Result<JsValue, JsValue> {
        serialize(self.banner.settings(), "settings")
    }

    /// Current scene as standalone SVG markup; empty before the first update
    #[wasm_bindgen(js_name = renderSvg)]
    pub fn render_svg(&self) -> String {
        self.banner
            .scene()
            .map(SvgRenderer::render)
            .unwrap_or_default()
    }
}
