use crate::dom;
use tilt_core::Surface;
use web_sys as web;

/// A DOM element whose inline style receives the layer transforms.
pub struct ElementSurface(web::HtmlElement);

impl ElementSurface {
    /// Looked up on every sample, so an element that mounts late is picked
    /// up on the next event.
    pub fn find(document: &web::Document, element_id: &str) -> Option<Self> {
        dom::html_element(document, element_id).map(Self)
    }
}

impl Surface for ElementSurface {
    fn set_transform(&mut self, value: &str) {
        let _ = self.0.style().set_property("transform", value);
    }

    fn set_background_position(&mut self, value: &str) {
        let _ = self.0.style().set_property("background-position", value);
    }
}
