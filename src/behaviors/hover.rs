use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config;
use crate::dom::{set_style, Bindings, SiteElements};
use crate::error::BehaviorError;

pub fn install(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    for button in &elements.buttons {
        let lifted = button.clone();
        bindings.listen(button, "mouseenter", move |_| {
            set_style(&lifted, "transform", "translateY(-2px)");
        })?;
        let lowered = button.clone();
        bindings.listen(button, "mouseleave", move |_| {
            set_style(&lowered, "transform", "translateY(0)");
        })?;
    }

    for item in &elements.portfolio_items {
        let entered = item.clone();
        bindings.listen(item, "mouseenter", move |_| {
            if let Some(image) = placeholder_image(&entered) {
                set_style(&image, "transform", "scale(1.1)");
                set_style(&image, "transition", "transform 0.5s ease");
            }
        })?;
        let left = item.clone();
        bindings.listen(item, "mouseleave", move |_| {
            if let Some(image) = placeholder_image(&left) {
                set_style(&image, "transform", "scale(1)");
            }
        })?;
    }
    Ok(())
}

/// Looked up on every event so re-rendered item contents still zoom.
pub fn placeholder_image(item: &Element) -> Option<HtmlElement> {
    item.query_selector(config::PLACEHOLDER_IMAGE)
        .ok()
        .flatten()
        .and_then(|image| image.dyn_into::<HtmlElement>().ok())
}
