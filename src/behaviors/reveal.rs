//! Scroll-triggered entrance animations: content cards fade up the first time
//! they come into view, service numbers pulse whenever they do.

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, IntersectionObserverInit};

use crate::config;
use crate::dom::{set_style, Bindings, Observer, SiteElements};
use crate::error::BehaviorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    Hidden,
    Shown,
}

/// Observer callback for one entry. Only ever writes the shown style, so an
/// element that has been revealed stays revealed.
pub fn reveal_on_entry(intersecting: bool, target: &HtmlElement) {
    if intersecting {
        RevealStyle::Shown.apply(target);
    }
}

impl RevealStyle {
    pub fn opacity(self) -> &'static str {
        match self {
            RevealStyle::Hidden => "0",
            RevealStyle::Shown => "1",
        }
    }

    pub fn transform(self) -> String {
        match self {
            RevealStyle::Hidden => format!("translateY({}px)", config::REVEAL_OFFSET_PX),
            RevealStyle::Shown => "translateY(0)".to_string(),
        }
    }

    fn apply(self, element: &HtmlElement) {
        set_style(element, "opacity", self.opacity());
        set_style(element, "transform", &self.transform());
    }
}

pub fn install(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    if elements.reveal_targets.is_empty() {
        debug!("no reveal targets");
    } else {
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        options.set_root_margin(config::REVEAL_ROOT_MARGIN);

        let observer = Observer::new(Some(&options), |entry| {
            if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                reveal_on_entry(entry.is_intersecting(), &target);
            }
        })?;

        for target in &elements.reveal_targets {
            RevealStyle::Hidden.apply(target);
            set_style(target, "transition", config::REVEAL_TRANSITION);
            observer.observe(target);
        }
        bindings.keep_observer(observer);
    }

    install_pulse(elements, bindings)
}

fn install_pulse(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    for number in &elements.service_numbers {
        let observer = Observer::new(None, |entry| {
            if !entry.is_intersecting() {
                return;
            }
            if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                set_style(&target, "animation", "pulse 1s ease");
            }
        })?;
        observer.observe(number);
        bindings.keep_observer(observer);
    }
    Ok(())
}
