use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::HtmlElement;

use crate::config;
use crate::dom::{set_style, Bindings, SiteElements};
use crate::error::BehaviorError;

/// Fades the page in once it has loaded. Runs right away when the load event
/// already fired before the behaviors were mounted.
pub fn install(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    let Some(body) = elements.body.clone() else {
        debug!("no body to fade in");
        return Ok(());
    };

    if elements.document.ready_state() == "complete" {
        fade_in(&body);
        return Ok(());
    }

    bindings.listen(&elements.window, "load", move |_| fade_in(&body))
}

fn fade_in(body: &HtmlElement) {
    set_style(body, "opacity", "0");
    let body = body.clone();
    Timeout::new(config::LOAD_FADE_DELAY_MS, move || {
        set_style(&body, "transition", config::LOAD_FADE_TRANSITION);
        set_style(&body, "opacity", "1");
    })
    .forget();
}
