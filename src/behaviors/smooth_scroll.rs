use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{Bindings, SiteElements};
use crate::error::BehaviorError;

/// The selector an in-page link points at, e.g. `#services`. A bare `#`
/// points nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

pub fn install(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    if elements.anchors.is_empty() {
        debug!("no in-page anchors");
        return Ok(());
    }

    for anchor in &elements.anchors {
        let document = elements.document.clone();
        let link = anchor.clone();
        bindings.listen(anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            if let Some(target) = document.query_selector(selector).ok().flatten() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}
