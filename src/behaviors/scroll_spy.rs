use log::debug;
use web_sys::{Element, HtmlElement};

use crate::config;
use crate::dom::{Bindings, SiteElements};
use crate::error::BehaviorError;

/// Picks the section the reader is in: the last one, in document order,
/// whose top minus the lookahead is at or above `scroll_y`.
pub fn active_section<'a, I>(sections: I, scroll_y: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - config::SCROLL_SPY_LOOKAHEAD)
        .last()
        .map(|(id, _)| id)
}

pub fn links_to(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(|href| href.strip_prefix('#'))
        .map_or(false, |target| target == section_id)
}

pub fn install(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    if elements.sections.is_empty() || elements.nav_links.is_empty() {
        debug!("no sections or nav links to track");
        return Ok(());
    }

    let site = elements.clone();
    bindings.listen(&elements.window, "scroll", move |_| {
        highlight(&site.sections, &site.nav_links, site.scroll_y())
    })
}

/// Marks the link of the section in view at `scroll_y` as active and clears
/// every other link.
pub fn highlight(sections: &[HtmlElement], nav_links: &[Element], scroll_y: f64) {
    let offsets: Vec<(String, f64)> = sections
        .iter()
        .map(|section| (section.id(), f64::from(section.offset_top())))
        .collect();
    let current = active_section(offsets.iter().map(|(id, top)| (id.as_str(), *top)), scroll_y);

    for link in nav_links {
        let classes = link.class_list();
        let _ = classes.remove_1(config::ACTIVE_CLASS);
        if let Some(id) = current {
            if links_to(link.get_attribute("href").as_deref(), id) {
                let _ = classes.add_1(config::ACTIVE_CLASS);
            }
        }
    }
}
