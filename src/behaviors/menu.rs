//! Mobile navigation drawer.
//!
//! The `open` class on `.mobile-menu` is the source of truth. Whenever it
//! changes, `aria-hidden` on the panel and `aria-expanded` on the toggle are
//! rewritten in the same step so the three never disagree.
//!
//! Clicks reach the controller along two paths: a direct listener on the
//! toggle (bound at most once per element, tracked with `data-mobile-init`)
//! and a document-level delegated listener that still works after the header
//! has been re-rendered. One page-wide [`ClickArbiter`], shared by every
//! install, makes the delegated path skip any click a direct listener already
//! handled, so each click toggles exactly once.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::config;
use crate::dom::{collect, query, BindingGuard, Bindings, SiteElements};
use crate::error::BehaviorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Open,
    Closed,
}

impl MenuState {
    pub fn from_open(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        Self::from_open(!self.is_open())
    }

    /// State after the viewport became `width` pixels wide.
    pub fn after_resize(self, width: f64) -> Self {
        if width > config::DESKTOP_BREAKPOINT {
            MenuState::Closed
        } else {
            self
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }

    pub fn aria_hidden(self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }
}

/// Remembers which click the direct handler consumed so the delegated
/// handler can tell it apart from clicks it has to handle itself.
pub struct ClickArbiter<T> {
    claimed: RefCell<Option<T>>,
}

impl<T> Default for ClickArbiter<T> {
    fn default() -> Self {
        Self {
            claimed: RefCell::new(None),
        }
    }
}

impl<T: PartialEq> ClickArbiter<T> {
    pub fn claim_direct(&self, click: T) {
        *self.claimed.borrow_mut() = Some(click);
    }

    /// Whether the delegated handler should act on `click`. Clears any
    /// pending claim either way.
    pub fn claim_delegated(&self, click: &T) -> bool {
        match self.claimed.borrow_mut().take() {
            Some(claimed) => claimed != *click,
            None => true,
        }
    }
}

thread_local! {
    static CLICK_ARBITER: Rc<ClickArbiter<Event>> = Rc::new(ClickArbiter::default());
}

/// The arbiter shared by all direct listeners and the delegated listener.
fn page_arbiter() -> Rc<ClickArbiter<Event>> {
    CLICK_ARBITER.with(Rc::clone)
}

#[derive(Clone)]
pub struct MobileMenu {
    toggle: Element,
    panel: Element,
}

impl MobileMenu {
    pub fn new(toggle: Element, panel: Element) -> Self {
        Self { toggle, panel }
    }

    pub fn from_elements(elements: &SiteElements) -> Option<Self> {
        Some(Self::new(
            elements.mobile_toggle.clone()?,
            elements.mobile_menu.clone()?,
        ))
    }

    /// This menu with a re-rendered toggle or panel swapped in, if the
    /// document has one.
    pub fn refreshed(&self, document: &Document) -> Self {
        Self::new(
            query(document, config::MOBILE_TOGGLE).unwrap_or_else(|| self.toggle.clone()),
            query(document, config::MOBILE_MENU).unwrap_or_else(|| self.panel.clone()),
        )
    }

    pub fn state(&self) -> MenuState {
        MenuState::from_open(self.panel.class_list().contains(config::MENU_OPEN_CLASS))
    }

    pub fn toggle(&self) -> MenuState {
        let next = self.state().toggled();
        self.render(next);
        next
    }

    pub fn close_on_navigate(&self) {
        self.render(MenuState::Closed);
    }

    pub fn close_on_wide_viewport(&self, width: f64) {
        let current = self.state();
        let next = current.after_resize(width);
        if next != current {
            debug!("closing mobile menu at viewport width {}", width);
            self.render(next);
        }
    }

    fn render(&self, state: MenuState) {
        let _ = self
            .panel
            .class_list()
            .toggle_with_force(config::MENU_OPEN_CLASS, state.is_open());
        let _ = self.panel.set_attribute("aria-hidden", state.aria_hidden());
        let _ = self.toggle.set_attribute("aria-expanded", state.aria_expanded());
    }
}

pub fn install(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    let arbiter = page_arbiter();
    install_delegate(elements, bindings, arbiter.clone())?;

    let Some(menu) = MobileMenu::from_elements(elements) else {
        debug!("no mobile menu on this page");
        return Ok(());
    };
    let Some(guard) = BindingGuard::acquire(&menu.toggle, config::MENU_INIT_FLAG) else {
        debug!("mobile toggle already bound");
        return Ok(());
    };
    bindings.keep_guard(guard);

    {
        let menu = menu.clone();
        bindings.listen(&menu.toggle.clone(), "click", move |event| {
            arbiter.claim_direct(event);
            menu.toggle();
        })?;
    }

    for link in collect::<Element>(menu.panel.query_selector_all(config::IN_PAGE_ANCHORS)) {
        let menu = menu.clone();
        let document = elements.document.clone();
        bindings.listen(&link, "click", move |_| menu.refreshed(&document).close_on_navigate())?;
    }

    let window = elements.window.clone();
    let document = elements.document.clone();
    bindings.listen(&elements.window, "resize", move |_| {
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        menu.refreshed(&document).close_on_wide_viewport(width);
    })?;

    Ok(())
}

/// Fallback for toggles that were re-rendered after the direct binding ran.
fn install_delegate(
    elements: &SiteElements,
    bindings: &mut Bindings,
    arbiter: Rc<ClickArbiter<Event>>,
) -> Result<(), BehaviorError> {
    let Some(root) = elements.document.document_element() else {
        return Ok(());
    };
    let Some(guard) = BindingGuard::acquire(&root, config::MENU_DELEGATE_FLAG) else {
        debug!("mobile toggle delegate already bound");
        return Ok(());
    };
    bindings.keep_guard(guard);

    let document = elements.document.clone();
    bindings.listen(&elements.document, "click", move |event| {
        let Some(toggle) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest(config::MOBILE_TOGGLE).ok().flatten())
        else {
            return;
        };
        if !arbiter.claim_delegated(&event) {
            return;
        }
        let Some(panel) = query::<Element>(&document, config::MOBILE_MENU) else {
            return;
        };
        debug!("mobile-toggle clicked");
        MobileMenu::new(toggle, panel).toggle();
    })
}
