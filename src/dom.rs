//! Thin layer over `web_sys`: resolving the page's elements once, and owning
//! every listener/observer so that dropping [`Bindings`] detaches the site.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

use crate::config;
use crate::error::{describe, BehaviorError};

pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    collect(document.query_selector_all(selector))
}

/// Keeps the nodes of `list` that are `T`, in document order. A failed query
/// yields nothing.
pub fn collect<T: JsCast>(list: Result<NodeList, JsValue>) -> Vec<T> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Every element the behaviors act on, looked up once when the site mounts.
#[derive(Clone)]
pub struct SiteElements {
    pub window: Window,
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub mobile_toggle: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub header: Option<HtmlElement>,
    pub hero_background: Option<HtmlElement>,
    pub hero_display: Option<Element>,
    pub display_platform: Option<HtmlElement>,
    pub contact_form: Option<HtmlFormElement>,
    pub sections: Vec<HtmlElement>,
    pub nav_links: Vec<Element>,
    pub anchors: Vec<Element>,
    pub reveal_targets: Vec<HtmlElement>,
    pub buttons: Vec<HtmlElement>,
    pub portfolio_items: Vec<Element>,
    pub service_numbers: Vec<HtmlElement>,
}

impl SiteElements {
    /// `None` only outside a browser document.
    pub fn resolve() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        Some(Self {
            body: document.body(),
            mobile_toggle: query(&document, config::MOBILE_TOGGLE),
            mobile_menu: query(&document, config::MOBILE_MENU),
            header: query(&document, config::HEADER),
            hero_background: query(&document, config::HERO_BACKGROUND),
            hero_display: query(&document, config::HERO_DISPLAY),
            display_platform: query(&document, config::DISPLAY_PLATFORM),
            contact_form: query(&document, config::CONTACT_FORM),
            sections: query_all(&document, config::SECTIONS),
            nav_links: query_all(&document, config::NAV_LINKS),
            anchors: query_all(&document, config::IN_PAGE_ANCHORS),
            reveal_targets: query_all(&document, config::REVEAL_TARGETS),
            buttons: query_all(&document, config::BUTTONS),
            portfolio_items: query_all(&document, config::PORTFOLIO_ITEMS),
            service_numbers: query_all(&document, config::SERVICE_NUMBERS),
            window,
            document,
        })
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    pub fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
}

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, BehaviorError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| BehaviorError::Listen {
                event,
                detail: describe(&e),
            })?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An intersection observer that disconnects when dropped.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new<F>(options: Option<&IntersectionObserverInit>, mut on_entry: F) -> Result<Self, BehaviorError>
    where
        F: FnMut(&IntersectionObserverEntry) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = match options {
            Some(options) => {
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
            }
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
        }
        .map_err(|e| BehaviorError::Observer(describe(&e)))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Marks an element as wired up by setting `flag="true"` on it. A second
/// acquire on the same element fails until the first guard is dropped.
pub struct BindingGuard {
    element: Element,
    flag: &'static str,
}

impl BindingGuard {
    pub fn acquire(element: &Element, flag: &'static str) -> Option<Self> {
        if element.get_attribute(flag).as_deref() == Some("true") {
            return None;
        }
        let _ = element.set_attribute(flag, "true");
        Some(Self {
            element: element.clone(),
            flag,
        })
    }
}

impl Drop for BindingGuard {
    fn drop(&mut self) {
        let _ = self.element.remove_attribute(self.flag);
    }
}

/// Everything installed on the page. Dropping it tears the site behaviors down.
#[derive(Default)]
pub struct Bindings {
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    guards: Vec<BindingGuard>,
}

impl Bindings {
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), BehaviorError>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::new(target, event, handler)?);
        Ok(())
    }

    pub fn keep_observer(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn keep_guard(&mut self, guard: BindingGuard) {
        self.guards.push(guard);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
