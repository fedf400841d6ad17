//! Decorative trail of fading dots behind the pointer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config;
use crate::dom::{Bindings, SiteElements};
use crate::error::{describe, BehaviorError};

/// Pointer position plus the time the last marker was spawned, both owned by
/// the trail rather than living in globals.
#[derive(Debug, Default)]
pub struct CursorTrail {
    x: i32,
    y: i32,
    last_spawn_ms: Option<i64>,
}

impl CursorTrail {
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Whether a marker should be spawned at `now_ms`. Records the spawn.
    pub fn should_spawn(&mut self, now_ms: i64) -> bool {
        let due = match self.last_spawn_ms {
            Some(last) => now_ms - last > config::TRAIL_INTERVAL_MS,
            None => true,
        };
        if due {
            self.last_spawn_ms = Some(now_ms);
        }
        due
    }
}

pub fn marker_css(x: i32, y: i32) -> String {
    format!(
        "position: fixed; width: 4px; height: 4px; background: rgba(255, 255, 255, 0.3); \
         border-radius: 50%; pointer-events: none; z-index: 9999; left: {}px; top: {}px; \
         animation: fadeTrail 0.5s ease-out forwards;",
        x, y
    )
}

pub fn install(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    let trail = Rc::new(RefCell::new(CursorTrail::default()));
    let document = elements.document.clone();

    bindings.listen(&elements.document, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let mut trail = trail.borrow_mut();
        trail.move_to(event.client_x(), event.client_y());
        if !trail.should_spawn(chrono::Utc::now().timestamp_millis()) {
            return;
        }
        let (x, y) = trail.position();
        if let Err(e) = spawn_marker(&document, x, y) {
            warn!("{}", e);
        }
    })
}

fn spawn_marker(document: &Document, x: i32, y: i32) -> Result<(), BehaviorError> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let marker = document
        .create_element("div")
        .map_err(|e| BehaviorError::CreateElement {
            tag: "div",
            detail: describe(&e),
        })?
        .unchecked_into::<HtmlElement>();
    marker.set_class_name(config::TRAIL_CLASS);
    marker.style().set_css_text(&marker_css(x, y));
    body.append_child(&marker)
        .map_err(|e| BehaviorError::CreateElement {
            tag: "div",
            detail: describe(&e),
        })?;

    Timeout::new(config::TRAIL_LIFETIME_MS, move || marker.remove()).forget();
    Ok(())
}
