//! Hero section effects: background parallax and the pointer-driven tilt of
//! the 3D display.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::config;
use crate::dom::{set_style, Bindings, SiteElements};
use crate::error::BehaviorError;

/// Background offset for `scroll_y`, or `None` once the hero has scrolled out
/// of view. The last applied offset then stays in place.
pub fn parallax_offset(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * config::PARALLAX_FACTOR)
}

/// `(rotate_x, rotate_y)` in degrees for a pointer at `(x, y)` inside a
/// `width` x `height` box.
pub fn tilt_angles(width: f64, height: f64, x: f64, y: f64) -> (f64, f64) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    (
        (y - center_y) / config::TILT_DIVISOR,
        (center_x - x) / config::TILT_DIVISOR,
    )
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!("rotateX({}deg) rotateY({}deg)", rotate_x, rotate_y)
}

pub fn install(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    install_parallax(elements, bindings)?;
    install_tilt(elements, bindings)
}

fn install_parallax(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    let Some(background) = elements.hero_background.clone() else {
        debug!("no hero background, parallax disabled");
        return Ok(());
    };

    let site = elements.clone();
    bindings.listen(&elements.window, "scroll", move |_| {
        if let Some(offset) = parallax_offset(site.scroll_y(), site.viewport_height()) {
            set_style(&background, "transform", &format!("translateY({}px)", offset));
        }
    })
}

fn install_tilt(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    let (Some(display), Some(platform)) = (elements.hero_display.clone(), elements.display_platform.clone()) else {
        debug!("no 3D display, tilt disabled");
        return Ok(());
    };

    {
        let display_rect = display.clone();
        let platform = platform.clone();
        bindings.listen(&display, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = display_rect.get_bounding_client_rect();
            let x = f64::from(event.client_x()) - rect.left();
            let y = f64::from(event.client_y()) - rect.top();
            let (rotate_x, rotate_y) = tilt_angles(rect.width(), rect.height(), x, y);
            set_style(&platform, "transform", &tilt_transform(rotate_x, rotate_y));
        })?;
    }

    bindings.listen(&display, "mouseleave", move |_| {
        set_style(&platform, "transform", "rotateX(0) rotateY(0)");
    })
}
