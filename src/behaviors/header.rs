use log::debug;

use crate::config;
use crate::dom::{set_style, Bindings, SiteElements};
use crate::error::BehaviorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderShade {
    Resting,
    Scrolled,
}

impl HeaderShade {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > config::HEADER_SHADE_THRESHOLD {
            HeaderShade::Scrolled
        } else {
            HeaderShade::Resting
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            HeaderShade::Resting => "rgba(20, 20, 20, 0.85)",
            HeaderShade::Scrolled => "rgba(15, 15, 15, 0.95)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            HeaderShade::Resting => "0 8px 32px rgba(0, 0, 0, 0.4)",
            HeaderShade::Scrolled => "0 8px 40px rgba(0, 0, 0, 0.6)",
        }
    }

    pub fn border_color(self) -> &'static str {
        match self {
            HeaderShade::Resting => "rgba(255, 255, 255, 0.15)",
            HeaderShade::Scrolled => "rgba(255, 255, 255, 0.2)",
        }
    }
}

pub fn install(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    let Some(header) = elements.header.clone() else {
        debug!("no header");
        return Ok(());
    };

    let site = elements.clone();
    bindings.listen(&elements.window, "scroll", move |_| {
        let shade = HeaderShade::for_scroll(site.scroll_y());
        set_style(&header, "background", shade.background());
        set_style(&header, "box-shadow", shade.box_shadow());
        set_style(&header, "border-color", shade.border_color());
    })
}
