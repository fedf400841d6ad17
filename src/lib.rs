use log::{debug, info, warn};
use web_sys::Element;
use yew::prelude::*;

pub mod config;
pub mod dom;
pub mod error;

pub mod behaviors {
    pub mod contact_form;
    pub mod cursor_trail;
    pub mod header;
    pub mod hero;
    pub mod hover;
    pub mod menu;
    pub mod page_fade;
    pub mod reveal;
    pub mod scroll_spy;
    pub mod smooth_scroll;
}

use dom::{Bindings, SiteElements};
use error::BehaviorError;

type Installer = fn(&SiteElements, &mut Bindings) -> Result<(), BehaviorError>;

const INSTALLERS: [(&str, Installer); 10] = [
    ("smooth scroll", behaviors::smooth_scroll::install),
    ("mobile menu", behaviors::menu::install),
    ("scroll spy", behaviors::scroll_spy::install),
    ("hero", behaviors::hero::install),
    ("reveal", behaviors::reveal::install),
    ("contact form", behaviors::contact_form::install),
    ("header", behaviors::header::install),
    ("hover", behaviors::hover::install),
    ("cursor trail", behaviors::cursor_trail::install),
    ("page fade", behaviors::page_fade::install),
];

/// Wires every behavior onto the page. A behavior that fails to bind is
/// logged and skipped; the rest still run.
pub fn install_all(elements: &SiteElements) -> Bindings {
    let mut bindings = Bindings::default();
    for (name, install) in INSTALLERS {
        match install(elements, &mut bindings) {
            Ok(()) => debug!("{} ready", name),
            Err(e) => warn!("{} disabled: {}", name, e),
        }
    }
    bindings
}

#[function_component(SiteBehaviors)]
pub fn site_behaviors() -> Html {
    use_effect_with_deps(
        move |_| {
            let bindings = SiteElements::resolve().map(|elements| install_all(&elements));
            match &bindings {
                Some(bindings) => {
                    info!("{} website loaded successfully!", config::SITE_NAME);
                    debug!("{} listeners attached", bindings.listener_count());
                }
                None => warn!("no document, site behaviors not installed"),
            }
            move || drop(bindings)
        },
        (),
    );

    html! {
        <style>{config::KEYFRAMES}</style>
    }
}

fn mount_point() -> Option<Element> {
    let document = web_sys::window()?.document()?;
    if let Some(existing) = document.get_element_by_id(config::MOUNT_ID) {
        return Some(existing);
    }
    let mount = document.create_element("div").ok()?;
    mount.set_id(config::MOUNT_ID);
    document.body()?.append_child(&mount).ok()?;
    Some(mount)
}

pub fn mount() {
    match mount_point() {
        Some(root) => {
            yew::Renderer::<SiteBehaviors>::with_root(root).render();
        }
        None => warn!("nowhere to mount site behaviors"),
    }
}
