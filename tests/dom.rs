#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;

use alpha_site::behaviors::contact_form::{self, Acknowledge};
use alpha_site::behaviors::{hover, menu, reveal, scroll_spy};
use alpha_site::dom::{query, Bindings, SiteElements};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const MENU_HTML: &str = r##"
    <button class="mobile-toggle" aria-expanded="false"><span class="bar"></span></button>
    <nav class="mobile-menu" aria-hidden="true">
        <a class="nav-link" href="#services">Services</a>
    </nav>
    <section id="services"></section>
"##;

struct Fixture {
    root: Element,
}

impl Fixture {
    fn new(html: &str) -> Self {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        Self { root }
    }

    fn html(&self, selector: &str) -> HtmlElement {
        self.root
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn install_menu() -> Bindings {
    let elements = SiteElements::resolve().unwrap();
    let mut bindings = Bindings::default();
    menu::install(&elements, &mut bindings).unwrap();
    bindings
}

fn is_open(fixture: &Fixture) -> bool {
    fixture.html(".mobile-menu").class_list().contains("open")
}

#[wasm_bindgen_test]
fn each_click_toggles_menu_once() {
    let fixture = Fixture::new(MENU_HTML);
    let _bindings = install_menu();
    let toggle = fixture.html(".mobile-toggle");
    let panel = fixture.html(".mobile-menu");

    toggle.click();
    assert!(is_open(&fixture));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(panel.get_attribute("aria-hidden").as_deref(), Some("false"));

    // Clicks on the toggle's children count as toggle clicks.
    fixture.html(".mobile-toggle .bar").click();
    assert!(!is_open(&fixture));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(panel.get_attribute("aria-hidden").as_deref(), Some("true"));

    toggle.click();
    toggle.click();
    toggle.click();
    assert!(is_open(&fixture));
}

#[wasm_bindgen_test]
fn installing_twice_does_not_double_toggle() {
    let fixture = Fixture::new(MENU_HTML);
    let _first = install_menu();
    let _second = install_menu();

    fixture.html(".mobile-toggle").click();
    assert!(is_open(&fixture));
}

fn re_render_toggle(fixture: &Fixture) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let old_toggle = fixture.html(".mobile-toggle");
    let new_toggle = document
        .create_element("button")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    new_toggle.set_class_name("mobile-toggle");
    old_toggle.replace_with_with_node_1(&new_toggle).unwrap();
    new_toggle
}

#[wasm_bindgen_test]
fn re_rendered_toggle_still_works() {
    let fixture = Fixture::new(MENU_HTML);
    let _bindings = install_menu();
    let new_toggle = re_render_toggle(&fixture);

    new_toggle.click();
    assert!(is_open(&fixture));
    assert_eq!(new_toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

    // Closing through a panel link updates the live toggle, not the old one.
    fixture.html(".mobile-menu a").click();
    assert!(!is_open(&fixture));
    assert_eq!(new_toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn wide_resize_after_re_render_updates_live_toggle() {
    let fixture = Fixture::new(MENU_HTML);
    let stale = SiteElements::resolve().unwrap();
    let _bindings = install_menu();
    let new_toggle = re_render_toggle(&fixture);

    new_toggle.click();
    assert!(is_open(&fixture));

    let document = web_sys::window().unwrap().document().unwrap();
    menu::MobileMenu::from_elements(&stale)
        .unwrap()
        .refreshed(&document)
        .close_on_wide_viewport(1440.0);
    assert!(!is_open(&fixture));
    assert_eq!(new_toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn reinstall_after_re_render_toggles_once_per_click() {
    let fixture = Fixture::new(MENU_HTML);
    let _first = install_menu();
    let new_toggle = re_render_toggle(&fixture);
    let _second = install_menu();

    new_toggle.click();
    assert!(is_open(&fixture));
    assert_eq!(new_toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

    new_toggle.click();
    assert!(!is_open(&fixture));
}

#[wasm_bindgen_test]
fn navigating_closes_the_menu() {
    let fixture = Fixture::new(MENU_HTML);
    let _bindings = install_menu();

    fixture.html(".mobile-toggle").click();
    assert!(is_open(&fixture));
    fixture.html(".mobile-menu a").click();
    assert!(!is_open(&fixture));

    // Already closed: stays closed.
    fixture.html(".mobile-menu a").click();
    assert!(!is_open(&fixture));
}

#[wasm_bindgen_test]
fn wide_viewport_closes_open_menu_only() {
    let fixture = Fixture::new(MENU_HTML);
    let elements = SiteElements::resolve().unwrap();
    let controller = menu::MobileMenu::from_elements(&elements).unwrap();

    controller.close_on_wide_viewport(1440.0);
    assert!(!is_open(&fixture));

    controller.toggle();
    controller.close_on_wide_viewport(800.0);
    assert!(is_open(&fixture));

    controller.close_on_wide_viewport(1440.0);
    assert!(!is_open(&fixture));
    assert_eq!(
        fixture.html(".mobile-toggle").get_attribute("aria-expanded").as_deref(),
        Some("false")
    );
}

#[wasm_bindgen_test]
fn reveal_targets_start_hidden() {
    let fixture = Fixture::new(r#"<div class="service-card">Design</div>"#);
    let elements = SiteElements::resolve().unwrap();
    let mut bindings = Bindings::default();
    reveal::install(&elements, &mut bindings).unwrap();

    let style = fixture.html(".service-card").style();
    assert_eq!(style.get_property_value("opacity").unwrap(), "0");
    assert_eq!(style.get_property_value("transform").unwrap(), "translateY(30px)");
}

fn assert_shown_in_place(card: &HtmlElement) {
    let transform = card.style().get_property_value("transform").unwrap();
    assert!(transform == "translateY(0)" || transform == "translateY(0px)", "{}", transform);
}

#[wasm_bindgen_test]
fn revealed_element_stays_shown() {
    let fixture = Fixture::new(r#"<div class="value-card">Trust</div>"#);
    let elements = SiteElements::resolve().unwrap();
    let mut bindings = Bindings::default();
    reveal::install(&elements, &mut bindings).unwrap();
    let card = fixture.html(".value-card");

    reveal::reveal_on_entry(false, &card);
    assert_eq!(card.style().get_property_value("opacity").unwrap(), "0");

    reveal::reveal_on_entry(true, &card);
    assert_eq!(card.style().get_property_value("opacity").unwrap(), "1");
    assert_shown_in_place(&card);

    reveal::reveal_on_entry(false, &card);
    assert_eq!(card.style().get_property_value("opacity").unwrap(), "1");
    assert_shown_in_place(&card);
}

const SPY_HTML: &str = r##"
    <a class="nav-link" href="#intro">Intro</a>
    <a class="nav-link active" href="#work">Work</a>
    <a class="nav-link" href="#contact">Contact</a>
    <section id="intro" style="height: 600px"></section>
    <section id="work" style="height: 600px"></section>
    <section id="contact" style="height: 600px"></section>
"##;

fn active_links(fixture: &Fixture) -> Vec<String> {
    let links = fixture.root.query_selector_all(".nav-link.active").unwrap();
    (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|link| link.get_attribute("href"))
        .collect()
}

#[wasm_bindgen_test]
fn scroll_spy_marks_exactly_one_link() {
    let fixture = Fixture::new(SPY_HTML);
    let elements = SiteElements::resolve().unwrap();
    let work_top = f64::from(fixture.html("#work").offset_top());

    scroll_spy::highlight(&elements.sections, &elements.nav_links, work_top - 200.0);
    assert_eq!(active_links(&fixture), vec!["#work".to_string()]);

    let contact_top = f64::from(fixture.html("#contact").offset_top());
    scroll_spy::highlight(&elements.sections, &elements.nav_links, contact_top + 50.0);
    assert_eq!(active_links(&fixture), vec!["#contact".to_string()]);
}

#[wasm_bindgen_test]
fn scroll_spy_clears_links_above_first_section() {
    let fixture = Fixture::new(SPY_HTML);
    let elements = SiteElements::resolve().unwrap();
    let intro_top = f64::from(fixture.html("#intro").offset_top());

    scroll_spy::highlight(&elements.sections, &elements.nav_links, intro_top - 201.0);
    assert!(active_links(&fixture).is_empty());
}

#[wasm_bindgen_test]
fn portfolio_zoom_follows_re_rendered_image() {
    let fixture = Fixture::new(
        r#"<div class="portfolio-item"><div class="placeholder-image"></div></div>"#,
    );
    let elements = SiteElements::resolve().unwrap();
    let mut bindings = Bindings::default();
    hover::install(&elements, &mut bindings).unwrap();

    let item = fixture.html(".portfolio-item");
    item.set_inner_html(r#"<div class="placeholder-image fresh"></div>"#);
    item.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();

    let image = fixture.html(".placeholder-image.fresh");
    assert_eq!(image.style().get_property_value("transform").unwrap(), "scale(1.1)");

    item.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    assert_eq!(image.style().get_property_value("transform").unwrap(), "scale(1)");
}

#[derive(Default)]
struct RecordingAck {
    messages: RefCell<Vec<String>>,
}

impl Acknowledge for RecordingAck {
    fn acknowledge(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[wasm_bindgen_test]
fn contact_submission_is_logged_acknowledged_and_cleared() {
    let fixture = Fixture::new(
        r#"<form class="contact-form">
            <input name="name" type="text">
            <input name="email" type="email">
            <button type="submit" name="send">Send</button>
        </form>"#,
    );
    let document = web_sys::window().unwrap().document().unwrap();
    let form: HtmlFormElement = query(&document, ".contact-form").unwrap();
    let name = fixture.html("[name=name]").unchecked_into::<HtmlInputElement>();
    let email = fixture.html("[name=email]").unchecked_into::<HtmlInputElement>();
    name.set_value("Ada");
    email.set_value("ada@x.io");

    let ack = RecordingAck::default();
    let submission = contact_form::submit(&form, &ack);

    assert_eq!(submission.len(), 2);
    assert_eq!(submission.get("name"), Some("Ada"));
    assert_eq!(submission.get("email"), Some("ada@x.io"));
    assert_eq!(ack.messages.borrow().len(), 1);
    assert_eq!(name.value(), "");
    assert_eq!(email.value(), "");
}

#[wasm_bindgen_test]
fn form_record_follows_browser_form_data() {
    let fixture = Fixture::new(
        r#"<form class="contact-form" id="contact">
            <input name="name" value="Ada">
            <fieldset disabled><input name="company" value="Analytical"></fieldset>
            <select name="topic" multiple>
                <option selected>web</option>
                <option selected>3d</option>
            </select>
            <select name="budget"></select>
        </form>
        <input name="phone" form="contact" value="555">"#,
    );
    let form = fixture
        .html(".contact-form")
        .unchecked_into::<HtmlFormElement>();

    let submission = contact_form::read_fields(&form).unwrap();

    assert_eq!(submission.get("name"), Some("Ada"));
    assert_eq!(submission.get("company"), None);
    assert_eq!(submission.get("topic"), Some("3d"));
    assert_eq!(submission.get("budget"), None);
    assert_eq!(submission.get("phone"), Some("555"));
    assert_eq!(submission.len(), 3);
}
