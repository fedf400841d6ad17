//! Contact form handling. Submissions are only recorded in the console; no
//! data leaves the page.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{FormData, HtmlFormElement, Window};

use crate::config;
use crate::dom::{Bindings, SiteElements};
use crate::error::{describe, BehaviorError};

/// Field name to value, as the form would have submitted it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactSubmission(BTreeMap<String, String>);

impl ContactSubmission {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Later fields with the same name overwrite earlier ones.
impl FromIterator<(String, String)> for ContactSubmission {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(fields: I) -> Self {
        Self(fields.into_iter().collect())
    }
}

/// Shows the user that their message was received.
pub trait Acknowledge {
    fn acknowledge(&self, message: &str);
}

pub struct AlertDialog(pub Window);

impl Acknowledge for AlertDialog {
    fn acknowledge(&self, message: &str) {
        let _ = self.0.alert_with_message(message);
    }
}

/// The form's successful controls, collected the way the browser would
/// submit them. File entries are left out.
pub fn read_fields(form: &HtmlFormElement) -> Result<ContactSubmission, BehaviorError> {
    let data = FormData::new_with_form(form).map_err(|e| BehaviorError::FormData(describe(&e)))?;
    Ok(data
        .entries()
        .into_iter()
        .filter_map(Result::ok)
        .filter_map(|entry| entry.dyn_into::<Array>().ok())
        .filter_map(|pair| Some((pair.get(0).as_string()?, pair.get(1).as_string()?)))
        .collect())
}

/// Records the form's fields, acknowledges once and clears the form.
pub fn submit(form: &HtmlFormElement, ack: &dyn Acknowledge) -> ContactSubmission {
    let submission = read_fields(form).unwrap_or_else(|e| {
        warn!("{}", e);
        ContactSubmission::default()
    });
    if let Err(e) = log_submission(&submission) {
        warn!("{}", e);
    }
    // TODO: post the submission to the contact endpoint once the site has a backend.
    ack.acknowledge(config::CONTACT_ACK_MESSAGE);
    form.reset();
    submission
}

fn log_submission(submission: &ContactSubmission) -> Result<(), BehaviorError> {
    let record = submission
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| BehaviorError::Serialize(e.to_string()))?;
    gloo_console::log!("Form submitted:", record);
    debug!(
        "contact form submitted with {} fields: {}",
        submission.len(),
        serde_json::to_string(submission).unwrap_or_default()
    );
    Ok(())
}

pub fn install(elements: &SiteElements, bindings: &mut Bindings) -> Result<(), BehaviorError> {
    let Some(form) = elements.contact_form.clone() else {
        debug!("no contact form");
        return Ok(());
    };

    let ack = AlertDialog(elements.window.clone());
    let target = form.clone();
    bindings.listen(&target, "submit", move |event| {
        event.prevent_default();
        submit(&form, &ack);
    })
}
