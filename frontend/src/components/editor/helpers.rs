//! DOM helpers for the cover-letter editor component.
//!
//! This module owns every direct `web-sys` interaction used by `mod.rs` and
//! `update.rs`:
//!
//! - **Hidden field access**: reading and writing the host page's hidden
//!   inputs by id, degrading to a no-op when an element is absent.
//! - **Submission sync**: installing the native `submit` listener that copies
//!   the surface into the hidden fields synchronously, before the browser
//!   serializes the form.
//! - **Clipboard export**: staging markup in a temporary textarea and issuing
//!   the copy command; failures are logged and otherwise swallowed.
//! - **Template upload**: the async multipart POST to the upload endpoint.
//! - **Synthesized download form**: building, submitting, and detaching the
//!   one-off form that triggers the PDF download.

use gloo_console::{error, warn};
use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, File, FormData, HtmlDocument, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};
use yew::prelude::*;

use common::requests::UploadTemplateResponse;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Value of the hidden input with the given id, `None` when the element is
/// missing or is not an input.
pub fn input_value(id: &str) -> Option<String> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

/// Writes the hidden input with the given id; no-op when absent.
pub fn set_input_value(id: &str, value: &str) {
    let input = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value(value);
    }
}

/// Installs the pre-submit hook on the host form.
///
/// The listener runs synchronously during submit dispatch and overwrites both
/// hidden fields from the live surface, so the serialized form always carries
/// the content at the moment of submission. The closure is leaked on purpose:
/// the hook lives as long as the page does.
pub fn install_submit_hook(
    form_id: &str,
    surface: NodeRef,
    text_field_id: String,
    html_field_id: String,
) {
    let Some(form) = document().and_then(|d| d.get_element_by_id(form_id)) else {
        warn!("no editing form found; submission sync disabled");
        return;
    };

    let hook = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
        let (text, markup) = surface
            .cast::<HtmlElement>()
            .map(|el| (el.inner_text(), el.inner_html()))
            .unwrap_or_default();
        set_input_value(&text_field_id, &text);
        set_input_value(&html_field_id, &markup);
    });

    if form
        .add_event_listener_with_callback("submit", hook.as_ref().unchecked_ref())
        .is_ok()
    {
        hook.forget();
    }
}

/// Applies a formatting command (`bold`, `italic`, ...) to the current
/// selection on the surface.
pub fn exec_format(command: &str) {
    if let Some(doc) = document() {
        let html_doc: HtmlDocument = doc.unchecked_into();
        if html_doc.exec_command(command).is_err() {
            warn!("format command not supported:", command.to_string());
        }
    }
}

/// Copies the rendered markup to the system clipboard.
///
/// The markup is staged in a temporary textarea, selected, and copied with
/// the document copy command; the textarea is removed before returning. A
/// failed copy is logged and otherwise ignored.
pub fn copy_markup_to_clipboard(markup: &str) {
    let Some(doc) = document() else { return };
    let Some(body) = doc.body() else { return };
    let Ok(element) = doc.create_element("textarea") else {
        return;
    };

    let staging: HtmlTextAreaElement = element.unchecked_into();
    staging.set_value(markup);
    if body.append_child(&staging).is_err() {
        return;
    }
    staging.select();

    let html_doc: HtmlDocument = doc.unchecked_into();
    match html_doc.exec_command("copy") {
        Ok(true) => {}
        Ok(false) => error!("clipboard copy was refused"),
        Err(err) => error!("clipboard copy failed:", err),
    }
    staging.remove();
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Sends the selected template file to the upload endpoint and returns the
/// extracted text. Any failure is reported as a message for the caller to
/// surface; the editor content is not touched here.
pub async fn upload_template(url: &str, file: File) -> Result<String, String> {
    let form_data =
        FormData::new().map_err(|_| String::from("could not build the upload payload"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|_| String::from("could not attach the selected file"))?;

    let response = Request::post(url)
        .body(form_data)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if !response.ok() {
        return Err(format!("upload endpoint returned {}", response.status()));
    }

    let payload: UploadTemplateResponse =
        response.json().await.map_err(|err| err.to_string())?;
    Ok(payload.text_or_empty())
}

/// Builds a detached form targeting `action`, fills it with hidden inputs,
/// submits it, and detaches it again.
///
/// Submitting navigates to the download response; when the navigation unloads
/// the page the trailing cleanup never runs, which is fine.
pub fn post_synthesized_form(action: &str, fields: &[(&'static str, String)]) -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no document body"))?;

    let form: HtmlFormElement = doc.create_element("form")?.unchecked_into();
    form.set_method("post");
    form.set_action(action);

    for (name, value) in fields {
        let input: HtmlInputElement = doc.create_element("input")?.unchecked_into();
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input)?;
    }

    body.append_child(&form)?;
    let outcome = form.submit();
    form.remove();
    outcome
}
