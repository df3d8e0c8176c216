//! Update function for the cover-letter editor component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `EditorComponent` state, the
//! `Context`, and a `Msg`, and performs the requested side effect.
//!
//! Key behaviors
//! - Formatting commands applied to the live selection on the surface.
//! - Clipboard export of the rendered markup through a temporary textarea.
//! - Template upload: multipart POST, then the extracted text replaces the
//!   surface content. Each upload carries a sequence number; a response whose
//!   number no longer matches `upload_seq` was superseded by a newer file
//!   selection and is dropped, so a slow request can never clobber fresh
//!   content. Failures alert the user and leave the editor untouched.
//! - PDF download via a synthesized one-off form POST.
//!
//! Every arm returns `false`: the surface lives in the DOM, not in component
//! state, so no effect here requires a re-render.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::letter::DownloadRequest;

use super::helpers;
use super::messages::Msg;
use super::state::EditorComponent;

/// Central update function for the component.
pub fn update(component: &mut EditorComponent, ctx: &Context<EditorComponent>, msg: Msg) -> bool {
    match msg {
        Msg::ApplyFormat(command) => {
            helpers::exec_format(&command);
            false
        }
        Msg::CopyToClipboard => {
            helpers::copy_markup_to_clipboard(&component.rendered_markup());
            false
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(file) => {
            component.upload_seq += 1;
            let seq = component.upload_seq;
            let url = ctx.props().upload_url.to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                match helpers::upload_template(&url, file).await {
                    Ok(text) => link.send_message(Msg::UploadFinished { seq, text }),
                    Err(message) => link.send_message(Msg::UploadFailed { seq, message }),
                }
            });
            false
        }
        Msg::UploadFinished { seq, text } => {
            if seq == component.upload_seq {
                component.set_plain_text(&text);
            }
            false
        }
        Msg::UploadFailed { seq, message } => {
            if seq == component.upload_seq {
                error!("template upload failed:", message);
                helpers::alert("Error uploading or processing file");
            }
            false
        }
        Msg::DownloadPdf => {
            let props = ctx.props();
            let request = DownloadRequest::new(
                component.rendered_markup(),
                helpers::input_value(&props.font_size_field_id),
                helpers::input_value(&props.job_id_field_id),
            );
            if let Err(err) = helpers::post_synthesized_form(&props.download_url, &request.form_fields())
            {
                error!("PDF download failed:", err);
            }
            false
        }
    }
}
