//! View rendering for the cover-letter editor component.
//!
//! The UI is a toolbar above a `contenteditable` surface, plus a hidden file
//! input behind the "Upload template" button. The component is designed to
//! sit inside the host page's form, so every toolbar button is rendered with
//! `type="button"` and must never trigger a submit on its own; submission
//! stays under the host page's control.

use web_sys::{Event, HtmlInputElement, MouseEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::EditorComponent;

/// Main view function for the component. Renders the toolbar, the hidden
/// file input, and the editing surface.
pub fn view(component: &EditorComponent, ctx: &Context<EditorComponent>) -> Html {
    let link = ctx.link();

    let on_file_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.get(0));
        // Clear the input so selecting the same file fires change again.
        input.set_value("");
        file.map(Msg::FileSelected)
    });

    html! {
        <div class="editor-root">
            { build_toolbar(link) }

            <input
                type="file"
                ref={component.file_input_ref.clone()}
                style="display:none;"
                onchange={on_file_change}
            />

            <div
                class="letter-surface"
                ref={component.surface_ref.clone()}
                contenteditable="true"
                data-placeholder="Start writing your cover letter here..."
            />
        </div>
    }
}

/// Builds the toolbar: formatting commands, clipboard copy, template upload,
/// and PDF download.
fn build_toolbar(link: &Scope<EditorComponent>) -> Html {
    // Suppressing mousedown keeps the surface selection alive while a
    // formatting button is clicked.
    let keep_selection = Callback::from(|e: MouseEvent| e.prevent_default());

    html! {
        <div class="icon-toolbar" onmousedown={keep_selection}>
            { icon_button("format_bold", "Bold", make_format_callback(link, "bold")) }
            { icon_button("format_italic", "Italic", make_format_callback(link, "italic")) }
            { icon_button("format_underlined", "Underline", make_format_callback(link, "underline")) }
            { icon_button("content_copy", "Copy", link.callback(|_| Msg::CopyToClipboard)) }
            { icon_button("upload_file", "Upload template", link.callback(|_| Msg::OpenFileDialog)) }
            { icon_button("picture_as_pdf", "Download PDF", link.callback(|_| Msg::DownloadPdf)) }
        </div>
    }
}

/// Creates a formatting callback for the toolbar.
fn make_format_callback(link: &Scope<EditorComponent>, command: &'static str) -> Callback<MouseEvent> {
    link.callback(move |_| Msg::ApplyFormat(command.to_string()))
}

/// Renders a toolbar button with a Material icon and a label.
fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button type="button" class="icon-btn" onclick={on_click}>
            <i class="material-icons">{icon_name}</i>
            <span class="icon-label">{label}</span>
        </button>
    }
}
