//! Component state for the cover-letter editor.
//!
//! The rich-text surface is a `contenteditable` element owned by the browser;
//! the component never mirrors its content into Rust state. Instead the four
//! methods below expose the capabilities the handlers need: read the current
//! plain-text and rendered-markup serializations, and replace the content in
//! either mode. Both serializations are regenerated from the live DOM on every
//! call, so they always reflect what the user sees.

use web_sys::{Element, HtmlElement};
use yew::prelude::*;

/// Main state container for the `EditorComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct EditorComponent {
    /// Reference to the `contenteditable` editing surface.
    pub surface_ref: NodeRef,

    /// Reference to the hidden file input behind the "Upload template" button.
    pub file_input_ref: NodeRef,

    /// Sequence number of the most recent template upload. Responses tagged
    /// with an older number are superseded and must be dropped.
    pub upload_seq: u32,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl EditorComponent {
    pub fn new() -> Self {
        Self {
            surface_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            upload_seq: 0,
            loaded: false,
        }
    }

    /// Current content as unformatted text.
    pub fn plain_text(&self) -> String {
        self.surface_ref
            .cast::<HtmlElement>()
            .map(|surface| surface.inner_text())
            .unwrap_or_default()
    }

    /// Current content as rendered markup, formatting preserved.
    pub fn rendered_markup(&self) -> String {
        self.surface_ref
            .cast::<Element>()
            .map(|surface| surface.inner_html())
            .unwrap_or_default()
    }

    /// Replaces the content with unformatted text.
    pub fn set_plain_text(&self, text: &str) {
        if let Some(surface) = self.surface_ref.cast::<HtmlElement>() {
            surface.set_text_content(Some(text));
        }
    }

    /// Replaces the content with markup, loaded verbatim.
    pub fn set_markup(&self, markup: &str) {
        if let Some(surface) = self.surface_ref.cast::<Element>() {
            surface.set_inner_html(markup);
        }
    }
}
