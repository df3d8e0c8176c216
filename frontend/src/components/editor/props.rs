//! Defines the properties for the `EditorComponent`.
//!
//! The host page owns the form and its hidden fields; the component finds
//! them by id. Every id and endpoint below defaults to the value used by the
//! cover-letter pages, so the component works without configuration there,
//! while other pages can remap the contract. Each lookup degrades to a no-op
//! when the element is absent.

use yew::prelude::*;

/// Properties for the `EditorComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct EditorProps {
    /// Id of the enclosing form whose submission must carry the editor
    /// content. The submit hook is skipped when the form is missing.
    #[prop_or(AttrValue::Static("editor-form"))]
    pub form_id: AttrValue,

    /// Id of the hidden input holding the plain-text serialization.
    #[prop_or(AttrValue::Static("letter_text"))]
    pub text_field_id: AttrValue,

    /// Id of the hidden input holding the rendered markup. Takes precedence
    /// over the plain-text field when loading prior content.
    #[prop_or(AttrValue::Static("letter_html"))]
    pub html_field_id: AttrValue,

    /// Id of the hidden input carrying the font size for PDF downloads.
    /// Blank or missing values are omitted from the download request.
    #[prop_or(AttrValue::Static("font_size"))]
    pub font_size_field_id: AttrValue,

    /// Id of the hidden input carrying the job identifier for PDF downloads.
    /// Blank or missing values are omitted from the download request.
    #[prop_or(AttrValue::Static("job_id"))]
    pub job_id_field_id: AttrValue,

    /// Endpoint receiving template uploads as multipart form data.
    #[prop_or(AttrValue::Static("/upload_template"))]
    pub upload_url: AttrValue,

    /// Endpoint receiving the synthesized download form POST.
    #[prop_or(AttrValue::Static("/coverletter/download"))]
    pub download_url: AttrValue,
}
