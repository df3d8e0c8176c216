//! Letter content rules shared by the editor frontend.
//!
//! Two pieces of pure logic live here so they can be unit tested without a
//! live document:
//! - `InitialContent`: which serialization of a previously edited letter the
//!   editor should load on startup, and in which mode.
//! - `DownloadRequest`: the exact field set posted to the PDF download
//!   endpoint, with blank optional values dropped instead of sent empty.

/// What the editor should be populated with when the page loads.
///
/// Rendered markup wins over plain text when both hidden fields carry a
/// value, because it preserves the formatting the user last saw. A field is
/// considered present only when it contains something other than whitespace;
/// the stored value itself is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialContent {
    /// Load this markup into the surface as-is.
    Markup(String),
    /// No markup available; load this as unformatted text.
    PlainText(String),
    /// Neither field holds content. The editor starts empty.
    Empty,
}

impl InitialContent {
    pub fn from_fields(markup: &str, text: &str) -> Self {
        if !markup.trim().is_empty() {
            InitialContent::Markup(markup.to_string())
        } else if !text.trim().is_empty() {
            InitialContent::PlainText(text.to_string())
        } else {
            InitialContent::Empty
        }
    }
}

/// Payload for the synthesized PDF download form.
///
/// `letter_html` is always sent. `font_size` and `job_id` are sent only when
/// their source inputs held a non-blank value: the server treats an empty
/// `job_id` parameter as a valid-but-blank identifier, so a blank value must
/// produce no parameter at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    letter_html: String,
    font_size: Option<String>,
    job_id: Option<String>,
}

impl DownloadRequest {
    pub fn new(letter_html: String, font_size: Option<String>, job_id: Option<String>) -> Self {
        Self {
            letter_html,
            font_size: non_blank(font_size),
            job_id: non_blank(job_id),
        }
    }

    /// Name/value pairs in submission order, one per hidden input.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("letter_html", self.letter_html.clone())];
        if let Some(font_size) = &self.font_size {
            fields.push(("font_size", font_size.clone()));
        }
        if let Some(job_id) = &self.job_id {
            fields.push(("job_id", job_id.clone()));
        }
        fields
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_takes_precedence_over_plain_text() {
        let content = InitialContent::from_fields("<p>A</p>", "B");
        assert_eq!(content, InitialContent::Markup("<p>A</p>".to_string()));
    }

    #[test]
    fn falls_back_to_plain_text_when_markup_is_empty() {
        let content = InitialContent::from_fields("", "hello");
        assert_eq!(content, InitialContent::PlainText("hello".to_string()));
    }

    #[test]
    fn whitespace_only_markup_counts_as_absent() {
        let content = InitialContent::from_fields("  \n", "hello");
        assert_eq!(content, InitialContent::PlainText("hello".to_string()));
    }

    #[test]
    fn both_fields_empty_yields_empty_editor() {
        assert_eq!(InitialContent::from_fields("", ""), InitialContent::Empty);
    }

    #[test]
    fn markup_is_kept_verbatim() {
        let content = InitialContent::from_fields(" <p>A</p>\n", "");
        assert_eq!(content, InitialContent::Markup(" <p>A</p>\n".to_string()));
    }

    #[test]
    fn blank_job_id_is_omitted_entirely() {
        let request = DownloadRequest::new(
            "<p>letter</p>".to_string(),
            Some("14".to_string()),
            Some("".to_string()),
        );
        let fields = request.form_fields();
        assert!(fields.iter().all(|(name, _)| *name != "job_id"));
        assert_eq!(
            fields,
            vec![
                ("letter_html", "<p>letter</p>".to_string()),
                ("font_size", "14".to_string()),
            ]
        );
    }

    #[test]
    fn present_optionals_are_sent_with_exact_values() {
        let request = DownloadRequest::new(
            "<b>x</b>".to_string(),
            Some("14".to_string()),
            Some("42".to_string()),
        );
        assert_eq!(
            request.form_fields(),
            vec![
                ("letter_html", "<b>x</b>".to_string()),
                ("font_size", "14".to_string()),
                ("job_id", "42".to_string()),
            ]
        );
    }

    #[test]
    fn missing_optionals_leave_only_the_markup_field() {
        let request = DownloadRequest::new("<p>x</p>".to_string(), None, None);
        assert_eq!(
            request.form_fields(),
            vec![("letter_html", "<p>x</p>".to_string())]
        );
    }
}
