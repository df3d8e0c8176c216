use serde::Deserialize;

#[derive(Deserialize)]
/// Response payload from the template upload endpoint.
/// Carries the text the server extracted from the uploaded file.
pub struct UploadTemplateResponse {
    #[serde(default)]
    pub text: Option<String>,
}

impl UploadTemplateResponse {
    /// The extracted text, with a missing field treated as an empty letter.
    pub fn text_or_empty(self) -> String {
        self.text.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_extracted_text() {
        let response: UploadTemplateResponse =
            serde_json::from_str(r#"{ "text": "Dear team," }"#).unwrap();
        assert_eq!(response.text_or_empty(), "Dear team,");
    }

    #[test]
    fn missing_text_field_becomes_empty() {
        let response: UploadTemplateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text_or_empty(), "");
    }
}
