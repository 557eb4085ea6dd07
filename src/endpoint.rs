//! Endpoint construction for the PDFGate API

use crate::config::{PRODUCTION_API_DOMAIN, SANDBOX_API_DOMAIN};
use crate::error::{Error, Result};

/// Return the API domain corresponding to an API key.
///
/// Keys prefixed with `live_` map to the production domain, keys prefixed
/// with `test_` map to the sandbox domain. Anything else is rejected
/// before a client is ever constructed.
pub(crate) fn domain_for_api_key(api_key: &str) -> Result<&'static str> {
    if api_key.starts_with("live_") {
        Ok(PRODUCTION_API_DOMAIN)
    } else if api_key.starts_with("test_") {
        Ok(SANDBOX_API_DOMAIN)
    } else {
        Err(Error::validation(
            "Invalid API key format. Expected to start with 'live_' or 'test_'.",
        ))
    }
}

/// Builds full request URLs from a base domain.
#[derive(Debug, Clone)]
pub(crate) struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Create an endpoint set rooted at `base`. A trailing slash is
    /// stripped so path formatting stays uniform.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL for fetching a document's metadata.
    pub fn document(&self, document_id: &str) -> String {
        format!("{}/document/{}", self.base, document_id)
    }

    /// URL for downloading a document's file content.
    pub fn file(&self, document_id: &str) -> String {
        format!("{}/file/{}", self.base, document_id)
    }

    pub fn generate_pdf(&self) -> String {
        format!("{}/v1/generate/pdf", self.base)
    }

    pub fn flatten_pdf(&self) -> String {
        format!("{}/forms/flatten", self.base)
    }

    pub fn extract_form_data(&self) -> String {
        format!("{}/forms/extract-data", self.base)
    }

    pub fn protect_pdf(&self) -> String {
        format!("{}/protect/pdf", self.base)
    }

    pub fn compress_pdf(&self) -> String {
        format!("{}/compress/pdf", self.base)
    }

    pub fn watermark_pdf(&self) -> String {
        format!("{}/watermark/pdf", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_domain_for_live_key() {
        assert_eq!(
            domain_for_api_key("live_8a61a2f0").unwrap(),
            PRODUCTION_API_DOMAIN
        );
    }

    #[test]
    fn test_domain_for_test_key() {
        assert_eq!(
            domain_for_api_key("test_8a61a2f0").unwrap(),
            SANDBOX_API_DOMAIN
        );
    }

    #[test]
    fn test_domain_rejects_unknown_prefix() {
        let result = domain_for_api_key("wrong_prefix_213123");
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_urls() {
        let endpoints = Endpoints::new("https://api.pdfgate.com");
        assert_eq!(
            endpoints.document("6642381c5c61"),
            "https://api.pdfgate.com/document/6642381c5c61"
        );
        assert_eq!(
            endpoints.file("6642381c5c61"),
            "https://api.pdfgate.com/file/6642381c5c61"
        );
        assert_eq!(
            endpoints.generate_pdf(),
            "https://api.pdfgate.com/v1/generate/pdf"
        );
        assert_eq!(
            endpoints.flatten_pdf(),
            "https://api.pdfgate.com/forms/flatten"
        );
        assert_eq!(
            endpoints.extract_form_data(),
            "https://api.pdfgate.com/forms/extract-data"
        );
        assert_eq!(endpoints.protect_pdf(), "https://api.pdfgate.com/protect/pdf");
        assert_eq!(
            endpoints.compress_pdf(),
            "https://api.pdfgate.com/compress/pdf"
        );
        assert_eq!(
            endpoints.watermark_pdf(),
            "https://api.pdfgate.com/watermark/pdf"
        );
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let endpoints = Endpoints::new("http://127.0.0.1:8080/");
        assert_eq!(endpoints.base(), "http://127.0.0.1:8080");
        assert_eq!(
            endpoints.generate_pdf(),
            "http://127.0.0.1:8080/v1/generate/pdf"
        );
    }
}
