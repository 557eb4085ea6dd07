//! Request parameter sets for the PDFGate API operations
//!
//! Every operation takes its own parameter struct. Optional fields are
//! omitted from the wire encoding when unset; field names serialize as
//! camelCase to match the API schema.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported page sizes for generated PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    Ledger,
    Tabloid,
    Legal,
    Letter,
}

/// Orientation options for generated PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Media types for CSS emulation during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmulateMediaType {
    Screen,
    Print,
}

/// Standard built-in fonts supported by the watermark renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardFont {
    #[serde(rename = "times-roman")]
    TimesRoman,
    #[serde(rename = "times-bold")]
    TimesBold,
    #[serde(rename = "times-italic")]
    TimesItalic,
    #[serde(rename = "times-bolditalic")]
    TimesBoldItalic,
    #[serde(rename = "helvetica")]
    Helvetica,
    #[serde(rename = "helvetica-bold")]
    HelveticaBold,
    #[serde(rename = "helvetica-oblique")]
    HelveticaOblique,
    #[serde(rename = "helvetica-boldoblique")]
    HelveticaBoldOblique,
    #[serde(rename = "courier")]
    Courier,
    #[serde(rename = "courier-bold")]
    CourierBold,
    #[serde(rename = "courier-oblique")]
    CourierOblique,
    #[serde(rename = "courier-boldoblique")]
    CourierBoldOblique,
}

/// Encryption algorithms accepted by the protect endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncryptionAlgorithm {
    #[serde(rename = "AES256")]
    Aes256,
    #[serde(rename = "AES128")]
    Aes128,
}

/// Watermark content kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatermarkType {
    Text,
    Image,
}

/// Margins to apply to a PDF page. Values are CSS-style lengths
/// (e.g. `"1cm"`, `"0.5in"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMargin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

/// Sequence of CSS selectors to click in order before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorChain {
    pub selectors: Vec<String>,
}

/// Configuration for click selector chains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorChainSetup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_failing_chains: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chains: Option<Vec<SelectorChain>>,
}

/// HTTP basic-auth credentials for accessing protected web content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    pub username: String,
    pub password: String,
}

/// Viewport dimensions used while rendering a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Binary file payload for multipart PDF uploads.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Filename reported in the multipart part
    pub file_name: String,
    /// Raw file content
    pub data: Vec<u8>,
    /// MIME type of the part (default: `application/pdf`)
    pub content_type: Option<String>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Input PDF for the transform operations.
///
/// A transform either references a document already held by the service
/// or uploads a file inline; the two are mutually exclusive, so the
/// choice is a sum type rather than a pair of optional fields.
#[derive(Debug, Clone)]
pub enum PdfInput {
    /// ID of a document previously created through the API
    DocumentId(String),
    /// Raw PDF content uploaded with the request
    Upload(FileUpload),
}

impl PdfInput {
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            PdfInput::DocumentId(id) if id.is_empty() => {
                Err(Error::validation("'document_id' must not be empty"))
            }
            PdfInput::Upload(file) if file.data.is_empty() => {
                Err(Error::validation("uploaded file must not be empty"))
            }
            _ => Ok(()),
        }
    }
}

fn validate_document_id(document_id: &str) -> Result<()> {
    if document_id.is_empty() {
        return Err(Error::validation("'document_id' must not be empty"));
    }
    Ok(())
}

/// Parameters for fetching a document's metadata.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDocumentParams {
    #[serde(skip)]
    pub document_id: String,
    /// Lifetime in seconds of the pre-signed download URL included in the
    /// response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url_expires_in: Option<u64>,
}

impl GetDocumentParams {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            pre_signed_url_expires_in: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_document_id(&self.document_id)
    }
}

/// Parameters for downloading a document's file content.
#[derive(Debug, Clone, Default)]
pub struct GetFileParams {
    pub document_id: String,
}

impl GetFileParams {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_document_id(&self.document_id)
    }
}

/// Parameters for generating a PDF from HTML or a URL.
///
/// Exactly one of `html` and `url` must be set; the two sources are
/// mutually exclusive and an ambiguous combination is rejected before any
/// request is sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfParams {
    /// Inline HTML to render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// URL of the page to render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Return the document metadata record instead of the raw file bytes
    pub json_response: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url_expires_in: Option<u64>,
    #[serde(rename = "pageSizeType", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,
    /// Page width in pixels; ignored when `page_size` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Page height in pixels; ignored when `page_size` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// HTML template for the page header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// HTML template for the page footer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<PageMargin>,
    /// Rendering timeout in milliseconds, enforced server-side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    /// JavaScript evaluated in the page before rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,
    /// Extra CSS injected into the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emulate_media_type: Option<EmulateMediaType>,
    /// Extra HTTP headers sent when fetching `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<HashMap<String, String>>,
    /// Caller-defined metadata stored with the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Wait until this selector appears before rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_selector: Option<String>,
    /// Click this selector before rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_selector_chain_setup: Option<SelectorChainSetup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_network_idle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grayscale: Option<bool>,
    /// Keep interactive form fields editable in the output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_form_fields: Option<bool>,
    /// Delay in milliseconds between page load and rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_images: Option<bool>,
    /// Rendering scale factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Pages to include (e.g. `"1-5,8"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_ranges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Basic-auth credentials for fetching `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

impl GeneratePdfParams {
    pub(crate) fn validate(&self) -> Result<()> {
        match (&self.html, &self.url) {
            (None, None) => Err(Error::validation(
                "Either the 'html' or 'url' parameter must be provided to generate a PDF.",
            )),
            (Some(_), Some(_)) => Err(Error::validation(
                "The 'html' and 'url' parameters are mutually exclusive.",
            )),
            _ => Ok(()),
        }
    }
}

/// Parameters for flattening a PDF's form fields into static content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenPdfParams {
    #[serde(skip)]
    pub input: PdfInput,
    /// Return the document metadata record instead of the raw file bytes
    pub json_response: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url_expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl FlattenPdfParams {
    pub fn new(input: PdfInput) -> Self {
        Self {
            input,
            json_response: false,
            pre_signed_url_expires_in: None,
            metadata: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.input.validate()
    }
}

/// Parameters for extracting form field values from a PDF.
#[derive(Debug, Clone)]
pub struct ExtractFormDataParams {
    pub input: PdfInput,
}

impl ExtractFormDataParams {
    pub fn new(input: PdfInput) -> Self {
        Self { input }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.input.validate()
    }
}

/// Parameters for encrypting a PDF with passwords and usage restrictions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectPdfParams {
    #[serde(skip)]
    pub input: PdfInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<EncryptionAlgorithm>,
    /// Password required to open the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_password: Option<String>,
    /// Password unlocking the restricted permissions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_print: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_copy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_editing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypt_metadata: Option<bool>,
    /// Return the document metadata record instead of the raw file bytes
    pub json_response: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url_expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl ProtectPdfParams {
    pub fn new(input: PdfInput) -> Self {
        Self {
            input,
            algorithm: None,
            user_password: None,
            owner_password: None,
            disable_print: None,
            disable_copy: None,
            disable_editing: None,
            encrypt_metadata: None,
            json_response: false,
            pre_signed_url_expires_in: None,
            metadata: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.input.validate()
    }
}

/// Parameters for compressing a PDF without changing its visual content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressPdfParams {
    #[serde(skip)]
    pub input: PdfInput,
    /// Linearize the output for progressive web viewing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linearize: Option<bool>,
    /// Return the document metadata record instead of the raw file bytes
    pub json_response: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url_expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CompressPdfParams {
    pub fn new(input: PdfInput) -> Self {
        Self {
            input,
            linearize: None,
            json_response: false,
            pre_signed_url_expires_in: None,
            metadata: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.input.validate()
    }
}

/// Parameters for overlaying a text or image watermark onto PDF pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatermarkPdfParams {
    #[serde(skip)]
    pub input: PdfInput,
    /// Whether the watermark is rendered from `text` or `image`
    #[serde(rename = "type")]
    pub kind: WatermarkType,
    /// Watermark text; required when `kind` is [`WatermarkType::Text`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Watermark image; required when `kind` is [`WatermarkType::Image`]
    #[serde(skip)]
    pub image: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<StandardFont>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    /// Hex color for text watermarks (e.g. `"#ff0000"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    /// Opacity between 0.0 and 1.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
    /// Rotation in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    /// Return the document metadata record instead of the raw file bytes
    pub json_response: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url_expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl WatermarkPdfParams {
    pub fn new(input: PdfInput, kind: WatermarkType) -> Self {
        Self {
            input,
            kind,
            text: None,
            image: None,
            font: None,
            font_size: None,
            font_color: None,
            opacity: None,
            x_position: None,
            y_position: None,
            image_width: None,
            image_height: None,
            rotate: None,
            json_response: false,
            pre_signed_url_expires_in: None,
            metadata: None,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.input.validate()?;
        match self.kind {
            WatermarkType::Text if self.text.is_none() => Err(Error::validation(
                "'text' is required for a text watermark",
            )),
            WatermarkType::Image if self.image.is_none() => Err(Error::validation(
                "'image' is required for an image watermark",
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_generate_requires_a_source() {
        let params = GeneratePdfParams::default();
        assert!(matches!(
            params.validate(),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    fn test_generate_rejects_both_sources() {
        let params = GeneratePdfParams {
            html: Some("<h1>Test</h1>".to_string()),
            url: Some("https://example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    fn test_generate_accepts_single_source() {
        let params = GeneratePdfParams {
            html: Some("<h1>Test</h1>".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        let params = GeneratePdfParams {
            url: Some("https://example.com".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_generate_serializes_camel_case_without_nulls() {
        let params = GeneratePdfParams {
            html: Some("<h1>Test</h1>".to_string()),
            json_response: true,
            page_size: Some(PageSize::A4),
            print_background: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "html": "<h1>Test</h1>",
                "jsonResponse": true,
                "pageSizeType": "a4",
                "printBackground": true,
            })
        );
    }

    #[test]
    fn test_empty_document_id_rejected() {
        assert!(GetDocumentParams::new("").validate().is_err());
        assert!(GetFileParams::new("").validate().is_err());
        assert!(FlattenPdfParams::new(PdfInput::DocumentId(String::new()))
            .validate()
            .is_err());
    }

    #[test]
    fn test_empty_upload_rejected() {
        let params = CompressPdfParams::new(PdfInput::Upload(FileUpload::new(
            "input.pdf",
            Vec::new(),
        )));
        assert!(matches!(
            params.validate(),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    fn test_watermark_text_requires_text() {
        let params = WatermarkPdfParams::new(
            PdfInput::DocumentId("6642381c5c61".to_string()),
            WatermarkType::Text,
        );
        assert!(params.validate().is_err());

        let params = WatermarkPdfParams {
            text: Some("CONFIDENTIAL".to_string()),
            ..params
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_watermark_image_requires_image() {
        let params = WatermarkPdfParams::new(
            PdfInput::DocumentId("6642381c5c61".to_string()),
            WatermarkType::Image,
        );
        assert!(params.validate().is_err());

        let params = WatermarkPdfParams {
            image: Some(FileUpload::new("logo.png", vec![0x89, 0x50, 0x4e, 0x47])),
            ..params
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_watermark_kind_serializes_as_type() {
        let params = WatermarkPdfParams {
            text: Some("DRAFT".to_string()),
            font: Some(StandardFont::HelveticaBold),
            opacity: Some(0.4),
            ..WatermarkPdfParams::new(
                PdfInput::DocumentId("6642381c5c61".to_string()),
                WatermarkType::Text,
            )
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "text",
                "text": "DRAFT",
                "font": "helvetica-bold",
                "opacity": 0.4,
                "jsonResponse": false,
            })
        );
    }

    #[test]
    fn test_protect_serializes_algorithm_names() {
        let params = ProtectPdfParams {
            algorithm: Some(EncryptionAlgorithm::Aes256),
            user_password: Some("secret".to_string()),
            disable_print: Some(true),
            ..ProtectPdfParams::new(PdfInput::DocumentId("6642381c5c61".to_string()))
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "algorithm": "AES256",
                "userPassword": "secret",
                "disablePrint": true,
                "jsonResponse": false,
            })
        );
    }

    #[test]
    fn test_page_size_wire_values() {
        assert_eq!(serde_json::to_value(PageSize::Ledger).unwrap(), json!("ledger"));
        assert_eq!(serde_json::to_value(PageSize::A0).unwrap(), json!("a0"));
        assert_eq!(
            serde_json::to_value(StandardFont::TimesBoldItalic).unwrap(),
            json!("times-bolditalic")
        );
        assert_eq!(
            serde_json::to_value(StandardFont::CourierBoldOblique).unwrap(),
            json!("courier-boldoblique")
        );
    }
}
