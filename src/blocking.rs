//! Blocking variants of the client operations
//!
//! [`Client`] here mirrors the async [`crate::Client`] operation for
//! operation: identical parameters, identical results, identical errors.
//! Each call runs the shared async routine to completion on a runtime
//! owned by this client, occupying the calling thread for the duration
//! of the network round trip.

use crate::config::Config;
use crate::document::{Document, PdfOutput};
use crate::error::Result;
use crate::params::{
    CompressPdfParams, ExtractFormDataParams, FlattenPdfParams, GeneratePdfParams,
    GetDocumentParams, GetFileParams, ProtectPdfParams, WatermarkPdfParams,
};
use bytes::Bytes;

/// Blocking client for the PDFGate API.
///
/// # Example
///
/// ```rust,no_run
/// use pdfgate::blocking::Client;
/// use pdfgate::{GeneratePdfParams, PdfOutput};
///
/// fn main() -> Result<(), pdfgate::Error> {
///     let client = Client::new("test_8a61a2f0")?;
///     let output = client.generate_pdf(GeneratePdfParams {
///         html: Some("<h1>Hello, PDFGate!</h1>".to_string()),
///         ..Default::default()
///     })?;
///     assert!(output.is_file());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Client {
    inner: crate::Client,
    runtime: tokio::runtime::Runtime,
}

impl Client {
    /// Create a blocking client with the default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_async(crate::Client::new(api_key)?)
    }

    /// Create a blocking client with a custom base URL, for tests or
    /// self-hosted deployments.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::from_async(
            crate::Client::builder(api_key)
                .base_url(base_url)
                .build()?,
        )
    }

    /// Create a blocking client with a custom timeout configuration.
    pub fn with_config(api_key: impl Into<String>, config: Config) -> Result<Self> {
        Self::from_async(crate::Client::builder(api_key).config(config).build()?)
    }

    /// Wrap an existing async client.
    pub fn from_async(inner: crate::Client) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { inner, runtime })
    }

    /// Fetch a document's metadata record. See
    /// [`crate::Client::get_document`].
    pub fn get_document(&self, params: GetDocumentParams) -> Result<Document> {
        self.runtime.block_on(self.inner.get_document(params))
    }

    /// Download a document's raw file content. See
    /// [`crate::Client::get_file`].
    pub fn get_file(&self, params: GetFileParams) -> Result<Bytes> {
        self.runtime.block_on(self.inner.get_file(params))
    }

    /// Generate a PDF from inline HTML or a URL. See
    /// [`crate::Client::generate_pdf`].
    pub fn generate_pdf(&self, params: GeneratePdfParams) -> Result<PdfOutput> {
        self.runtime.block_on(self.inner.generate_pdf(params))
    }

    /// Flatten a PDF's form fields. See [`crate::Client::flatten_pdf`].
    pub fn flatten_pdf(&self, params: FlattenPdfParams) -> Result<PdfOutput> {
        self.runtime.block_on(self.inner.flatten_pdf(params))
    }

    /// Extract form field values. See
    /// [`crate::Client::extract_form_data`].
    pub fn extract_form_data(&self, params: ExtractFormDataParams) -> Result<serde_json::Value> {
        self.runtime.block_on(self.inner.extract_form_data(params))
    }

    /// Encrypt a PDF. See [`crate::Client::protect_pdf`].
    pub fn protect_pdf(&self, params: ProtectPdfParams) -> Result<PdfOutput> {
        self.runtime.block_on(self.inner.protect_pdf(params))
    }

    /// Compress a PDF. See [`crate::Client::compress_pdf`].
    pub fn compress_pdf(&self, params: CompressPdfParams) -> Result<PdfOutput> {
        self.runtime.block_on(self.inner.compress_pdf(params))
    }

    /// Watermark a PDF. See [`crate::Client::watermark_pdf`].
    pub fn watermark_pdf(&self, params: WatermarkPdfParams) -> Result<PdfOutput> {
        self.runtime.block_on(self.inner.watermark_pdf(params))
    }
}
