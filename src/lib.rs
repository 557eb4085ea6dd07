//! Rust client for the PDFGate API
//!
//! PDFGate is a hosted PDF-processing service. This crate wraps its HTTP
//! API with typed parameters and responses:
//! - `generate_pdf`: render a PDF from HTML or a URL
//! - `get_document` / `get_file`: fetch a document's metadata or bytes
//! - `flatten_pdf`: bake interactive form fields into static content
//! - `compress_pdf`: shrink a PDF without changing its appearance
//! - `watermark_pdf`: overlay a text or image watermark
//! - `protect_pdf`: encrypt with user/owner passwords and permissions
//! - `extract_form_data`: read filled form field values
//!
//! Every operation is available in an async form on [`Client`] and a
//! blocking form on [`blocking::Client`] with identical parameters and
//! semantics.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use pdfgate::{Client, GeneratePdfParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pdfgate::Error> {
//!     let client = Client::new("live_8a61a2f0")?;
//!
//!     let output = client
//!         .generate_pdf(GeneratePdfParams {
//!             html: Some("<h1>Hello, PDFGate!</h1>".to_string()),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     if let Some(bytes) = output.into_bytes() {
//!         std::fs::write("hello.pdf", &bytes)?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod blocking;
pub mod client;
pub mod config;
pub mod document;
pub(crate) mod endpoint;
pub mod error;
pub mod params;

pub use client::{Client, ClientBuilder};
pub use config::{Config, PRODUCTION_API_DOMAIN, SANDBOX_API_DOMAIN};
pub use document::{Document, DocumentStatus, DocumentType, PdfOutput};
pub use error::{Error, Result};
pub use params::{
    Authentication, CompressPdfParams, EmulateMediaType, EncryptionAlgorithm,
    ExtractFormDataParams, FileUpload, FlattenPdfParams, GeneratePdfParams, GetDocumentParams,
    GetFileParams, Orientation, PageMargin, PageSize, PdfInput, ProtectPdfParams, SelectorChain,
    SelectorChainSetup, StandardFont, Viewport, WatermarkPdfParams, WatermarkType,
};
