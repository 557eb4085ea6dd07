//! Timeout and endpoint configuration for the PDFGate client

use std::time::Duration;

/// Base URL of the production API, selected by `live_` API keys.
pub const PRODUCTION_API_DOMAIN: &str = "https://api.pdfgate.com";

/// Base URL of the sandbox API, selected by `test_` API keys.
pub const SANDBOX_API_DOMAIN: &str = "https://api-sandbox.pdfgate.com";

/// Per-operation timeout configuration.
///
/// The API documents no retry policy, so the client performs exactly one
/// outbound request per call and exposes timeouts as the only resilience
/// knob. Generation renders a headless browser server-side and gets a much
/// larger budget than the transform endpoints.
#[derive(Debug, Clone)]
pub struct Config {
    /// Timeout for metadata and file downloads (default: 60s)
    pub default_timeout: Duration,
    /// Timeout for PDF generation (default: 15 minutes)
    pub generate_timeout: Duration,
    /// Timeout for form flattening (default: 3 minutes)
    pub flatten_timeout: Duration,
    /// Timeout for compression (default: 3 minutes)
    pub compress_timeout: Duration,
    /// Timeout for encryption (default: 3 minutes)
    pub protect_timeout: Duration,
    /// Timeout for watermarking (default: 3 minutes)
    pub watermark_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_timeout: Duration::from_secs(60),
            generate_timeout: Duration::from_secs(15 * 60),
            flatten_timeout: Duration::from_secs(3 * 60),
            compress_timeout: Duration::from_secs(3 * 60),
            protect_timeout: Duration::from_secs(3 * 60),
            watermark_timeout: Duration::from_secs(3 * 60),
        }
    }
}
