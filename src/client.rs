//! Async client for the PDFGate API
//!
//! Every operation performs exactly one outbound HTTP request; nothing is
//! retried or cached. Dropping a returned future aborts the in-flight
//! request, leaving no client-side state behind.

use crate::config::Config;
use crate::document::{Document, PdfOutput};
use crate::endpoint::{domain_for_api_key, Endpoints};
use crate::error::{Error, Result};
use crate::params::{
    CompressPdfParams, ExtractFormDataParams, FileUpload, FlattenPdfParams, GeneratePdfParams,
    GetDocumentParams, GetFileParams, PdfInput, ProtectPdfParams, WatermarkPdfParams,
};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Builder for [`Client`], allowing the base URL and timeout
/// configuration to be overridden before construction.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: Option<String>,
    config: Config,
}

impl ClientBuilder {
    /// Override the base URL derived from the API key. Mainly useful for
    /// pointing the client at a mock server in tests.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Replace the default timeout configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build the client, validating the API key and base URL.
    pub fn build(self) -> Result<Client> {
        let domain = domain_for_api_key(&self.api_key)?;
        let base = match self.base_url {
            Some(base) => {
                url::Url::parse(&base)
                    .map_err(|e| Error::validation(format!("Invalid base URL: {e}")))?;
                base
            }
            None => domain.to_string(),
        };

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| Error::validation("API key contains invalid header characters"))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)?;

        Ok(Client {
            http,
            endpoints: Endpoints::new(base),
            config: self.config,
        })
    }
}

/// Client for the PDFGate API.
///
/// The client is cheap to clone; clones share the underlying connection
/// pool and the authentication credential. Concurrent calls are
/// independent and hold no shared mutable state.
///
/// # Example
///
/// ```rust,no_run
/// use pdfgate::{Client, GeneratePdfParams, PdfOutput};
///
/// #[tokio::main]
/// async fn main() -> Result<(), pdfgate::Error> {
///     let client = Client::new("test_8a61a2f0")?;
///
///     let output = client
///         .generate_pdf(GeneratePdfParams {
///             html: Some("<h1>Hello, PDFGate!</h1>".to_string()),
///             ..Default::default()
///         })
///         .await?;
///
///     if let PdfOutput::File(bytes) = output {
///         std::fs::write("hello.pdf", &bytes)?;
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoints: Endpoints,
    config: Config,
}

impl Client {
    /// Create a client with the default configuration.
    ///
    /// The API domain is derived from the key prefix: `live_` keys talk
    /// to production, `test_` keys to the sandbox.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom configuration.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            base_url: None,
            config: Config::default(),
        }
    }

    /// Base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        self.endpoints.base()
    }

    /// Fetch a document's metadata record.
    ///
    /// Sends a GET request to `/document/{document_id}`. When
    /// `pre_signed_url_expires_in` is set it is passed as the
    /// `preSignedUrlExpiresIn` query parameter and bounds the lifetime of
    /// the returned download URL.
    pub async fn get_document(&self, params: GetDocumentParams) -> Result<Document> {
        params.validate()?;
        let url = self.endpoints.document(&params.document_id);
        debug!(%url, "fetching document metadata");

        let request = self
            .http
            .get(&url)
            .query(&params)
            .timeout(self.config.default_timeout);
        let response = self.execute(request).await?;

        Self::decode_json(response).await
    }

    /// Download a document's raw file content.
    pub async fn get_file(&self, params: GetFileParams) -> Result<Bytes> {
        params.validate()?;
        let url = self.endpoints.file(&params.document_id);
        debug!(%url, "downloading file");

        let request = self.http.get(&url).timeout(self.config.default_timeout);
        let response = self.execute(request).await?;

        response.bytes().await.map_err(Error::Transport)
    }

    /// Generate a PDF from inline HTML or a URL.
    ///
    /// Returns the raw file bytes, or the document record when
    /// `json_response` is set.
    pub async fn generate_pdf(&self, params: GeneratePdfParams) -> Result<PdfOutput> {
        params.validate()?;
        let url = self.endpoints.generate_pdf();
        debug!(%url, "generating PDF");

        let request = self
            .http
            .post(&url)
            .json(&params)
            .timeout(self.config.generate_timeout);
        let response = self.execute(request).await?;

        Self::decode_output(response, params.json_response).await
    }

    /// Flatten a PDF's interactive form fields into static content.
    pub async fn flatten_pdf(&self, params: FlattenPdfParams) -> Result<PdfOutput> {
        params.validate()?;
        let fields = Self::form_fields(&params)?;
        let json_response = params.json_response;

        let request = self.transform_request(
            self.endpoints.flatten_pdf(),
            params.input,
            fields,
            None,
            self.config.flatten_timeout,
        )?;
        let response = self.execute(request).await?;

        Self::decode_output(response, json_response).await
    }

    /// Extract form field values from a PDF.
    ///
    /// The response shape depends on the form in the document, so the
    /// result is returned as untyped JSON.
    pub async fn extract_form_data(&self, params: ExtractFormDataParams) -> Result<serde_json::Value> {
        params.validate()?;
        let url = self.endpoints.extract_form_data();

        let request = self
            .transform_request(url, params.input, Vec::new(), None, self.config.default_timeout)?;
        let response = self.execute(request).await?;

        Self::decode_json(response).await
    }

    /// Encrypt a PDF with user/owner passwords and usage restrictions.
    pub async fn protect_pdf(&self, params: ProtectPdfParams) -> Result<PdfOutput> {
        params.validate()?;
        let fields = Self::form_fields(&params)?;
        let json_response = params.json_response;

        let request = self.transform_request(
            self.endpoints.protect_pdf(),
            params.input,
            fields,
            None,
            self.config.protect_timeout,
        )?;
        let response = self.execute(request).await?;

        Self::decode_output(response, json_response).await
    }

    /// Compress a PDF to reduce its size without changing its visual
    /// content.
    pub async fn compress_pdf(&self, params: CompressPdfParams) -> Result<PdfOutput> {
        params.validate()?;
        let fields = Self::form_fields(&params)?;
        let json_response = params.json_response;

        let request = self.transform_request(
            self.endpoints.compress_pdf(),
            params.input,
            fields,
            None,
            self.config.compress_timeout,
        )?;
        let response = self.execute(request).await?;

        Self::decode_output(response, json_response).await
    }

    /// Overlay a text or image watermark onto a PDF's pages.
    pub async fn watermark_pdf(&self, mut params: WatermarkPdfParams) -> Result<PdfOutput> {
        params.validate()?;
        let fields = Self::form_fields(&params)?;
        let json_response = params.json_response;
        let attachment = params.image.take().map(|image| ("watermark", image));

        let request = self.transform_request(
            self.endpoints.watermark_pdf(),
            params.input,
            fields,
            attachment,
            self.config.watermark_timeout,
        )?;
        let response = self.execute(request).await?;

        Self::decode_output(response, json_response).await
    }

    /// Build the request for a transform endpoint.
    ///
    /// An input referenced by document ID travels as an urlencoded form;
    /// any inline upload switches the request to multipart, with the
    /// scalar fields carried as text parts.
    fn transform_request(
        &self,
        url: String,
        input: PdfInput,
        mut fields: Vec<(String, String)>,
        attachment: Option<(&'static str, FileUpload)>,
        timeout: Duration,
    ) -> Result<reqwest::RequestBuilder> {
        debug!(%url, "dispatching transform request");
        let builder = match (input, attachment) {
            (PdfInput::DocumentId(id), None) => {
                fields.push(("documentId".to_string(), id));
                self.http.post(&url).form(&fields)
            }
            (input, attachment) => {
                let mut form = Form::new();
                for (key, value) in fields {
                    form = form.text(key, value);
                }
                match input {
                    PdfInput::DocumentId(id) => form = form.text("documentId", id),
                    PdfInput::Upload(file) => form = form.part("file", Self::file_part(file)?),
                }
                if let Some((name, file)) = attachment {
                    form = form.part(name, Self::file_part(file)?);
                }
                self.http.post(&url).multipart(form)
            }
        };
        Ok(builder.timeout(timeout))
    }

    /// Flatten a parameter struct into form fields.
    ///
    /// Scalars keep their display form; nested structures are carried as
    /// JSON strings. Unset options are omitted.
    fn form_fields<P: Serialize>(params: &P) -> Result<Vec<(String, String)>> {
        let value = serde_json::to_value(params)
            .map_err(|e| Error::validation(format!("parameters could not be encoded: {e}")))?;
        let map = match value {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(Error::validation(format!(
                    "parameters must encode to an object, got {other}"
                )))
            }
        };

        let mut fields = Vec::with_capacity(map.len());
        for (key, value) in map {
            let text = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                other => serde_json::to_string(&other)
                    .map_err(|e| Error::validation(format!("parameters could not be encoded: {e}")))?,
            };
            fields.push((key, text));
        }
        Ok(fields)
    }

    fn file_part(upload: FileUpload) -> Result<Part> {
        let content_type = upload
            .content_type
            .unwrap_or_else(|| "application/pdf".to_string());
        Part::bytes(upload.data)
            .file_name(upload.file_name)
            .mime_str(&content_type)
            .map_err(|e| Error::validation(format!("Invalid content type: {e}")))
    }

    /// Send the request and turn non-success statuses into [`Error::Api`].
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(Error::Transport)?;
        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            warn!(status = status.as_u16(), %message, "API request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Extract the service-provided error message from a failed response.
    ///
    /// JSON error bodies carry a `message` field; anything else falls
    /// back to the raw body text.
    async fn error_message(response: reqwest::Response) -> String {
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        let body = response.text().await.unwrap_or_default();
        if is_json {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
                if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                    return message.to_string();
                }
            }
        }
        body
    }

    async fn decode_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.bytes().await.map_err(Error::Transport)?;
        serde_json::from_slice(&body).map_err(Error::decoding)
    }

    /// Decode the response as bytes or a document record, matching the
    /// caller's `json_response` flag.
    async fn decode_output(response: reqwest::Response, json_response: bool) -> Result<PdfOutput> {
        if json_response {
            return Ok(PdfOutput::Document(Self::decode_json(response).await?));
        }
        let bytes = response.bytes().await.map_err(Error::Transport)?;
        Ok(PdfOutput::File(bytes))
    }
}
