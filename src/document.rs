//! Response types returned by the PDFGate API

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Processing status of a document job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Completed,
    Processing,
    Expired,
    Failed,
}

/// How a document was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    FromHtml,
    Flattened,
    Watermarked,
    Encrypted,
    Compressed,
    Signed,
}

/// Metadata record for a server-side document.
///
/// The record is a point-in-time copy owned by the remote service; its
/// `status` can change on the server the moment after it is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Server-assigned document identifier
    pub id: String,
    /// Processing status at the time of the response
    pub status: DocumentStatus,
    /// How the document was produced
    #[serde(rename = "documentType", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    /// Time-limited pre-signed download URL for the file content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// File size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Caller-defined metadata stored with the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// ID of the document this one was derived from, for transform outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Expiry timestamp, after which the file is no longer downloadable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Successful result of an operation that can return either the raw file
/// or the document record, selected by the `json_response` parameter.
///
/// Exactly one of the two variants is produced per call.
#[derive(Debug, Clone)]
pub enum PdfOutput {
    /// Raw PDF bytes (`json_response: false`)
    File(Bytes),
    /// Document metadata record (`json_response: true`)
    Document(Document),
}

impl PdfOutput {
    /// The raw bytes, if this output is a file.
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            PdfOutput::File(bytes) => Some(bytes),
            PdfOutput::Document(_) => None,
        }
    }

    /// The metadata record, if this output is a document.
    pub fn into_document(self) -> Option<Document> {
        match self {
            PdfOutput::File(_) => None,
            PdfOutput::Document(document) => Some(document),
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            PdfOutput::File(_) => None,
            PdfOutput::Document(document) => Some(document),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, PdfOutput::File(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_document_deserializes_from_camel_case() {
        let json = json!({
            "id": "6642381c5c61",
            "status": "completed",
            "documentType": "from_html",
            "fileUrl": "https://api.pdfgate.com/file/open/6642381c5c61",
            "size": 1620006,
            "createdAt": "2024-05-13T18:54:52.000Z",
            "expiresAt": "2024-05-14T18:54:52.000Z"
        });

        let document: Document = serde_json::from_value(json).unwrap();
        assert_eq!(document.id, "6642381c5c61");
        assert_eq!(document.status, DocumentStatus::Completed);
        assert_eq!(document.document_type, Some(DocumentType::FromHtml));
        assert_eq!(
            document.file_url.as_deref(),
            Some("https://api.pdfgate.com/file/open/6642381c5c61")
        );
        assert_eq!(document.size, Some(1620006));
        assert_eq!(document.derived_from, None);
        assert_eq!(
            document.created_at.to_rfc3339(),
            "2024-05-13T18:54:52+00:00"
        );
    }

    #[test]
    fn test_document_optional_fields_default() {
        let json = json!({
            "id": "6642381c5c61",
            "status": "processing",
            "createdAt": "2024-05-13T18:54:52Z"
        });

        let document: Document = serde_json::from_value(json).unwrap();
        assert_eq!(document.status, DocumentStatus::Processing);
        assert_eq!(document.document_type, None);
        assert_eq!(document.file_url, None);
        assert_eq!(document.size, None);
        assert_eq!(document.expires_at, None);
    }

    #[test]
    fn test_document_rejects_unknown_status() {
        let json = json!({
            "id": "6642381c5c61",
            "status": "uploading",
            "createdAt": "2024-05-13T18:54:52Z"
        });

        assert!(serde_json::from_value::<Document>(json).is_err());
    }

    #[test]
    fn test_derived_from_round_trip() {
        let json = json!({
            "id": "a1b2c3",
            "status": "completed",
            "documentType": "flattened",
            "derivedFrom": "6642381c5c61",
            "createdAt": "2024-05-13T18:54:52Z"
        });

        let document: Document = serde_json::from_value(json).unwrap();
        assert_eq!(document.document_type, Some(DocumentType::Flattened));
        assert_eq!(document.derived_from.as_deref(), Some("6642381c5c61"));
    }

    #[test]
    fn test_output_accessors() {
        let file = PdfOutput::File(Bytes::from_static(b"%PDF-1.4"));
        assert!(file.is_file());
        assert!(file.as_document().is_none());
        assert_eq!(
            file.into_bytes().unwrap(),
            Bytes::from_static(b"%PDF-1.4")
        );

        let json = json!({
            "id": "6642381c5c61",
            "status": "completed",
            "createdAt": "2024-05-13T18:54:52Z"
        });
        let document: Document = serde_json::from_value(json).unwrap();
        let output = PdfOutput::Document(document.clone());
        assert!(!output.is_file());
        assert_eq!(output.into_document().unwrap(), document);
    }
}
