//! Uploaded résumé documents and their extraction status

use crate::processing::candidate::RawCandidateAttributes;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Uploading,
    Processing,
    Ready,
    Error,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentStatus::Uploading => write!(f, "uploading"),
            DocumentStatus::Processing => write!(f, "processing"),
            DocumentStatus::Ready => write!(f, "ready"),
            DocumentStatus::Error => write!(f, "error"),
        }
    }
}

/// One uploaded résumé as reported by the extraction step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDocument {
    pub id: String,
    #[serde(default)]
    pub file_name: String,
    pub status: DocumentStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub attributes: Option<RawCandidateAttributes>,
}

/// A document left out of scoring, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedDocument {
    pub id: String,
    pub file_name: String,
    pub status: DocumentStatus,
    pub reason: String,
}

impl CandidateDocument {
    /// Attributes of a document that finished extraction.
    pub fn ready_attributes(&self) -> Option<&RawCandidateAttributes> {
        match self.status {
            DocumentStatus::Ready => self.attributes.as_ref(),
            _ => None,
        }
    }

    fn skip_reason(&self) -> String {
        match (self.status, &self.error_message) {
            (DocumentStatus::Error, Some(message)) => format!("extraction failed: {}", message),
            (DocumentStatus::Error, None) => "extraction failed".to_string(),
            (DocumentStatus::Ready, _) => "no extracted attributes".to_string(),
            (status, _) => format!("document is still {}", status),
        }
    }
}

/// Split documents into those ready for scoring and those skipped.
pub fn partition_ready(
    documents: &[CandidateDocument],
) -> (Vec<(&CandidateDocument, &RawCandidateAttributes)>, Vec<SkippedDocument>) {
    let mut ready = Vec::new();
    let mut skipped = Vec::new();

    for document in documents {
        match document.ready_attributes() {
            Some(attributes) => ready.push((document, attributes)),
            None => skipped.push(SkippedDocument {
                id: document.id.clone(),
                file_name: document.file_name.clone(),
                status: document.status,
                reason: document.skip_reason(),
            }),
        }
    }

    (ready, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(id: &str, status: DocumentStatus, with_attributes: bool) -> CandidateDocument {
        CandidateDocument {
            id: id.to_string(),
            file_name: format!("{}.pdf", id),
            status,
            error_message: None,
            attributes: with_attributes.then(RawCandidateAttributes::default),
        }
    }

    #[test]
    fn test_only_ready_documents_with_attributes_are_kept() {
        let mut failed = document("d3", DocumentStatus::Error, false);
        failed.error_message = Some("OCR timeout".to_string());

        let documents = vec![
            document("d1", DocumentStatus::Ready, true),
            document("d2", DocumentStatus::Processing, true),
            failed,
            document("d4", DocumentStatus::Ready, false),
            document("d5", DocumentStatus::Uploading, false),
        ];

        let (ready, skipped) = partition_ready(&documents);
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].0.id, "d1");

        let reasons: Vec<(&str, &str)> = skipped
            .iter()
            .map(|s| (s.id.as_str(), s.reason.as_str()))
            .collect();
        assert_eq!(
            reasons,
            vec![
                ("d2", "document is still processing"),
                ("d3", "extraction failed: OCR timeout"),
                ("d4", "no extracted attributes"),
                ("d5", "document is still uploading"),
            ]
        );
    }

    #[test]
    fn test_status_wire_names() {
        let doc: CandidateDocument =
            serde_json::from_str(r#"{"id":"x","status":"error","errorMessage":"bad pdf"}"#).unwrap();
        assert_eq!(doc.status, DocumentStatus::Error);
        assert_eq!(doc.error_message.as_deref(), Some("bad pdf"));
        assert!(doc.ready_attributes().is_none());
    }
}
