use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A file picked by the user, held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Self::new(name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub sources: Vec<SourceCitation>,
}

/// Where part of an answer came from: the indexed file and, when the server
/// reports it, the chunk of that file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSource")]
pub struct SourceCitation {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk: Option<u64>,
}

impl SourceCitation {
    pub fn new(filename: impl Into<String>, chunk: u64) -> Self {
        Self {
            filename: filename.into(),
            chunk: Some(chunk),
        }
    }
}

impl fmt::Display for SourceCitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chunk {
            Some(chunk) => write!(f, "{} (chunk {})", self.filename, chunk),
            None => write!(f, "{}", self.filename),
        }
    }
}

// Some deployments send plain filenames instead of {filename, chunk} objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSource {
    Named(String),
    Chunked {
        filename: String,
        #[serde(default)]
        chunk: Option<u64>,
    },
}

impl From<RawSource> for SourceCitation {
    fn from(raw: RawSource) -> Self {
        match raw {
            RawSource::Named(filename) => Self {
                filename,
                chunk: None,
            },
            RawSource::Chunked { filename, chunk } => Self { filename, chunk },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chunked_sources() {
        let body = r#"{"answer":"Paris","sources":[{"filename":"doc1.txt","chunk":2}]}"#;
        let response: AskResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.answer, "Paris");
        assert_eq!(response.sources, vec![SourceCitation::new("doc1.txt", 2)]);
    }

    #[test]
    fn test_parse_bare_filename_sources() {
        let body = r#"{"answer":"42","sources":["guide.pdf",{"filename":"notes.txt","chunk":0}]}"#;
        let response: AskResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.sources[0].filename, "guide.pdf");
        assert_eq!(response.sources[0].chunk, None);
        assert_eq!(response.sources[1].chunk, Some(0));
    }

    #[test]
    fn test_missing_sources_is_an_error() {
        let result = serde_json::from_str::<AskResponse>(r#"{"answer":"Paris"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_citation_display() {
        assert_eq!(SourceCitation::new("doc1.txt", 2).to_string(), "doc1.txt (chunk 2)");

        let bare = SourceCitation {
            filename: "guide.pdf".to_string(),
            chunk: None,
        };
        assert_eq!(bare.to_string(), "guide.pdf");
    }

    #[test]
    fn test_ask_request_shape() {
        let json = serde_json::to_value(AskRequest { question: "Where?" }).unwrap();
        assert_eq!(json, serde_json::json!({ "question": "Where?" }));
    }
}
