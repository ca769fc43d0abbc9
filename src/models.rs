use std::sync::Arc;

use crate::config::Config;
use crate::llm::Summarizer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub summarizer: Arc<dyn Summarizer>,
}

/// One multipart upload: the declared filename plus the raw bytes.
/// Consumed once by the extractor and dropped with the request.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub content: bytes::Bytes,
}

/// Uniform response wrapper returned for every call to the upload endpoint.
/// A response is either a success carrying the summary, or a failure carrying
/// a message with no payload; never both.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ResponseEnvelope {
    pub code: u16,
    pub msg: String,
    pub data: Option<String>,
}

impl ResponseEnvelope {
    pub fn success(data: impl Into<String>) -> Self {
        Self {
            code: 200,
            msg: "Success".to_string(),
            data: Some(data.into()),
        }
    }

    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            code: 400,
            msg: msg.into(),
            data: None,
        }
    }
}

impl From<AppError> for ResponseEnvelope {
    fn from(err: AppError) -> Self {
        Self::fail(err.to_string())
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Per-request error taxonomy. Every variant is caught at the endpoint
/// boundary and converted into a Fail envelope; none of them crash the
/// process.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Unable to read document: {0}")]
    Parse(String),

    #[error("Summarization failed: {0}")]
    Remote(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
