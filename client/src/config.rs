use crate::error::{ClientError, Result};
use reqwest::Url;
use std::env;

pub const BASE_URL_VAR: &str = "RAG_BASE_URL";

/// Location of the upload and ask endpoints.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut normalized = base_url.trim().to_string();
        // Url::join drops the last path segment unless it ends with a slash.
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let base_url = Url::parse(&normalized)
            .map_err(|e| ClientError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "base URL must be an http(s) address, got '{}'",
                base_url
            )));
        }

        Ok(Self { base_url })
    }

    pub fn from_env() -> Result<Self> {
        let base_url = env::var(BASE_URL_VAR).map_err(|_| {
            ClientError::Config(format!("{} environment variable not set", BASE_URL_VAR))
        })?;

        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::Config(format!("invalid endpoint path '{}': {}", path, e)))
    }
}
