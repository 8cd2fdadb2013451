use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::*;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};

/// HTTP access to the remote upload and ask endpoints.
pub struct RagApiService {
    client: Client,
    config: ClientConfig,
}

impl RagApiService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends the file as the `file` field of a multipart form. The status is
    /// returned as-is; the response body is not read.
    pub async fn upload(&self, file: &SelectedFile) -> Result<StatusCode> {
        let url = self.config.endpoint("upload")?;
        log::info!("Uploading {} ({} bytes) to {}", file.name, file.len(), url);

        let form = Form::new().part(
            "file",
            Part::bytes(file.bytes.clone()).file_name(file.name.clone()),
        );

        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status();

        log::info!("Upload of {} finished with status {}", file.name, status);
        Ok(status)
    }

    pub async fn ask(&self, question: &str) -> Result<AskResponse> {
        let url = self.config.endpoint("ask")?;
        log::info!("Asking {}", url);
        log::debug!("Question: {}", question);

        let response = self
            .client
            .post(url)
            .json(&AskRequest { question })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status,
                message: error_message(status, &error_text),
            });
        }

        let body = response.bytes().await?;
        let ask_response: AskResponse = serde_json::from_slice(&body)?;

        log::info!("Received answer with {} sources", ask_response.sources.len());
        Ok(ask_response)
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}
