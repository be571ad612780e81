use futures_util::StreamExt;
use ranker_core::{Results, SubmissionRequest, PDF_MEDIA_TYPE};
use ranker_logging::{ranker_debug, ranker_info, ranker_warn};
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::types::{TIMEOUT_MESSAGE, UNREACHABLE_MESSAGE};
use crate::{interpret_response, ClientSettings, ScoreError, ScoreErrorKind};

#[async_trait::async_trait]
pub trait Scorer: Send + Sync {
    async fn score(&self, request: &SubmissionRequest) -> Result<Results, ScoreError>;
}

/// Multipart client for the scoring service's upload endpoint.
#[derive(Debug, Clone)]
pub struct ReqwestScorer {
    settings: ClientSettings,
    endpoint: Url,
    client: reqwest::Client,
}

impl ReqwestScorer {
    pub fn new(settings: ClientSettings) -> Result<Self, ScoreError> {
        let endpoint = Url::parse(&settings.endpoint).map_err(|err| {
            ScoreError::new(
                ScoreErrorKind::InvalidRequest,
                format!("invalid scoring endpoint {:?}: {err}", settings.endpoint),
            )
        })?;

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ScoreError::new(ScoreErrorKind::InvalidRequest, err.to_string()))?;

        Ok(Self {
            settings,
            endpoint,
            client,
        })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn build_form(&self, request: &SubmissionRequest) -> Result<Form, ScoreError> {
        let mut form = Form::new().text(
            self.settings.job_description_field.clone(),
            request.job_description.clone(),
        );
        for file in &request.files {
            let part = Part::stream_with_length(file.content.clone(), file.byte_size)
                .file_name(file.name.clone())
                .mime_str(PDF_MEDIA_TYPE)
                .map_err(|err| ScoreError::new(ScoreErrorKind::InvalidRequest, err.to_string()))?;
            form = form.part(self.settings.files_field.clone(), part);
        }
        Ok(form)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ScoreError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl Scorer for ReqwestScorer {
    async fn score(&self, request: &SubmissionRequest) -> Result<Results, ScoreError> {
        let form = self.build_form(request)?;
        ranker_info!(
            "Submitting {} file(s), {} bytes, to {}",
            request.files.len(),
            request.total_bytes(),
            self.endpoint
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = self.read_body(response).await?;
        ranker_debug!("Scoring service answered {} with {} bytes", status, body.len());

        let result = interpret_response(status.as_u16(), &body);
        if let Err(err) = &result {
            ranker_warn!("Scoring failed: {}", err);
        }
        result
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> ScoreError {
    ScoreError::new(
        ScoreErrorKind::TooLarge { max_bytes, actual },
        "The scoring service response was too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ScoreError {
    ranker_warn!("Request to scoring service failed: {}", err);
    if err.is_timeout() {
        return ScoreError::new(ScoreErrorKind::Timeout, TIMEOUT_MESSAGE);
    }
    ScoreError::new(ScoreErrorKind::Network, UNREACHABLE_MESSAGE)
}
