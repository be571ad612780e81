use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/upload/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Absolute URL of the upload endpoint. Validated when the client is built.
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// `None` leaves the request unbounded.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
    pub job_description_field: String,
    pub files_field: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_response_bytes: 16 * 1024 * 1024,
            job_description_field: "job_description".to_string(),
            files_field: "files".to_string(),
        }
    }
}

impl ClientSettings {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
