//! Client settings loaded from an optional RON file.
//!
//! Every field may be omitted; omitted fields keep their defaults. Example:
//!
//! ```ron
//! (
//!     endpoint: "http://127.0.0.1:8000/api/upload/",
//!     request_timeout_ms: 30000,
//! )
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ranker_engine::ClientSettings;
use ranker_logging::ranker_info;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SETTINGS_FILENAME: &str = "ranker.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    Endpoint { endpoint: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    endpoint: String,
    connect_timeout_ms: u64,
    /// Zero leaves requests unbounded.
    request_timeout_ms: u64,
    max_response_bytes: u64,
    job_description_field: String,
    files_field: String,
}

impl Default for SettingsFile {
    fn default() -> Self {
        let defaults = ClientSettings::default();
        Self {
            endpoint: defaults.endpoint,
            connect_timeout_ms: millis(defaults.connect_timeout),
            request_timeout_ms: defaults.request_timeout.map_or(0, millis),
            max_response_bytes: defaults.max_response_bytes,
            job_description_field: defaults.job_description_field,
            files_field: defaults.files_field,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Loads settings from `path`; a missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<ClientSettings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            ranker_info!("No settings file at {:?}; using defaults", path);
            return Ok(ClientSettings::default());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let settings = parse_settings(&text)?;
    ranker_info!("Loaded settings from {:?}", path);
    Ok(settings)
}

pub fn parse_settings(text: &str) -> Result<ClientSettings, SettingsError> {
    let file: SettingsFile = ron::from_str(text)?;

    let endpoint = url::Url::parse(&file.endpoint).map_err(|err| SettingsError::Endpoint {
        endpoint: file.endpoint.clone(),
        reason: err.to_string(),
    })?;
    if !matches!(endpoint.scheme(), "http" | "https") {
        return Err(SettingsError::Endpoint {
            endpoint: file.endpoint,
            reason: "scheme must be http or https".to_string(),
        });
    }

    Ok(ClientSettings {
        endpoint: file.endpoint,
        connect_timeout: Duration::from_millis(file.connect_timeout_ms),
        request_timeout: (file.request_timeout_ms > 0)
            .then(|| Duration::from_millis(file.request_timeout_ms)),
        max_response_bytes: file.max_response_bytes,
        job_description_field: file.job_description_field,
        files_field: file.files_field,
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ranker_engine::ClientSettings;

    use super::{parse_settings, SettingsError};

    #[test]
    fn empty_tuple_keeps_defaults() {
        assert_eq!(parse_settings("()").unwrap(), ClientSettings::default());
    }

    #[test]
    fn timeout_and_fields_override_defaults() {
        let settings = parse_settings(
            r#"(
                endpoint: "https://ranker.example.com/api/upload/",
                request_timeout_ms: 1500,
                files_field: "resumes",
            )"#,
        )
        .unwrap();
        assert_eq!(settings.endpoint, "https://ranker.example.com/api/upload/");
        assert_eq!(settings.request_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(settings.files_field, "resumes");
        assert_eq!(settings.job_description_field, "job_description");
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let err = parse_settings(r#"(endpoint: "ftp://example.com/upload")"#).unwrap_err();
        assert!(matches!(err, SettingsError::Endpoint { .. }));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_settings("(retries: 3)").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
