//! Ranker engine: HTTP boundary to the scoring service and effect execution.
mod engine;
mod response;
mod scorer;
mod settings;
mod types;

pub use engine::EngineHandle;
pub use response::{failure_message_from_body, interpret_response};
pub use scorer::{ReqwestScorer, Scorer};
pub use settings::ClientSettings;
pub use types::{EngineError, EngineEvent, ScoreError, ScoreErrorKind};
