//! Headless platform layer: wires the pure session core to the scoring
//! engine, loads settings and sets up logging.
mod effects;
pub mod logging;
mod runtime;
pub mod settings;

pub use effects::EffectRunner;
pub use logging::{LogDestination, DEFAULT_LOG_FILENAME};
pub use runtime::{LaunchError, LaunchOptions, SessionRuntime};
pub use settings::{load_settings, parse_settings, SettingsError, DEFAULT_SETTINGS_FILENAME};
