use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use log::LevelFilter;
use ranker_core::{update, Msg, Session, SessionViewModel, SubmissionState};
use ranker_engine::{ClientSettings, EngineError, EngineHandle};
use ranker_logging::{ranker_debug, ranker_info};
use thiserror::Error;

use crate::logging::{self, LogDestination};
use crate::settings::{load_settings, SettingsError, DEFAULT_SETTINGS_FILENAME};
use crate::EffectRunner;

/// Everything needed to start a session from the outside world.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub settings_path: PathBuf,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILENAME),
            log_destination: LogDestination::default(),
            log_level: ranker_logging::default_level(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Owns one session and drives it: user messages in, effects out, engine
/// completions back in. All transitions happen on the caller's thread.
pub struct SessionRuntime {
    state: Session,
    effects: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl SessionRuntime {
    /// Installs the logger, reads the settings file and starts the engine.
    pub fn launch(options: &LaunchOptions) -> Result<Self, LaunchError> {
        logging::initialize(&options.log_destination, options.log_level);
        let settings = load_settings(&options.settings_path)?;
        ranker_info!("Scoring endpoint: {}", settings.endpoint);
        Ok(Self::new(settings)?)
    }

    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            state: Session::new(),
            effects: EffectRunner::new(engine),
            msg_tx,
            msg_rx,
        }
    }

    /// Sender for UI event sources; messages are applied on the next pump.
    pub fn sender(&self) -> mpsc::Sender<Msg> {
        self.msg_tx.clone()
    }

    pub fn session(&self) -> &Session {
        &self.state
    }

    pub fn view(&self) -> SessionViewModel {
        self.state.view()
    }

    /// Applies one message. Returns the new view when something visible changed.
    pub fn dispatch(&mut self, msg: Msg) -> Option<SessionViewModel> {
        if let Msg::ResponseArrived { seq, .. } = &msg {
            let current = matches!(
                self.state.orchestrator().state(),
                SubmissionState::InFlight { seq: s } if s == seq
            );
            if !current {
                ranker_debug!("Discarding stale response for submission {}", seq);
            }
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = was_dirty.then(|| state.view());
        self.state = state;
        self.effects.run(effects);
        view
    }

    /// Applies every message that is ready without blocking. Returns the
    /// latest view if any of them changed it.
    pub fn pump(&mut self) -> Option<SessionViewModel> {
        let mut latest = None;
        loop {
            let next = match self.msg_rx.try_recv() {
                Ok(msg) => Some(msg),
                Err(_) => self.effects.poll(),
            };
            let Some(msg) = next else {
                break;
            };
            if let Some(view) = self.dispatch(msg) {
                latest = Some(view);
            }
        }
        latest
    }

    /// Blocks until no submission is in flight or `timeout` elapses, then
    /// returns the current view.
    pub fn settle(&mut self, timeout: Duration) -> SessionViewModel {
        let deadline = Instant::now() + timeout;
        self.pump();
        while self.state.orchestrator().is_in_flight() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            if let Some(msg) = self.effects.wait(remaining) {
                self.dispatch(msg);
            }
            self.pump();
        }
        self.view()
    }

    /// User-facing alerts raised since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        self.effects.take_alerts()
    }
}
