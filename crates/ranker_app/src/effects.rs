use std::collections::VecDeque;
use std::time::Duration;

use ranker_core::{Effect, FailureKind, Msg, SubmissionFailure};
use ranker_engine::{EngineEvent, EngineHandle};
use ranker_logging::{ranker_debug, ranker_error, ranker_info};

/// Executes core effects against the engine and turns engine events back
/// into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    /// Messages produced locally, delivered before engine events.
    local: VecDeque<Msg>,
    alerts: Vec<String>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            local: VecDeque::new(),
            alerts: Vec::new(),
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit { seq, request } => {
                    ranker_info!(
                        "Submit seq={} files={} bytes={}",
                        seq,
                        request.files.len(),
                        request.total_bytes()
                    );
                    if let Err(err) = self.engine.submit(seq, request) {
                        ranker_error!("Submission {} could not be dispatched: {}", seq, err);
                        self.local.push_back(Msg::ResponseArrived {
                            seq,
                            outcome: Err(SubmissionFailure::new(
                                FailureKind::Transport,
                                "Could not reach the scoring service",
                            )),
                        });
                    }
                }
                Effect::RevealResults => {
                    // Headless: nothing to scroll.
                    ranker_debug!("Results ready");
                }
                Effect::Alert { message } => {
                    ranker_info!("Alert: {}", message);
                    self.alerts.push(message);
                }
            }
        }
    }

    /// Next pending message without blocking.
    pub fn poll(&mut self) -> Option<Msg> {
        self.local
            .pop_front()
            .or_else(|| self.engine.try_recv().map(event_to_msg))
    }

    /// Like [`poll`](Self::poll) but waits up to `timeout` for the engine.
    pub fn wait(&mut self, timeout: Duration) -> Option<Msg> {
        self.local
            .pop_front()
            .or_else(|| self.engine.recv_timeout(timeout).map(event_to_msg))
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SubmissionCompleted { seq, result } => Msg::ResponseArrived {
            seq,
            outcome: result.map_err(SubmissionFailure::from),
        },
    }
}
