use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use ranker_core::{SubmissionRequest, SubmissionSeq};
use ranker_logging::ranker_debug;

use crate::{ClientSettings, EngineError, EngineEvent, ReqwestScorer, Scorer};

enum EngineCommand {
    Submit {
        seq: SubmissionSeq,
        request: SubmissionRequest,
    },
}

/// Runs scoring calls on a background runtime and reports completions.
///
/// There is no cancellation: every submitted request eventually produces
/// exactly one [`EngineEvent::SubmissionCompleted`]. Dropping the handle
/// stops the worker thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let scorer = ReqwestScorer::new(settings)?;
        Self::with_scorer(Arc::new(scorer))
    }

    pub fn with_scorer(scorer: Arc<dyn Scorer>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("ranker-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let scorer = scorer.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(scorer.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, seq: SubmissionSeq, request: SubmissionRequest) -> Result<(), EngineError> {
        self.cmd_tx
            .send(EngineCommand::Submit { seq, request })
            .map_err(|_| EngineError::Disconnected)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    scorer: &dyn Scorer,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit { seq, request } => {
            let result = scorer.score(&request).await;
            ranker_debug!("Submission {} completed (ok={})", seq, result.is_ok());
            let _ = event_tx.send(EngineEvent::SubmissionCompleted { seq, result });
        }
    }
}
