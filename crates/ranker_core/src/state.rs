use crate::view_model::SessionViewModel;
use crate::{FileSelection, Orchestrator, PreviewController};

/// Everything one user session owns. Each component only sees its own slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub(crate) job_description: String,
    pub(crate) selection: FileSelection,
    pub(crate) orchestrator: Orchestrator,
    pub(crate) preview: PreviewController,
    dirty: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn selection(&self) -> &FileSelection {
        &self.selection
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub fn preview(&self) -> &PreviewController {
        &self.preview
    }

    pub fn view(&self) -> SessionViewModel {
        SessionViewModel::build(self, self.dirty)
    }

    /// Returns and clears the dirty flag; callers re-render when it was set.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_inputs(&mut self) {
        self.job_description.clear();
        self.selection = FileSelection::empty();
        self.orchestrator.reset();
    }
}
