use anyhow::Result;
use taskboard_core::{
    CategorySet, ClockIdSource, Draft, IdSource, Intent, Outcome, Snapshot, Task, TaskCounts, TaskStore,
};
use tracing::{debug, info};

use crate::config::BoardConfig;

/// Owns the task store for one presentation session and logs every transition.
#[derive(Debug)]
pub struct Board<I: IdSource = ClockIdSource> {
    store: TaskStore<I>,
}

impl Board {
    /// Build an empty board from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured category set is invalid.
    pub fn new(config: &BoardConfig) -> Result<Self> {
        Self::with_id_source(config, ClockIdSource::new())
    }
}

impl<I: IdSource> Board<I> {
    /// Build an empty board with a caller-provided id source.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured category set is invalid.
    pub fn with_id_source(config: &BoardConfig, ids: I) -> Result<Self> {
        let store = TaskStore::with_id_source(config.category_set()?, ids).with_options(config.store_options());
        info!(
            categories = store.categories().len(),
            cancel_edit_on_delete = store.options().cancel_edit_on_delete,
            "board ready"
        );
        Ok(Self { store })
    }

    /// Apply an intent and log the outcome.
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        let kind = intent_name(&intent);
        let staging = matches!(intent, Intent::StageCreate(_) | Intent::StageEdit(_));
        let outcome = self.store.dispatch(intent);
        match &outcome {
            Outcome::Created(id) => info!(%id, total = self.store.tasks().len(), "task created"),
            Outcome::Applied if staging => debug!(intent = kind, "staged"),
            Outcome::Applied => info!(intent = kind, "applied"),
            Outcome::Unchanged => debug!(intent = kind, "unchanged"),
            Outcome::NotFound(id) => debug!(intent = kind, %id, "target not found"),
            Outcome::Rejected(reason) => debug!(intent = kind, ?reason, "rejected"),
        }
        outcome
    }

    /// Tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Add-form staging record.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        self.store.draft()
    }

    /// Task open in the edit overlay.
    #[must_use]
    pub const fn editing(&self) -> Option<&Task> {
        self.store.editing()
    }

    /// Configured categories.
    #[must_use]
    pub const fn categories(&self) -> &CategorySet {
        self.store.categories()
    }

    /// Total and completed counts.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        self.store.counts()
    }

    /// Clone of the renderable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }
}

const fn intent_name(intent: &Intent) -> &'static str {
    match intent {
        Intent::StageCreate(_) => "stage_create",
        Intent::CommitCreate => "commit_create",
        Intent::Delete(_) => "delete_task",
        Intent::ToggleCompletion(_) => "toggle_completion",
        Intent::BeginEdit(_) => "begin_edit",
        Intent::StageEdit(_) => "stage_edit",
        Intent::CancelEdit => "cancel_edit",
        Intent::CommitEdit => "commit_edit",
    }
}
