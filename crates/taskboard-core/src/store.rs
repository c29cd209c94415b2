use serde::Serialize;

use crate::category::{Category, CategorySet};
use crate::id::{ClockIdSource, IdSource, TaskId};

/// A single to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Identity key, unique within the store.
    pub id: TaskId,
    /// Title shown on the card.
    pub title: String,
    /// Free-form description (may be empty).
    pub description: String,
    /// Member of the store's configured category set.
    pub category: Category,
    /// Completion flag.
    pub completed: bool,
}

/// Partial field update used by the staging operations.
///
/// `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement category label.
    pub category: Option<String>,
}

impl TaskFields {
    /// Only the title.
    #[must_use]
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    /// Only the description.
    #[must_use]
    pub fn description(value: impl Into<String>) -> Self {
        Self {
            description: Some(value.into()),
            ..Self::default()
        }
    }

    /// Only the category.
    #[must_use]
    pub fn category(value: impl Into<String>) -> Self {
        Self {
            category: Some(value.into()),
            ..Self::default()
        }
    }

    /// True when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.category.is_none()
    }
}

/// Staging record behind the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    /// Title as typed, untrimmed.
    pub title: String,
    /// Description as typed.
    pub description: String,
    /// Selected category label, empty when nothing is selected.
    pub category: String,
}

impl Draft {
    fn apply(&mut self, fields: TaskFields) {
        if let Some(title) = fields.title {
            self.title = title;
        }
        if let Some(description) = fields.description {
            self.description = description;
        }
        if let Some(category) = fields.category {
            self.category = category;
        }
    }

    /// Check whether the draft may be committed against `categories`.
    ///
    /// # Errors
    ///
    /// Returns the first failing precondition.
    pub fn check(&self, categories: &CategorySet) -> Result<Category, Rejection> {
        if self.title.trim().is_empty() {
            return Err(Rejection::BlankTitle);
        }
        if self.category.is_empty() {
            return Err(Rejection::MissingCategory);
        }
        categories
            .find(&self.category)
            .cloned()
            .ok_or_else(|| Rejection::UnknownCategory(self.category.clone()))
    }
}

/// Behavioural switches for the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Clear the editing slot when the task it points at is deleted.
    pub cancel_edit_on_delete: bool,
}

/// Why a commit was silently skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Draft title is empty after trimming.
    BlankTitle,
    /// No category selected.
    MissingCategory,
    /// Category label is not part of the configured set.
    UnknownCategory(String),
    /// `commit_edit` without an open edit.
    NotEditing,
}

/// Result of a store operation. Never an error: the store is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed.
    Applied,
    /// A task was appended.
    Created(TaskId),
    /// Operation had nothing to do.
    Unchanged,
    /// The targeted id is not in the list.
    NotFound(TaskId),
    /// A commit precondition failed; state kept as-is.
    Rejected(Rejection),
}

impl Outcome {
    /// Whether the task list or a staging slot was modified.
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Applied | Self::Created(_))
    }
}

/// Intent raised by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Update draft fields.
    StageCreate(TaskFields),
    /// Validate the draft and append it.
    CommitCreate,
    /// Remove a task.
    Delete(TaskId),
    /// Flip a task's completion flag.
    ToggleCompletion(TaskId),
    /// Open a task in the editing slot.
    BeginEdit(TaskId),
    /// Update fields in the editing slot.
    StageEdit(TaskFields),
    /// Drop the editing slot.
    CancelEdit,
    /// Write the editing slot back into the list.
    CommitEdit,
}

/// Completion summary of the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

/// Cloned view of the store for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Tasks in creation order.
    pub tasks: Vec<Task>,
    /// Add-form staging record.
    pub draft: Draft,
    /// Edit-overlay staging record.
    pub editing: Option<Task>,
}

/// Authoritative in-memory task list plus the two staging slots.
#[derive(Debug, Clone)]
pub struct TaskStore<I: IdSource = ClockIdSource> {
    tasks: Vec<Task>,
    draft: Draft,
    editing: Option<Task>,
    categories: CategorySet,
    options: StoreOptions,
    ids: I,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(CategorySet::default())
    }
}

impl TaskStore {
    /// Empty store issuing wall-clock ids.
    #[must_use]
    pub fn new(categories: CategorySet) -> Self {
        Self::with_id_source(categories, ClockIdSource::new())
    }
}

impl<I: IdSource> TaskStore<I> {
    /// Empty store with a caller-provided id source.
    #[must_use]
    pub fn with_id_source(categories: CategorySet, ids: I) -> Self {
        Self {
            tasks: Vec::new(),
            draft: Draft::default(),
            editing: None,
            categories,
            options: StoreOptions::default(),
            ids,
        }
    }

    /// Replace the behavioural options.
    #[must_use]
    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Add-form staging record.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Task currently open for editing.
    #[must_use]
    pub const fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    /// Configured category set.
    #[must_use]
    pub const fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Active options.
    #[must_use]
    pub const fn options(&self) -> StoreOptions {
        self.options
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// True when the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Total and completed counts.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        TaskCounts {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|task| task.completed).count(),
        }
    }

    /// Clone the renderable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            draft: self.draft.clone(),
            editing: self.editing.clone(),
        }
    }

    /// Apply an intent in place.
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::StageCreate(fields) => self.stage_create(fields),
            Intent::CommitCreate => self.commit_create(),
            Intent::Delete(id) => self.delete_task(id),
            Intent::ToggleCompletion(id) => self.toggle_completion(id),
            Intent::BeginEdit(id) => self.begin_edit(id),
            Intent::StageEdit(fields) => self.stage_edit(fields),
            Intent::CancelEdit => self.cancel_edit(),
            Intent::CommitEdit => self.commit_edit(),
        }
    }

    /// Reducer form: consume the current state and return the next one.
    #[must_use]
    pub fn reduce(mut self, intent: Intent) -> (Self, Outcome) {
        let outcome = self.dispatch(intent);
        (self, outcome)
    }

    /// Update draft fields; never validates.
    pub fn stage_create(&mut self, fields: TaskFields) -> Outcome {
        if fields.is_empty() {
            return Outcome::Unchanged;
        }
        self.draft.apply(fields);
        Outcome::Applied
    }

    /// Append the draft as a new task and reset the draft.
    ///
    /// A draft with a blank title or without a known category is kept as-is.
    pub fn commit_create(&mut self) -> Outcome {
        let category = match self.draft.check(&self.categories) {
            Ok(category) => category,
            Err(rejection) => return Outcome::Rejected(rejection),
        };
        let draft = std::mem::take(&mut self.draft);
        let id = self.fresh_id();
        self.tasks.push(Task {
            id,
            title: draft.title,
            description: draft.description,
            category,
            completed: false,
        });
        Outcome::Created(id)
    }

    /// Remove the task with `id`; idempotent.
    pub fn delete_task(&mut self, id: TaskId) -> Outcome {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Outcome::NotFound(id);
        }
        if self.options.cancel_edit_on_delete && self.editing.as_ref().is_some_and(|task| task.id == id) {
            self.editing = None;
        }
        Outcome::Applied
    }

    /// Flip `completed` on the task with `id`.
    pub fn toggle_completion(&mut self, id: TaskId) -> Outcome {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                Outcome::Applied
            }
            None => Outcome::NotFound(id),
        }
    }

    /// Copy the task with `id` into the editing slot, replacing any open edit.
    pub fn begin_edit(&mut self, id: TaskId) -> Outcome {
        match self.get(id) {
            Some(task) => {
                self.editing = Some(task.clone());
                Outcome::Applied
            }
            None => Outcome::NotFound(id),
        }
    }

    /// Update fields of the open edit. The task list is not touched.
    ///
    /// A category label outside the configured set leaves the category unchanged.
    pub fn stage_edit(&mut self, fields: TaskFields) -> Outcome {
        let Some(editing) = self.editing.as_mut() else {
            return Outcome::Unchanged;
        };
        let mut changed = false;
        if let Some(title) = fields.title {
            editing.title = title;
            changed = true;
        }
        if let Some(description) = fields.description {
            editing.description = description;
            changed = true;
        }
        if let Some(label) = fields.category
            && let Some(category) = self.categories.find(&label)
        {
            editing.category = category.clone();
            changed = true;
        }
        if changed { Outcome::Applied } else { Outcome::Unchanged }
    }

    /// Drop the open edit.
    pub fn cancel_edit(&mut self) -> Outcome {
        if self.editing.take().is_some() {
            Outcome::Applied
        } else {
            Outcome::Unchanged
        }
    }

    /// Replace the list entry matching the open edit and clear the slot.
    ///
    /// The slot is cleared even when the task has since been deleted.
    pub fn commit_edit(&mut self) -> Outcome {
        let Some(edited) = self.editing.take() else {
            return Outcome::Rejected(Rejection::NotEditing);
        };
        match self.tasks.iter_mut().find(|task| task.id == edited.id) {
            Some(slot) => {
                *slot = edited;
                Outcome::Applied
            }
            None => Outcome::NotFound(edited.id),
        }
    }

    /// Ask the source once; on a collision fall back to one past the largest
    /// id in use, or the lowest free non-negative id if that would overflow.
    fn fresh_id(&mut self) -> TaskId {
        let id = self.ids.next_id();
        if self.get(id).is_none() {
            return id;
        }
        self.tasks
            .iter()
            .map(|task| task.id.get())
            .max()
            .and_then(|max| max.checked_add(1))
            .map(TaskId)
            .filter(|candidate| self.get(*candidate).is_none())
            .unwrap_or_else(|| {
                (0..)
                    .map(TaskId)
                    .find(|candidate| self.get(*candidate).is_none())
                    .unwrap_or_default()
            })
    }
}
