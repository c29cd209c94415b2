//! Domain types and the in-memory task store behind the board.

/// Category labels and the configurable set they are drawn from.
pub mod category;
/// Identifier types and id sources.
pub mod id;
/// The task store and its intents.
pub mod store;

pub use category::{Category, CategoryError, CategorySet, DEFAULT_CATEGORIES};
pub use id::{ClockIdSource, IdSource, SequentialIdSource, TaskId};
pub use store::{
    Draft, Intent, Outcome, Rejection, Snapshot, StoreOptions, Task, TaskCounts, TaskFields, TaskStore,
};
