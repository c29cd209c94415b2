use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Identifier of a task (milliseconds since the Unix epoch at creation).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl TaskId {
    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Source of fresh task identifiers.
pub trait IdSource {
    /// Issue an identifier strictly greater than any previously issued one.
    fn next_id(&mut self) -> TaskId;
}

/// Wall-clock backed identifiers.
///
/// Two creations inside the same millisecond (or a clock that steps
/// backwards) still receive distinct, increasing ids: the source falls back
/// to `last + 1` whenever the clock has not advanced past the last issue.
#[derive(Debug, Clone, Default)]
pub struct ClockIdSource {
    last: Option<i64>,
}

impl ClockIdSource {
    /// Create a source that has not issued anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    fn now_millis() -> i64 {
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
        i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
    }

    fn issue(&mut self, observed: i64) -> TaskId {
        let value = match self.last {
            Some(last) if observed <= last => last.saturating_add(1),
            _ => observed,
        };
        self.last = Some(value);
        TaskId(value)
    }
}

impl IdSource for ClockIdSource {
    fn next_id(&mut self) -> TaskId {
        self.issue(Self::now_millis())
    }
}

/// Deterministic counter, mostly for tests and scripted sessions.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    next: i64,
}

impl SequentialIdSource {
    /// Start issuing at `start`.
    #[must_use]
    pub const fn starting_at(start: i64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}
