use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use kanji_core::Mode;
use kanji_core::model::{EntryId, UserEntry};

use crate::error::BackendError;

//
// ─── CONTRACTS ─────────────────────────────────────────────────────────────────
//

/// Grading endpoints of the study backend.
///
/// Both calls must be idempotent on the backend side: the client sends each
/// at most once, never retries, and does not wait for them before moving on.
#[async_trait]
pub trait GradingBackend: Send + Sync {
    /// Record a correct answer for `entry_id` in the current cycle.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` on transport or server failure.
    async fn grade_success(&self, entry_id: EntryId) -> Result<(), BackendError>;

    /// Record an incorrect answer for `entry_id`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` on transport or server failure.
    async fn grade_failure(&self, entry_id: EntryId) -> Result<(), BackendError>;
}

/// Which list of entries a session drills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    Lessons,
    Reviews,
    Mistakes,
}

impl SessionKind {
    /// Backend route listing the entries for this kind.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            SessionKind::Lessons => "lessons",
            SessionKind::Reviews => "reviews",
            SessionKind::Mistakes => "mistakes",
        }
    }

    /// Lessons repeat failures in-session; reviews and mistakes demote them.
    #[must_use]
    pub fn mode(self) -> Mode {
        match self {
            SessionKind::Lessons => Mode::Lesson,
            SessionKind::Reviews | SessionKind::Mistakes => Mode::Review,
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Read side of the backend: the lists sessions are built from.
#[async_trait]
pub trait EntrySource: Send + Sync {
    /// Fetch the entries for a session of the given kind, in drill order.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` on transport, server, or decoding failure.
    async fn fetch_entries(&self, kind: SessionKind) -> Result<Vec<UserEntry>, BackendError>;

    /// Fetch the learner's planned (not yet unlocked) entries.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` on transport, server, or decoding failure.
    async fn fetch_planned(&self) -> Result<Vec<UserEntry>, BackendError>;
}

//
// ─── IN-MEMORY BACKEND ─────────────────────────────────────────────────────────
//

/// A grading call as seen by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeCall {
    Success(EntryId),
    Failure(EntryId),
}

#[derive(Default)]
struct RecordingState {
    calls: Vec<GradeCall>,
    failing: bool,
    entries: HashMap<SessionKind, Vec<UserEntry>>,
    planned: Vec<UserEntry>,
}

/// In-memory backend that serves fixed lists and records grading calls.
///
/// Calls are recorded even while failing is switched on, the way a server
/// might apply a write and still fail the response.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries(self, kind: SessionKind, entries: Vec<UserEntry>) -> Self {
        self.set_entries(kind, entries);
        self
    }

    /// Replace the list served for `kind`.
    pub fn set_entries(&self, kind: SessionKind, entries: Vec<UserEntry>) {
        self.lock().entries.insert(kind, entries);
    }

    #[must_use]
    pub fn with_planned(self, entries: Vec<UserEntry>) -> Self {
        self.lock().planned = entries;
        self
    }

    /// Make every subsequent grading call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Grading calls received so far, in arrival order.
    #[must_use]
    pub fn calls(&self) -> Vec<GradeCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: GradeCall) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.failing {
            return Err(BackendError::Unavailable(format!("{call:?} rejected")));
        }
        Ok(())
    }
}

#[async_trait]
impl GradingBackend for RecordingBackend {
    async fn grade_success(&self, entry_id: EntryId) -> Result<(), BackendError> {
        self.record(GradeCall::Success(entry_id))
    }

    async fn grade_failure(&self, entry_id: EntryId) -> Result<(), BackendError> {
        self.record(GradeCall::Failure(entry_id))
    }
}

#[async_trait]
impl EntrySource for RecordingBackend {
    async fn fetch_entries(&self, kind: SessionKind) -> Result<Vec<UserEntry>, BackendError> {
        Ok(self.lock().entries.get(&kind).cloned().unwrap_or_default())
    }

    async fn fetch_planned(&self) -> Result<Vec<UserEntry>, BackendError> {
        Ok(self.lock().planned.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanji_core::model::{DictionaryEntry, EntryType};

    fn entry(id: u64) -> UserEntry {
        UserEntry::new(DictionaryEntry::new(
            EntryId::new(id),
            "木",
            "tree",
            EntryType::Kanji,
        ))
    }

    #[test]
    fn kinds_map_to_modes_and_routes() {
        assert_eq!(SessionKind::Lessons.mode(), Mode::Lesson);
        assert_eq!(SessionKind::Reviews.mode(), Mode::Review);
        assert_eq!(SessionKind::Mistakes.mode(), Mode::Review);
        assert_eq!(SessionKind::Reviews.path(), "reviews");
    }

    #[tokio::test]
    async fn records_calls_in_order() {
        let backend = RecordingBackend::new();
        backend.grade_success(EntryId::new(1)).await.unwrap();
        backend.grade_failure(EntryId::new(2)).await.unwrap();
        assert_eq!(
            backend.calls(),
            vec![
                GradeCall::Success(EntryId::new(1)),
                GradeCall::Failure(EntryId::new(2)),
            ]
        );
    }

    #[tokio::test]
    async fn failing_backend_still_records() {
        let backend = RecordingBackend::new();
        backend.set_failing(true);
        let err = backend.grade_success(EntryId::new(5)).await.unwrap_err();
        assert!(matches!(err, BackendError::Unavailable(_)));
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn serves_configured_lists() {
        let backend = RecordingBackend::new()
            .with_entries(SessionKind::Reviews, vec![entry(1), entry(2)])
            .with_planned(vec![entry(3)]);
        assert_eq!(backend.fetch_entries(SessionKind::Reviews).await.unwrap().len(), 2);
        assert!(backend.fetch_entries(SessionKind::Lessons).await.unwrap().is_empty());
        assert_eq!(backend.fetch_planned().await.unwrap()[0].id(), EntryId::new(3));
    }
}
