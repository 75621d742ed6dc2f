use std::fmt;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use kanji_core::model::{EntryId, UserEntry};
use kanji_core::{Graded, Mode, SessionAction, SessionProgress, SessionState, Verdict};

use crate::backend::GradingBackend;
use crate::card_view::CardView;

/// Callback run once when a session runs out of entries.
pub type CompletionCallback = Box<dyn FnMut() + Send>;

/// Discrete user input during a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    Reveal,
    GradeRight,
    GradeWrong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Report {
    Promote,
    Demote,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Promote => f.write_str("promote"),
            Report::Demote => f.write_str("demote"),
        }
    }
}

//
// ─── RUNNER ────────────────────────────────────────────────────────────────────
//

/// Drives one lesson or review session against the backend.
///
/// Queue changes happen synchronously. Grading results are sent to the backend
/// on spawned tasks that are never awaited before the next input; a failed
/// call is logged and dropped without touching the queue.
///
/// Tasks go to the runtime passed to [`SessionRunner::with_runtime`], else the
/// Tokio runtime that was current when the runner was built, else the one
/// current at grading time. With no runtime at all, grades still update the
/// queue and the backend call is logged and skipped.
pub struct SessionRunner {
    entries: Arc<[UserEntry]>,
    state: SessionState,
    backend: Arc<dyn GradingBackend>,
    on_complete: Option<CompletionCallback>,
    completion_reported: bool,
    runtime: Option<Handle>,
    in_flight: Vec<JoinHandle<()>>,
}

impl SessionRunner {
    #[must_use]
    pub fn new(
        entries: impl Into<Arc<[UserEntry]>>,
        mode: Mode,
        backend: Arc<dyn GradingBackend>,
    ) -> Self {
        let entries = entries.into();
        let state = SessionState::new(entries.len(), mode);
        Self {
            entries,
            state,
            backend,
            on_complete: None,
            completion_reported: false,
            runtime: Handle::try_current().ok(),
            in_flight: Vec::new(),
        }
    }

    /// Send grading calls to `runtime` instead of the ambient one.
    #[must_use]
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Run `callback` when the queue empties.
    ///
    /// Fires at most once per reset. Attaching it to a session that is already
    /// empty fires it immediately.
    #[must_use]
    pub fn with_on_complete(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self.check_completion();
        self
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    #[must_use]
    pub fn entries(&self) -> &[UserEntry] {
        &self.entries
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn current(&self) -> Option<&UserEntry> {
        self.state.current(&self.entries)
    }

    /// Presentation data for the current entry, honouring the reveal state.
    #[must_use]
    pub fn current_view(&self) -> Option<CardView> {
        self.current()
            .map(|entry| CardView::build(entry, self.state.is_revealed()))
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.state.progress()
    }

    /// Swap in a new entry list, e.g. after the parent data was refetched.
    ///
    /// A list with a different identity or length discards all progress and
    /// restarts from the first entry. Returns whether the session was rebuilt.
    /// Grading calls already sent keep running.
    pub fn replace_entries(&mut self, entries: impl Into<Arc<[UserEntry]>>) -> bool {
        let entries = entries.into();
        if Arc::ptr_eq(&self.entries, &entries) && self.entries.len() == entries.len() {
            return false;
        }

        log::debug!(
            "entry list changed ({} -> {} entries), restarting {} session",
            self.entries.len(),
            entries.len(),
            self.state.mode()
        );
        self.entries = entries;
        self.state.apply(SessionAction::Reset {
            size: self.entries.len(),
        });
        self.completion_reported = false;
        self.check_completion();
        true
    }

    /// Handle one user input. Returns the graded entry, if a grade took effect.
    pub fn apply(&mut self, intent: SessionIntent) -> Option<Graded> {
        match intent {
            SessionIntent::Reveal => {
                self.reveal();
                None
            }
            SessionIntent::GradeRight => self.grade_right(),
            SessionIntent::GradeWrong => self.grade_wrong(),
        }
    }

    pub fn reveal(&mut self) {
        self.state.apply(SessionAction::Flip);
    }

    /// Mark the current entry as known and send a promote call.
    pub fn grade_right(&mut self) -> Option<Graded> {
        self.grade(SessionAction::GradeRight)
    }

    /// Mark the current entry as missed.
    ///
    /// Lessons requeue it at the tail; reviews drop it and send a demote call.
    pub fn grade_wrong(&mut self) -> Option<Graded> {
        self.grade(SessionAction::GradeWrong)
    }

    /// Wait for grading calls sent so far to finish.
    ///
    /// Outcomes are already logged by the tasks themselves; nothing flows back
    /// into the session.
    pub async fn settle(&mut self) {
        for handle in self.in_flight.drain(..) {
            if let Err(err) = handle.await {
                log::warn!("grading task did not finish: {err}");
            }
        }
    }

    fn grade(&mut self, action: SessionAction) -> Option<Graded> {
        let Some(entry_id) = self.current().map(UserEntry::id) else {
            log::debug!("ignoring {action:?}: no current entry");
            return None;
        };
        let Some(graded) = self.state.apply(action) else {
            log::debug!("ignoring {action:?}: answer not revealed");
            return None;
        };

        let report = match graded.verdict {
            Verdict::Right => Some(Report::Promote),
            Verdict::Wrong if self.state.mode().reports_failures() => Some(Report::Demote),
            Verdict::Wrong => None,
        };
        if let Some(report) = report {
            self.dispatch(report, entry_id);
        }

        self.check_completion();
        Some(graded)
    }

    fn dispatch(&mut self, report: Report, entry_id: EntryId) {
        self.in_flight.retain(|handle| !handle.is_finished());

        let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            log::error!("no async runtime, dropping {report} for entry {entry_id}");
            return;
        };
        let backend = Arc::clone(&self.backend);
        let handle = runtime.spawn(async move {
            let result = match report {
                Report::Promote => backend.grade_success(entry_id).await,
                Report::Demote => backend.grade_failure(entry_id).await,
            };
            if let Err(err) = result {
                log::error!("failed to {report} entry {entry_id}: {err}");
            }
        });
        self.in_flight.push(handle);
    }

    fn check_completion(&mut self) {
        if self.completion_reported || !self.state.is_complete() {
            return;
        }
        if let Some(callback) = self.on_complete.as_mut() {
            self.completion_reported = true;
            callback();
        }
    }
}

impl fmt::Debug for SessionRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRunner")
            .field("entries_len", &self.entries.len())
            .field("state", &self.state)
            .field("completion_reported", &self.completion_reported)
            .field("has_runtime", &self.runtime.is_some())
            .field("in_flight", &self.in_flight.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
