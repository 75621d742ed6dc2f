//! Queue discipline for one lesson or review session.
//!
//! The session works on indices into the caller's entry list, never on the
//! entries themselves. Answering right removes the head for good; answering
//! wrong in a lesson moves the head to the tail so it comes back after every
//! other queued entry has been shown once.

use std::collections::VecDeque;
use std::fmt;

//
// ─── MODE ──────────────────────────────────────────────────────────────────────
//

/// Kind of session. Fixed for the lifetime of a `SessionState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// New material: wrong answers are repeated later in the same session.
    Lesson,
    /// Due material: every entry is shown once; wrong answers demote it.
    Review,
}

impl Mode {
    /// Whether an entry answered wrong goes back into the queue.
    #[must_use]
    pub fn requeues_failures(self) -> bool {
        matches!(self, Mode::Lesson)
    }

    /// Whether an entry answered wrong is reported to the backend.
    #[must_use]
    pub fn reports_failures(self) -> bool {
        matches!(self, Mode::Review)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Lesson => "Lessons",
            Mode::Review => "Reviews",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── ACTIONS & OUTCOMES ────────────────────────────────────────────────────────
//

/// Every transition a session can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Toggle the answer side of the current entry.
    Flip,
    GradeRight,
    GradeWrong,
    /// Discard all progress and start over with `size` entries.
    Reset { size: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Right,
    Wrong,
}

/// The entry that left the head of the queue after a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Graded {
    /// Index into the session's entry list.
    pub index: usize,
    pub verdict: Verdict,
    /// True if the entry was appended to the tail instead of being removed.
    pub requeued: bool,
}

/// Snapshot of how far a session has come.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub completed: usize,
    pub total: usize,
    /// Rounded percentage, `0` for an empty session.
    pub percent: u8,
}

impl SessionProgress {
    fn new(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            // Half-up rounding in integers; completed <= total keeps this <= 100.
            let scaled = (completed * 200 + total) / (total * 2);
            u8::try_from(scaled).unwrap_or(100)
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Mutable state of a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    mode: Mode,
    order: VecDeque<usize>,
    revealed: bool,
    total: usize,
}

impl SessionState {
    /// Start a session over `size` entries, in their given order.
    #[must_use]
    pub fn new(size: usize, mode: Mode) -> Self {
        Self {
            mode,
            order: (0..size).collect(),
            revealed: false,
            total: size,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Session size at the last reset. Never shrinks while grading.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries still queued, counting requeued lesson entries once.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len()
    }

    /// Pending indices, head first.
    pub fn order(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Index of the entry being shown, if any.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.order.front().copied()
    }

    /// The entry being shown.
    ///
    /// Returns `None` when the queue is empty or the head index is outside
    /// `entries`.
    #[must_use]
    pub fn current<'a, T>(&self, entries: &'a [T]) -> Option<&'a T> {
        self.current_index().and_then(|idx| entries.get(idx))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::new(self.total - self.order.len(), self.total)
    }

    /// Apply one action. Returns what left the head, for grading actions that
    /// took effect.
    pub fn apply(&mut self, action: SessionAction) -> Option<Graded> {
        match action {
            SessionAction::Flip => {
                self.reveal();
                None
            }
            SessionAction::GradeRight => self.grade_right(),
            SessionAction::GradeWrong => self.grade_wrong(),
            SessionAction::Reset { size } => {
                self.reset(size);
                None
            }
        }
    }

    /// Toggle the answer side. Does nothing on an empty queue.
    pub fn reveal(&mut self) {
        if !self.is_complete() {
            self.revealed = !self.revealed;
        }
    }

    /// Remove the head for good.
    ///
    /// Requires the answer to be revealed; otherwise nothing changes.
    pub fn grade_right(&mut self) -> Option<Graded> {
        let index = self.take_revealed_head()?;
        Some(Graded {
            index,
            verdict: Verdict::Right,
            requeued: false,
        })
    }

    /// Remove the head; in lesson mode, append it to the tail again.
    ///
    /// Requires the answer to be revealed; otherwise nothing changes.
    pub fn grade_wrong(&mut self) -> Option<Graded> {
        let index = self.take_revealed_head()?;
        let requeued = self.mode.requeues_failures();
        if requeued {
            self.order.push_back(index);
        }
        Some(Graded {
            index,
            verdict: Verdict::Wrong,
            requeued,
        })
    }

    /// Throw away all progress and start again with `size` entries.
    pub fn reset(&mut self, size: usize) {
        *self = Self::new(size, self.mode);
    }

    fn take_revealed_head(&mut self) -> Option<usize> {
        if !self.revealed {
            return None;
        }
        let index = self.order.pop_front()?;
        self.revealed = false;
        Some(index)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
