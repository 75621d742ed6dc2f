use std::sync::Arc;

use crate::backend::{EntrySource, GradingBackend, SessionKind};
use crate::error::SessionError;

use super::runner::SessionRunner;

/// Starts sessions from backend-provided entry lists.
#[derive(Clone)]
pub struct SessionLoader {
    source: Arc<dyn EntrySource>,
    backend: Arc<dyn GradingBackend>,
}

impl SessionLoader {
    #[must_use]
    pub fn new(source: Arc<dyn EntrySource>, backend: Arc<dyn GradingBackend>) -> Self {
        Self { source, backend }
    }

    /// Fetch the entries for `kind` and start a session over them.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if there is nothing to study, or
    /// `SessionError::Backend` if the fetch fails.
    pub async fn start(&self, kind: SessionKind) -> Result<SessionRunner, SessionError> {
        let entries = self.source.fetch_entries(kind).await?;
        if entries.is_empty() {
            return Err(SessionError::Empty);
        }

        log::debug!("starting {kind} session with {} entries", entries.len());
        Ok(SessionRunner::new(
            entries,
            kind.mode(),
            Arc::clone(&self.backend),
        ))
    }

    /// Refetch the entries for `kind` and hand them to a running session.
    ///
    /// Returns whether the session was restarted; see
    /// [`SessionRunner::replace_entries`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Backend` if the fetch fails. The running session
    /// is left untouched in that case.
    pub async fn refresh(
        &self,
        runner: &mut SessionRunner,
        kind: SessionKind,
    ) -> Result<bool, SessionError> {
        let entries = self.source.fetch_entries(kind).await?;
        Ok(runner.replace_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use kanji_core::Mode;
    use kanji_core::model::{DictionaryEntry, EntryId, EntryType, UserEntry};

    fn entry(id: u64) -> UserEntry {
        UserEntry::new(DictionaryEntry::new(
            EntryId::new(id),
            "人",
            "person",
            EntryType::Radical,
        ))
    }

    fn loader(backend: &RecordingBackend) -> SessionLoader {
        SessionLoader::new(Arc::new(backend.clone()), Arc::new(backend.clone()))
    }

    #[tokio::test]
    async fn starts_lessons_in_lesson_mode() {
        let backend = RecordingBackend::new().with_entries(SessionKind::Lessons, vec![entry(1)]);
        let runner = loader(&backend).start(SessionKind::Lessons).await.unwrap();
        assert_eq!(runner.mode(), Mode::Lesson);
        assert_eq!(runner.progress().total, 1);
    }

    #[tokio::test]
    async fn mistakes_run_as_reviews() {
        let backend =
            RecordingBackend::new().with_entries(SessionKind::Mistakes, vec![entry(1), entry(2)]);
        let runner = loader(&backend).start(SessionKind::Mistakes).await.unwrap();
        assert_eq!(runner.mode(), Mode::Review);
    }

    #[tokio::test]
    async fn empty_list_is_an_error() {
        let backend = RecordingBackend::new();
        let err = loader(&backend).start(SessionKind::Reviews).await.unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[tokio::test]
    async fn refresh_restarts_with_new_list() {
        let backend = RecordingBackend::new().with_entries(SessionKind::Reviews, vec![entry(1)]);
        let loader = loader(&backend);
        let mut runner = loader.start(SessionKind::Reviews).await.unwrap();

        backend.set_entries(SessionKind::Reviews, vec![entry(1), entry(2), entry(3)]);
        let restarted = loader.refresh(&mut runner, SessionKind::Reviews).await.unwrap();
        assert!(restarted);
        assert_eq!(runner.progress().total, 3);
    }
}
