use axum::async_trait;

use crate::modules::notes::types::{NewNote, Note};
use crate::store::{NoteRepository, RepoError, RepoResult};

/// Repository returning canned results, for driving handlers in tests.
#[derive(Default, Clone)]
pub struct MockRepository {
    pub err: Option<RepoError>,
    pub note: Option<Note>,
    pub notes: Vec<Note>,
}

impl MockRepository {
    fn result<T>(&self, value: T) -> RepoResult<T> {
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl NoteRepository for MockRepository {
    async fn get_all(&self) -> RepoResult<Vec<Note>> {
        self.result(self.notes.clone())
    }

    async fn get_by_code(&self, _code: &str) -> RepoResult<Note> {
        self.result(())?;
        self.note.clone().ok_or(RepoError::NotFound)
    }

    async fn create(&self, _note: NewNote) -> RepoResult<Note> {
        self.result(())?;
        self.note.clone().ok_or_else(|| RepoError::Fatal("no canned note".to_string()))
    }
}
