//! Note storage.
//!
//! Handlers only see [`NoteRepository`]. Every backend maps its own failures
//! into [`RepoError`] so callers branch on the kind of failure, never on a
//! driver-specific error value.
//!
//! - [`postgres::PgNoteRepository`]: bb8 pool over tokio-postgres.
//! - [`memory::InMemoryNoteRepository`]: process-local, insertion ordered.

use axum::async_trait;

use crate::modules::notes::types::{NewNote, Note};

pub mod memory;
pub mod postgres;

#[cfg(test)]
pub mod mock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("not found")]
    NotFound,
    /// Failure that may go away on retry: lost connection, pool timeout.
    #[error("{0}")]
    Transient(String),
    #[error("{0}")]
    Fatal(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// All notes in store order.
    async fn get_all(&self) -> RepoResult<Vec<Note>>;

    /// Returns `RepoError::NotFound` when no note has this code.
    async fn get_by_code(&self, code: &str) -> RepoResult<Note>;

    /// Persists the note, assigning `code` and `created_on`.
    async fn create(&self, note: NewNote) -> RepoResult<Note>;
}

pub(crate) fn new_code() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
