use axum::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::modules::notes::types::{NewNote, Note};
use crate::store::{new_code, NoteRepository, RepoError, RepoResult};

#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn get_all(&self) -> RepoResult<Vec<Note>> {
        Ok(self.notes.read().await.clone())
    }

    async fn get_by_code(&self, code: &str) -> RepoResult<Note> {
        self.notes
            .read()
            .await
            .iter()
            .find(|note| note.code == code)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn create(&self, note: NewNote) -> RepoResult<Note> {
        let created = Note {
            code: new_code(),
            title: note.title,
            description: note.description,
            created_on: Utc::now(),
        };

        self.notes.write().await.push(created.clone());
        Ok(created)
    }
}
