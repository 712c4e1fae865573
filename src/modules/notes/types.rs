use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Note {
  pub code: String,
  pub title: String,
  pub description: String,
  #[serde(rename = "createdOn")]
  pub created_on: DateTime<Utc>
}

/// Client-supplied part of a note. `code` and `createdOn` are assigned by the
/// store, so any values sent for them are dropped during decoding.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NewNote {
  pub title: String,
  pub description: String
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct NoteResource<T = Note> {
  pub note: T
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct NotesResource {
  pub notes: Vec<Note>
}
