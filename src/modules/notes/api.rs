use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    Json
};

use crate::types::{ApiError, AppState};

use crate::modules::notes::types::*;

pub async fn get_notes(
    State(state): State<AppState>,
) -> Result<Json<NotesResource>, ApiError> {
    let notes = state.repo.get_all().await?;

    tracing::debug!(count = notes.len(), "listed notes");
    Ok(Json(NotesResource { notes }))
}

pub async fn get_note_by_code(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<NoteResource>, ApiError> {
    let Path(code) = path.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let note = state.repo.get_by_code(&code).await?;

    Ok(Json(NoteResource { note }))
}

pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NoteResource<NewNote>>, JsonRejection>,
) -> Result<Json<NoteResource>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let note = state.repo.create(body.note).await?;

    tracing::debug!(code = %note.code, "created note");
    Ok(Json(NoteResource { note }))
}
