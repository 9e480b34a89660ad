use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::dto::MessageResponse;
use crate::error::{AppError, AppResult};
use crate::models::journal_entry::{JournalEntry, NewJournalEntry};
use crate::AppState;

pub async fn list_entries(State(state): State<AppState>) -> AppResult<Json<Vec<JournalEntry>>> {
    let entries = state.store.list().await?;
    tracing::debug!(count = entries.len(), "Listed journal entries");
    Ok(Json(entries))
}

pub async fn create_entry(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<JournalEntry>)> {
    let Json(body) = body?;
    tracing::debug!(body = %body, "Create journal entry");

    let new_entry = NewJournalEntry::from_json(&body)?;
    let entry = state.store.insert(&new_entry).await?;

    tracing::info!(id = %entry.id, mood = %entry.mood, "Journal entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<JournalEntry>> {
    let Json(body) = body?;
    tracing::debug!(id = %id, body = %body, "Update journal entry");

    let new_entry = NewJournalEntry::from_json(&body)?;
    let id = parse_entry_id(&id)?;

    let entry = state
        .store
        .update(id, &new_entry)
        .await?
        .ok_or_else(AppError::entry_not_found)?;

    tracing::info!(id = %entry.id, mood = %entry.mood, "Journal entry updated");
    Ok(Json(entry))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_entry_id(&id)?;

    if !state.store.delete(id).await? {
        return Err(AppError::entry_not_found());
    }

    tracing::info!(id = %id, "Journal entry deleted");
    Ok(Json(MessageResponse::new("Entry deleted successfully")))
}

/// A segment that is not a UUID cannot name a stored entry.
fn parse_entry_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::entry_not_found())
}
