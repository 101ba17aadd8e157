//! Form handlers that mutate entries.
//!
//! Each one performs a single repository call and answers with a
//! `303 See Other` to the list page, so reloading the result page never
//! resubmits the form.

use axum::{
    extract::{Query, State},
    response::Redirect,
    Form,
};

use crate::{
    handlers::AppError,
    models::{CreateEntry, EntryIdQuery, UpdateEntry},
    state::AppState,
};

const LIST_PAGE: &str = "/";

/// Create a new entry (POST /create).
pub async fn create_entry(
    State(state): State<AppState>,
    Form(payload): Form<CreateEntry>,
) -> Result<Redirect, AppError> {
    let id = state.entry_repo.create_entry(&payload.into_draft()).await?;

    tracing::info!(entry_id = id, "Created new entry");

    Ok(Redirect::to(LIST_PAGE))
}

/// Update an existing entry (POST /update).
///
/// A missing or unknown id changes nothing and still redirects.
pub async fn update_entry(
    State(state): State<AppState>,
    Form(payload): Form<UpdateEntry>,
) -> Result<Redirect, AppError> {
    let (id, draft) = payload.into_parts();

    let Some(id) = id else {
        tracing::warn!("Update skipped, form has no entry id");
        return Ok(Redirect::to(LIST_PAGE));
    };

    if state.entry_repo.update_entry(id, &draft).await? {
        tracing::info!(entry_id = id, "Updated entry");
    } else {
        tracing::warn!(entry_id = id, "Update skipped, entry does not exist");
    }

    Ok(Redirect::to(LIST_PAGE))
}

/// Delete an entry (GET /delete?id=N).
///
/// An unknown id changes nothing and still redirects.
pub async fn delete_entry(
    State(state): State<AppState>,
    Query(EntryIdQuery { id }): Query<EntryIdQuery>,
) -> Result<Redirect, AppError> {
    if state.entry_repo.delete_entry(id).await? {
        tracing::info!(entry_id = id, "Deleted entry");
    } else {
        tracing::warn!(entry_id = id, "Delete skipped, entry does not exist");
    }

    Ok(Redirect::to(LIST_PAGE))
}
