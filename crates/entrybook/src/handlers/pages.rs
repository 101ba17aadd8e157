//! Server-rendered pages: the entry list and the edit form.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use entrybook_core::entry::{Entry, EntryId};

use crate::{handlers::AppError, models::EntryIdQuery, state::AppState};

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// Index page template showing the entry table and the create form.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    entries: Vec<Entry>,
}

/// Edit form pre-filled with an existing entry.
#[derive(Template)]
#[template(path = "edit.html")]
struct EditTemplate {
    entry: Entry,
}

/// Shown when the edit link points at an entry that no longer exists.
#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    id: EntryId,
}

/// Handler for the index page (GET /).
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = state.entry_repo.list_entries().await?;

    tracing::debug!(count = entries.len(), "Listing entries");

    Ok(HtmlTemplate(IndexTemplate { entries }))
}

/// Handler for the edit form (GET /update?id=N).
///
/// Responds 404 with a not-found page when the entry does not exist.
pub async fn edit_entry_page(
    State(state): State<AppState>,
    Query(EntryIdQuery { id }): Query<EntryIdQuery>,
) -> Result<Response, AppError> {
    match state.entry_repo.get_entry(id).await? {
        Some(entry) => Ok(HtmlTemplate(EditTemplate { entry }).into_response()),
        None => {
            tracing::info!(entry_id = id, "Entry not found for editing");
            Ok((StatusCode::NOT_FOUND, HtmlTemplate(NotFoundTemplate { id })).into_response())
        }
    }
}
