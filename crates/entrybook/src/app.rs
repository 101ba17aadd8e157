use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{
        entries::{create_entry, delete_entry, update_entry},
        health::{livez, readyz},
        pages::{edit_entry_page, index},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // Page routes. The `.php` paths keep links from the old page scripts working.
    let pages = Router::new()
        .route("/", get(index))
        .route("/index.php", get(index))
        .route("/create", post(create_entry))
        .route("/create.php", post(create_entry))
        .route("/update", get(edit_entry_page).post(update_entry))
        .route("/update.php", get(edit_entry_page).post(update_entry))
        .route("/delete", get(delete_entry))
        .route("/delete.php", get(delete_entry));

    Router::new()
        .merge(pages)
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use entrybook_core::entry::EntryDraft;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> (Router, AppState) {
        let state = AppState::default();
        let app = create_app(state.clone(), &Config::default());
        (app, state)
    }

    async fn body_text(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form_request(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn assert_redirects_to_list(response: &Response) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_index_page_empty() {
        let (app, _state) = test_app();

        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h1>Entries</h1>"));
        assert!(html.contains(r#"action="/create""#));
        assert!(!html.contains("/update?id="));
    }

    #[tokio::test]
    async fn test_index_lists_entries_with_links() {
        let (app, state) = test_app();
        let id = state
            .entry_repo
            .create_entry(&EntryDraft::new("Groceries", "Milk and bread"))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/")).await.unwrap();

        let html = body_text(response).await;
        assert!(html.contains("Groceries"));
        assert!(html.contains("Milk and bread"));
        assert!(html.contains(&format!("/update?id={id}")));
        assert!(html.contains(&format!("/delete?id={id}")));
    }

    #[tokio::test]
    async fn test_legacy_index_path() {
        let (app, _state) = test_app();

        let response = app.oneshot(get_request("/index.php")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_redirects_and_persists() {
        let (app, state) = test_app();

        let response = app
            .oneshot(form_request("/create", "title=T&description=D"))
            .await
            .unwrap();

        assert_redirects_to_list(&response);
        let entries = state.entry_repo.list_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "T");
        assert_eq!(entries[0].description, "D");
    }

    #[tokio::test]
    async fn test_create_with_missing_fields_stores_empty_text() {
        let (app, state) = test_app();

        let response = app
            .oneshot(form_request("/create", "title=Only+title"))
            .await
            .unwrap();

        assert_redirects_to_list(&response);
        let entries = state.entry_repo.list_entries().await.unwrap();
        assert_eq!(entries[0].title, "Only title");
        assert_eq!(entries[0].description, "");
    }

    #[tokio::test]
    async fn test_edit_page_prefills_form() {
        let (app, state) = test_app();
        let id = state
            .entry_repo
            .create_entry(&EntryDraft::new("Old title", "Old description"))
            .await
            .unwrap();

        let response = app
            .oneshot(get_request(&format!("/update?id={id}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(&format!(r#"name="id" value="{id}""#)));
        assert!(html.contains("Old title"));
        assert!(html.contains("Old description"));
        assert!(html.contains(r#"action="/update""#));
    }

    #[tokio::test]
    async fn test_edit_page_for_missing_entry_is_404() {
        let (app, _state) = test_app();

        let response = app.oneshot(get_request("/update?id=9999")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("Entry not found"));
        assert!(html.contains("9999"));
    }

    #[tokio::test]
    async fn test_edit_page_without_id_is_bad_request() {
        let (app, _state) = test_app();

        let response = app.oneshot(get_request("/update")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_changes_only_target_row() {
        let (app, state) = test_app();
        for n in 1..=4 {
            state
                .entry_repo
                .create_entry(&EntryDraft::new(format!("Title {n}"), "D"))
                .await
                .unwrap();
        }

        let response = app
            .oneshot(form_request(
                "/update",
                "id=3&title=Changed&description=New+text",
            ))
            .await
            .unwrap();

        assert_redirects_to_list(&response);
        let entry = state.entry_repo.get_entry(3).await.unwrap().unwrap();
        assert_eq!(entry.title, "Changed");
        assert_eq!(entry.description, "New text");
        for other in [1, 2, 4] {
            let entry = state.entry_repo.get_entry(other).await.unwrap().unwrap();
            assert_eq!(entry.title, format!("Title {other}"));
        }
    }

    #[tokio::test]
    async fn test_update_missing_entry_still_redirects() {
        let (app, state) = test_app();
        state
            .entry_repo
            .create_entry(&EntryDraft::new("Keep", "me"))
            .await
            .unwrap();

        let response = app
            .oneshot(form_request("/update", "id=9999&title=X&description=Y"))
            .await
            .unwrap();

        assert_redirects_to_list(&response);
        let entries = state.entry_repo.list_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Keep");
    }

    #[tokio::test]
    async fn test_update_without_id_changes_nothing() {
        let (app, state) = test_app();
        state
            .entry_repo
            .create_entry(&EntryDraft::new("Keep", "me"))
            .await
            .unwrap();

        for body in ["title=X&description=Y", "id=&title=X&description=Y"] {
            let response = app
                .clone()
                .oneshot(form_request("/update", body))
                .await
                .unwrap();

            assert_redirects_to_list(&response);
        }

        let entries = state.entry_repo.list_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Keep");
        assert_eq!(entries[0].description, "me");
    }

    #[tokio::test]
    async fn test_edit_page_with_non_numeric_id_is_bad_request() {
        let (app, _state) = test_app();

        let response = app.oneshot(get_request("/update?id=abc")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_without_id_is_bad_request() {
        let (app, state) = test_app();
        state
            .entry_repo
            .create_entry(&EntryDraft::new("Keep", "me"))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/delete")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.entry_repo.list_entries().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let (app, state) = test_app();
        let id = state
            .entry_repo
            .create_entry(&EntryDraft::new("Doomed", "entry"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get_request(&format!("/delete?id={id}")))
            .await
            .unwrap();

        assert_redirects_to_list(&response);
        assert!(state.entry_repo.get_entry(id).await.unwrap().is_none());

        let response = app.oneshot(get_request("/")).await.unwrap();
        let html = body_text(response).await;
        assert!(!html.contains("Doomed"));
    }

    #[tokio::test]
    async fn test_delete_missing_entry_still_redirects() {
        let (app, _state) = test_app();

        let response = app.oneshot(get_request("/delete?id=9999")).await.unwrap();

        assert_redirects_to_list(&response);
    }

    #[tokio::test]
    async fn test_legacy_delete_path() {
        let (app, state) = test_app();
        let id = state
            .entry_repo
            .create_entry(&EntryDraft::new("Old", "link"))
            .await
            .unwrap();

        let response = app
            .oneshot(get_request(&format!("/delete.php?id={id}")))
            .await
            .unwrap();

        assert_redirects_to_list(&response);
        assert!(state.entry_repo.list_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_script_in_title_is_escaped() {
        let (app, state) = test_app();
        let id = state
            .entry_repo
            .create_entry(&EntryDraft::new(
                "<script>alert(1)</script>",
                "<b>bold</b>",
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get_request("/"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("alert(1)"));

        let response = app
            .oneshot(get_request(&format!("/update?id={id}")))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(!html.contains("<script>"));
        assert!(html.contains("alert(1)"));
    }

    #[tokio::test]
    async fn test_full_crud_flow_through_forms() {
        let (app, _state) = test_app();

        let response = app
            .clone()
            .oneshot(form_request("/create", "title=First&description=Entry"))
            .await
            .unwrap();
        assert_redirects_to_list(&response);

        let response = app
            .clone()
            .oneshot(form_request("/update", "id=1&title=Renamed&description=Entry"))
            .await
            .unwrap();
        assert_redirects_to_list(&response);

        let html = body_text(app.clone().oneshot(get_request("/")).await.unwrap()).await;
        assert!(html.contains("Renamed"));
        assert!(!html.contains("First"));

        let response = app
            .clone()
            .oneshot(get_request("/delete?id=1"))
            .await
            .unwrap();
        assert_redirects_to_list(&response);

        let html = body_text(app.oneshot(get_request("/")).await.unwrap()).await;
        assert!(!html.contains("Renamed"));
    }

    #[tokio::test]
    async fn test_livez() {
        let (app, _state) = test_app();

        let response = app.oneshot(get_request("/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readyz_healthy() {
        let (app, _state) = test_app();

        let response = app.oneshot(get_request("/readyz")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["healthy"], true);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_closed_storage_is_service_unavailable() {
        let (app, state) = test_app();
        state.entry_repo.ping().await.unwrap();
        state.close().await;

        let response = app.clone().oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app.oneshot(get_request("/readyz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["healthy"], false);
    }
}
