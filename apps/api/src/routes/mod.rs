pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::editor::handlers;
use crate::preview::handlers as preview;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Aggregate store
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume).delete(resume::handle_clear_resume),
        )
        // Section editors
        .route("/api/v1/sections", get(handlers::handle_list_sections))
        .route("/api/v1/sections/:section", get(handlers::handle_get_section))
        .route(
            "/api/v1/sections/:section/toggle",
            post(handlers::handle_toggle),
        )
        .route(
            "/api/v1/sections/:section/compose",
            post(handlers::handle_compose),
        )
        .route(
            "/api/v1/sections/:section/fields/:index",
            put(handlers::handle_edit_field),
        )
        .route(
            "/api/v1/sections/:section/commit",
            post(handlers::handle_commit),
        )
        .route(
            "/api/v1/sections/:section/items/:id",
            delete(handlers::handle_delete_item),
        )
        // Preview
        .route("/api/v1/preview", get(preview::handle_get_preview))
        .route("/api/v1/preview/export", get(preview::handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::resume::SharedStore;

    fn app() -> Router {
        build_router(AppState::new(SharedStore::default()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = send_raw(app, method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn send_raw(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_section_is_not_found() {
        let (status, body) = send(&app(), Method::POST, "/api/v1/sections/hobbies/toggle", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_operations_rejected_for_personal_info() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/sections/personal_info/commit",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_personal_info_is_live() {
        let app = app();
        send(&app, Method::POST, "/api/v1/sections/personal_info/toggle", None).await;
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/sections/personal_info/fields/0",
            Some(json!({"value": "Ada"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transition"]["status"], "applied");

        let (_, resume) = send(&app, Method::GET, "/api/v1/resume", None).await;
        assert_eq!(resume["personal_info"]["Name"], "Ada");

        let (_, preview) = send(&app, Method::GET, "/api/v1/preview", None).await;
        assert_eq!(preview["header"]["name"], "Ada");
    }

    #[tokio::test]
    async fn test_education_add_edit_delete_flow() {
        let app = app();
        let base = "/api/v1/sections/education";

        let (_, opened) = send(&app, Method::POST, &format!("{base}/toggle"), None).await;
        assert_eq!(opened["view"]["state"]["mode"], "browsing");
        assert_eq!(opened["view"]["add_label"], "+ Add Education");

        let (_, composing) = send(
            &app,
            Method::POST,
            &format!("{base}/compose"),
            Some(json!({"target": "new"})),
        )
        .await;
        assert_eq!(composing["view"]["state"]["target"], "new");
        assert_eq!(composing["view"]["action_label"], "Save");

        for (i, value) in ["Stanford", "MS", "2024-06"].iter().enumerate() {
            let (status, _) = send(
                &app,
                Method::PUT,
                &format!("{base}/fields/{i}"),
                Some(json!({"value": value})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
        // Staged only: nothing in the store until commit.
        let (_, resume) = send(&app, Method::GET, "/api/v1/resume", None).await;
        assert_eq!(resume["education"], json!([]));

        let (_, committed) = send(&app, Method::POST, &format!("{base}/commit"), None).await;
        assert_eq!(committed["transition"]["status"], "applied");
        assert_eq!(committed["view"]["items"][0]["summary_line"], "Stanford · MS");
        let id = committed["view"]["items"][0]["id"].as_str().unwrap().to_string();

        let (_, resume) = send(&app, Method::GET, "/api/v1/resume", None).await;
        assert_eq!(
            resume["education"][0]["fields"],
            json!({"College": "Stanford", "Degree": "MS", "Graduation Date": "2024-06"})
        );

        send(
            &app,
            Method::POST,
            &format!("{base}/compose"),
            Some(json!({"target": id})),
        )
        .await;
        send(
            &app,
            Method::PUT,
            &format!("{base}/fields/1"),
            Some(json!({"value": "PhD"})),
        )
        .await;
        send(&app, Method::POST, &format!("{base}/commit"), None).await;

        let (_, resume) = send(&app, Method::GET, "/api/v1/resume", None).await;
        assert_eq!(resume["education"].as_array().unwrap().len(), 1);
        assert_eq!(resume["education"][0]["fields"]["Degree"], "PhD");
        assert_eq!(resume["education"][0]["fields"]["College"], "Stanford");

        let (status, deleted) =
            send(&app, Method::DELETE, &format!("{base}/items/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted["transition"]["status"], "applied");

        let (_, preview) = send(&app, Method::GET, "/api/v1/preview", None).await;
        assert_eq!(preview["sections"][0]["body"]["kind"], "placeholder");
        assert_eq!(
            preview["sections"][0]["body"]["content"],
            "No Education added yet."
        );
    }

    #[tokio::test]
    async fn test_ignored_transition_is_not_an_error() {
        let (status, body) = send(&app(), Method::POST, "/api/v1/sections/skills/commit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transition"]["status"], "ignored");
        assert_eq!(body["transition"]["reason"], "not_composing");
    }

    #[tokio::test]
    async fn test_clear_and_export() {
        let app = app();
        send(&app, Method::POST, "/api/v1/sections/personal_info/toggle", None).await;
        send(
            &app,
            Method::PUT,
            "/api/v1/sections/personal_info/fields/0",
            Some(json!({"value": "Grace"})),
        )
        .await;

        let (status, text) =
            send_raw(&app, Method::GET, "/api/v1/preview/export?format=text", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(text).unwrap().starts_with("Grace\n"));

        let (_, cleared) = send(&app, Method::DELETE, "/api/v1/resume", None).await;
        assert_eq!(cleared["personal_info"], json!({}));

        let (_, html) =
            send_raw(&app, Method::GET, "/api/v1/preview/export?format=html", None).await;
        let html = String::from_utf8(html).unwrap();
        assert!(html.contains("<h1 class=\"cv-name\">Your Name</h1>"));
    }
}
