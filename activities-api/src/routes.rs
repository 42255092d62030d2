//! Axum route handlers for the activities API.

use std::{path::PathBuf, sync::Arc};

use activities_core::{Activity, ActivityDirectory};
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
    Json, Router,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::debug;

use crate::error::ApiError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Directory = Arc<ActivityDirectory>;

// ── Request / response types ──────────────────────────────────────────────────

/// Query parameters carried by both mutation endpoints.
///
/// `email` travels in the query string rather than a body; this is
/// the wire contract the front-end already speaks.
#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// Confirmation returned by both `/signup` and `/unregister`.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given directory.
///
/// `static_dir` is where the landing page assets live; the root path
/// redirects there.
pub fn create_router(directory: Directory, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(sign_up))
        .route("/activities/{activity_name}/unregister", delete(unregister))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(directory)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — temporary redirect to the landing page.
pub async fn root_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// `GET /activities` — the full activity map, in catalog order.
pub async fn list_activities(
    State(directory): State<Directory>,
) -> Json<IndexMap<String, Activity>> {
    Json(directory.snapshot())
}

/// `POST /activities/{activity_name}/signup?email=...` — sign a
/// participant up. The activity name arrives percent-decoded from the
/// path extractor.
///
/// # Errors
/// 404 if the activity does not exist, 400 if the email is already
/// signed up.
pub async fn sign_up(
    State(directory): State<Directory>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParams>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(e) = directory.sign_up(&activity_name, &params.email) {
        debug!(activity = %activity_name, email = %params.email, error = %e, "signup rejected");
        return Err(e.into());
    }
    Ok(Json(Confirmation {
        message: format!("Signed up {} for {}", params.email, activity_name),
    }))
}

/// `DELETE /activities/{activity_name}/unregister?email=...` — remove
/// a participant.
///
/// # Errors
/// 404 if the activity does not exist, 400 if the email is not
/// currently signed up.
pub async fn unregister(
    State(directory): State<Directory>,
    Path(activity_name): Path<String>,
    Query(params): Query<EmailParams>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(e) = directory.unregister(&activity_name, &params.email) {
        debug!(activity = %activity_name, email = %params.email, error = %e, "unregister rejected");
        return Err(e.into());
    }
    Ok(Json(Confirmation {
        message: format!("Unregistered {} from {}", params.email, activity_name),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(
            Arc::new(ActivityDirectory::seeded()),
            PathBuf::from("static"),
        )
    }

    #[tokio::test]
    async fn root_redirects_to_static_index() {
        let app = test_router();
        let req = match Request::builder().uri("/").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|hv| hv.to_str().ok());
        assert_eq!(location, Some("/static/index.html"));
    }

    #[tokio::test]
    async fn signup_without_email_param_is_a_client_error() {
        let app = test_router();
        let req = match Request::builder()
            .method("POST")
            .uri("/activities/Basketball/signup")
            .body(Body::empty())
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert!(
            resp.status().is_client_error(),
            "missing email must be rejected, got {}",
            resp.status()
        );
    }

    #[test]
    fn confirmation_serializes_message_field() {
        let confirmation = Confirmation {
            message: "Signed up a@mergington.edu for Chess Club".to_owned(),
        };
        let json = match serde_json::to_string(&confirmation) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert!(json.contains("\"message\""), "missing message field");
    }
}
