//! Error types for the API crate.

use activities_core::DirectoryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during request handling.
///
/// Every error is returned to the caller as JSON with a `detail`
/// field holding the human-readable message.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// A directory operation was rejected.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Directory(DirectoryError::UnknownActivity { .. }) => StatusCode::NOT_FOUND,
            ApiError::Directory(
                DirectoryError::AlreadyRegistered { .. } | DirectoryError::NotRegistered { .. },
            ) => StatusCode::BAD_REQUEST,
            // `DirectoryError` is `#[non_exhaustive]`, so a fallback arm is
            // required even though all current variants are matched above.
            ApiError::Directory(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_status_codes_map_correctly() {
        let not_found = ApiError::from(DirectoryError::UnknownActivity {
            name: "Rocketry".to_owned(),
        });
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let duplicate = ApiError::from(DirectoryError::AlreadyRegistered {
            email: "a@mergington.edu".to_owned(),
            activity: "Chess Club".to_owned(),
        });
        assert_eq!(duplicate.into_response().status(), StatusCode::BAD_REQUEST);

        let absent = ApiError::from(DirectoryError::NotRegistered {
            email: "a@mergington.edu".to_owned(),
            activity: "Chess Club".to_owned(),
        });
        assert_eq!(absent.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_display_keeps_directory_wording() {
        let err = ApiError::from(DirectoryError::AlreadyRegistered {
            email: "a@mergington.edu".to_owned(),
            activity: "Chess Club".to_owned(),
        });
        let msg = err.to_string();
        assert!(
            msg.contains("already signed up"),
            "duplicate-signup detail must contain 'already signed up', got: {msg}"
        );
    }
}
