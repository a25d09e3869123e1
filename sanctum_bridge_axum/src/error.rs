use axum::Json;
use http::StatusCode;
use sanctum_bridge::BridgeError;
use serde_json::{Value, json};

const GENERIC_ERROR: &str = "Something went wrong";

/// Helper trait for converting errors to a status code and JSON error body
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<Value>)>;
}

/// Maps BridgeError variants to status codes; bodies never reveal backend details
impl<T> IntoResponseError<T> for Result<T, BridgeError> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<Value>)> {
        self.map_err(|e| match e {
            BridgeError::Authentication(failure) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": failure.user_message() })),
            ),
            BridgeError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors.errors })))
            }
            BridgeError::Registration(_)
            | BridgeError::Session(_)
            | BridgeError::Configuration(_) => {
                tracing::error!("Request failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": GENERIC_ERROR })),
                )
            }
        })
    }
}
