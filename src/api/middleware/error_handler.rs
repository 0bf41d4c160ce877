//! Error handler for converting AppError to HTTP responses.
//!
//! This is the only place a domain error becomes a wire response.

use axum::{
    Json,
    http::{Method, Uri},
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                error = %self,
                causes = ?self.causes(),
                "Request failed"
            );
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

/// Fallback for unmatched routes, answering in the standard error format.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}

/// Fallback for a known path hit with an unsupported method.
///
/// Reported as a bad request; the error kinds have no method-level variant.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::bad_request(format!("Method {} not allowed for {}", method, uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_status_and_body_follow_kind() {
        let response = AppError::bad_request("Invalid JSON body").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "bad_request");
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "Invalid JSON body");
    }

    #[tokio::test]
    async fn test_route_not_found() {
        let response = route_not_found(Uri::from_static("/nowhere"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "No route for /nowhere");
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let response = method_not_allowed(Method::DELETE, Uri::from_static("/user/1"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "bad_request");
        assert_eq!(body["message"], "Method DELETE not allowed for /user/1");
    }
}
