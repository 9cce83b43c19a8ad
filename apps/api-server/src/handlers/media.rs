//! Media pre-signed URL endpoint.
//!
//! One path, dispatched on the HTTP verb. The body carries the object key
//! (GET, DELETE) or `{name, type}` (PUT); the response carries a URL the
//! client uses directly against the bucket.

use actix_web::{HttpRequest, HttpResponse, http::Method, web};

use lms_core::domain::PresignRequest;
use lms_shared::dto::{MessageResponse, SignedUrlResponse, UploadUrlRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Largest accepted request body (5 GiB).
pub const MAX_BODY_BYTES: u64 = 5 * 1024 * 1024 * 1024;

/// [`MAX_BODY_BYTES`] as a payload limit, saturating on 32-bit targets.
pub fn max_body_bytes() -> usize {
    usize::try_from(MAX_BODY_BYTES).unwrap_or(usize::MAX)
}

/// GET | PUT | DELETE /api/media
pub async fn handle(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let messages = &state.file_messages;

    let (request, success, failure) = match *req.method() {
        Method::GET => (
            PresignRequest::get(object_key(&body)),
            &messages.get_one_success,
            &messages.get_one_failed,
        ),
        Method::PUT => {
            let upload: UploadUrlRequest = serde_json::from_slice(&body)
                .map_err(|e| AppError::BadRequest(format!("Invalid upload request: {e}")))?;
            (
                PresignRequest::put(upload.name, upload.content_type),
                &messages.create_success,
                &messages.create_failed,
            )
        }
        Method::DELETE => (
            PresignRequest::delete(object_key(&body)),
            &messages.delete_success,
            &messages.delete_failed,
        ),
        ref other => {
            return Ok(HttpResponse::MethodNotAllowed()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Method {other} not allowed")));
        }
    };

    match state.signer.presign(&request).await {
        Ok(url) => Ok(HttpResponse::Ok().json(SignedUrlResponse {
            message: success.clone(),
            url,
        })),
        Err(e) => {
            tracing::error!(
                operation = %request.operation,
                key = %request.key,
                error = %e,
                "Failed to issue pre-signed URL"
            );
            Ok(HttpResponse::InternalServerError().json(MessageResponse {
                message: failure.clone(),
            }))
        }
    }
}

/// The raw body is the key. A JSON string literal is unwrapped so clients
/// that `JSON.stringify` the key get the same object.
fn object_key(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    serde_json::from_str::<String>(text).unwrap_or_else(|_| text.to_string())
}
