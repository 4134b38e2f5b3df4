use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use solestock_analytics::MonthKey;
use solestock_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Parse an optional `?month=` value; blank means no filter.
pub fn parse_month(raw: Option<&str>) -> Result<Option<MonthKey>, axum::response::Response> {
    MonthKey::parse_filter(raw).map_err(|e| match e {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_month", msg),
        other => domain_error_to_response(other),
    })
}

pub fn parse_id<T>(raw: &str, what: &'static str) -> Result<T, axum::response::Response>
where
    T: core::str::FromStr<Err = DomainError>,
{
    raw.parse()
        .map_err(|_| json_error(StatusCode::BAD_REQUEST, "invalid_id", format!("invalid {what} id")))
}

/// Unwrap a JSON request body; missing, mistyped or unreadable fields are
/// reported like any other validation failure.
pub fn json_body<T>(
    body: Result<axum::Json<T>, JsonRejection>,
) -> Result<T, axum::response::Response> {
    body.map(|axum::Json(value)| value).map_err(|rejection| {
        let message = rejection.body_text();
        tracing::warn!(error = %message, "request body rejected");
        json_error(StatusCode::BAD_REQUEST, "validation_error", message)
    })
}
