//! Response Envelope
//!
//! Every endpoint answers with the same JSON shape, on success and on
//! failure:
//!
//! ```json
//! { "status_code": 200, "is_successful": true, "error_messages": [], "result": {} }
//! ```

use salvo::{
    http::StatusCode,
    prelude::{Json, Response},
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Uniform response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    pub status_code: u16,
    pub is_successful: bool,
    pub error_messages: Vec<String>,
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    fn success(status: StatusCode, result: Option<T>) -> Self {
        Self {
            status_code: status.as_u16(),
            is_successful: true,
            error_messages: Vec::new(),
            result,
        }
    }

    /// 200 carrying `result`.
    pub(crate) fn ok(result: T) -> Self {
        Self::success(StatusCode::OK, Some(result))
    }

    /// 201 carrying the created resource.
    pub(crate) fn created(result: T) -> Self {
        Self::success(StatusCode::CREATED, Some(result))
    }

    /// 200 with no payload.
    pub(crate) fn empty() -> Self {
        Self::success(StatusCode::OK, None)
    }
}

impl<T: Serialize + Send> Scribe for Envelope<T> {
    fn render(self, res: &mut Response) {
        res.status_code(
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        );
        res.render(Json(self));
    }
}

/// Handler failure, rendered as an unsuccessful envelope.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// Malformed input or failed field validation.
    #[error("bad request: {}", .0.join("; "))]
    BadRequest(Vec<String>),

    #[error("not found")]
    NotFound,

    /// Anything unclassified. The message is returned to the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(vec![message.into()])
    }

    /// Duplicate-name rejection on create.
    pub(crate) fn name_exists(message: &str) -> Self {
        Self::bad_request(format!("NameExists: {message}"))
    }

    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_envelope(self) -> Envelope<()> {
        let status = self.status();

        let error_messages = match self {
            Self::BadRequest(messages) => messages,
            Self::NotFound => Vec::new(),
            Self::Internal(message) => vec![message],
        };

        Envelope {
            status_code: status.as_u16(),
            is_successful: false,
            error_messages,
            result: None,
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        if let Self::Internal(message) = &self {
            error!(error = %message, "request failed");
        }

        self.into_envelope().render(res);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn success_envelope_serializes_all_fields() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(Envelope::created(json!({ "id": 1 })))?;

        assert_eq!(
            value,
            json!({
                "status_code": 201,
                "is_successful": true,
                "error_messages": [],
                "result": { "id": 1 }
            })
        );

        Ok(())
    }

    #[test]
    fn empty_envelope_has_null_result() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(Envelope::<Value>::empty())?;

        assert_eq!(value["result"], Value::Null);
        assert_eq!(value["status_code"], 200);

        Ok(())
    }

    #[test]
    fn not_found_has_no_error_messages() {
        let envelope = ApiError::NotFound.into_envelope();

        assert_eq!(envelope.status_code, 404);
        assert!(!envelope.is_successful);
        assert!(envelope.error_messages.is_empty());
    }

    #[test]
    fn internal_error_carries_its_message() {
        let envelope = ApiError::Internal("pool timed out".to_string()).into_envelope();

        assert_eq!(envelope.status_code, 500);
        assert_eq!(envelope.error_messages, ["pool timed out"]);
    }

    #[test]
    fn name_exists_is_prefixed() {
        let envelope = ApiError::name_exists("taken").into_envelope();

        assert_eq!(envelope.status_code, 400);
        assert_eq!(envelope.error_messages, ["NameExists: taken"]);
    }
}
