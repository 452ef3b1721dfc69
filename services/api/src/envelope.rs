//! Response envelope shared by every endpoint

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Uniform JSON wrapper returned by all handlers
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiEnvelope<T> {
    /// Build a success envelope carrying `data`
    pub fn ok(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            code: status.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiEnvelope<serde_json::Value> {
    /// Build a failure envelope with no data
    pub fn fail(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiEnvelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_carries_data() {
        let envelope = ApiEnvelope::ok(StatusCode::CREATED, "created", json!({"id": "1"}));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["code"], 201);
        assert_eq!(value["message"], "created");
        assert_eq!(value["data"]["id"], "1");
    }

    #[test]
    fn failure_envelope_omits_data() {
        let envelope = ApiEnvelope::fail(StatusCode::NOT_FOUND, "missing");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["code"], 404);
        assert_eq!(value["message"], "missing");
        assert!(value.get("data").is_none());
    }
}
