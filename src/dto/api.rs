//! Uniform response envelope returned by every API endpoint.

use serde::Serialize;

/// Envelope wrapping every API payload: `{status, message, data, code?}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data: Some(data),
            code: None,
        }
    }
}

impl ApiResponse<String> {
    /// Failure response; the stringified cause travels in `data`.
    pub fn error(message: impl Into<String>, cause: impl ToString) -> Self {
        Self {
            status: "error",
            message: message.into(),
            data: Some(cause.to_string()),
            code: None,
        }
    }
}

impl ApiResponse<()> {
    /// Not-found response with an explicit 404 code and no payload.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            data: None,
            code: Some(404),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_code() {
        let response = ApiResponse::success("ok", 1);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "ok");
        assert_eq!(value["data"], 1);
        assert!(value.get("code").is_none());
    }

    #[test]
    fn error_envelope_carries_cause() {
        let response = ApiResponse::error("failed", "boom");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["data"], "boom");
    }

    #[test]
    fn not_found_envelope_sets_code_and_null_data() {
        let response = ApiResponse::not_found("missing");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["code"], 404);
        assert!(value["data"].is_null());
    }
}
