//! Success envelope shared by all endpoints.

use serde::Serialize;

/// `{status: "success", message?, data?}`
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }
}

impl SuccessResponse<()> {
    /// Acknowledgement without a payload.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: None,
        }
    }
}
