use actix_web::{Error, HttpRequest, web};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Acknowledgement for actions that return no resource.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

/// `?user_id=` override for the acting user.
#[derive(Debug, Default, Deserialize)]
pub struct ActingUserQuery {
    pub user_id: Option<String>,
}

impl ActingUserQuery {
    /// The requested user, or `default_id` when the query has none.
    pub fn resolve(&self, default_id: &str) -> String {
        self.user_id
            .clone()
            .unwrap_or_else(|| default_id.to_string())
    }
}

/// Reject malformed JSON bodies with the usual `{"error": ...}` shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| -> Error {
        log::warn!("Rejected request body: {}", err);
        AppError::bad_request(format!("Invalid request body: {}", err)).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| -> Error {
        AppError::bad_request(format!("Invalid query string: {}", err)).into()
    })
}
