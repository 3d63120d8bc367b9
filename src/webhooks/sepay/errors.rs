use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum WebhooksApiError {
    MissingTransferAmount,
    InvalidTransferAmount,
    MissingContent,
    MissingTransactionDate,
}

impl WebhooksApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingTransferAmount => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "transferAmount is required.".to_string(),
            },
            Self::InvalidTransferAmount => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "transferAmount must be between 0 and 1,000,000,000,000.".to_string(),
            },
            Self::MissingContent => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "content is required.".to_string(),
            },
            Self::MissingTransactionDate => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "transactionDate is required.".to_string(),
            },
        }
    }
}
