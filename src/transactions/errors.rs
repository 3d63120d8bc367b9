use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    MissingAmount,
    InvalidAmount,
    MissingReceipt,
    ReceiptNotImage,
    InvalidReceiptName,
    FailedToStoreReceipt,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingAmount => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "amount is required.".to_string(),
            },
            Self::InvalidAmount => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "amount must be a whole number.".to_string(),
            },
            Self::MissingReceipt => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "A receipt image is required.".to_string(),
            },
            Self::ReceiptNotImage => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Receipt must be of type image.".to_string(),
            },
            Self::InvalidReceiptName => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Receipt has no usable file name.".to_string(),
            },
            Self::FailedToStoreReceipt => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to store receipt.".to_string(),
            },
        }
    }
}
