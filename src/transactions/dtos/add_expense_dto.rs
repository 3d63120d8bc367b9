use serde::Deserialize;
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, util::multipart::models::form_data::FormData},
    transactions::errors::TransactionsApiError,
};

#[derive(Debug, Deserialize, Validate)]
pub struct AddExpenseDto {
    #[validate(range(
        min = 0,
        max = 1000000000000,
        message = "amount must be between 0 and 1,000,000,000,000."
    ))]
    pub amount: i64,
    #[validate(length(
        min = 1,
        max = 65535,
        message = "description must be between 1 and 65535 characters."
    ))]
    pub description: String,
}

impl AddExpenseDto {
    pub fn from_form_data(form_data: &FormData) -> Result<Self, ApiError> {
        let Some(amount) = form_data.field("amount") else {
            return Err(TransactionsApiError::MissingAmount.value());
        };
        let Ok(amount) = amount.trim().parse::<i64>() else {
            return Err(TransactionsApiError::InvalidAmount.value());
        };

        Ok(Self {
            amount,
            description: form_data.field("description").unwrap_or_default().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    fn form(fields: &[(&str, &str)]) -> FormData {
        let mut form_data = FormData::default();
        for (name, value) in fields {
            form_data.fields.insert(name.to_string(), value.to_string());
        }
        form_data
    }

    #[test]
    fn test_from_form_data() {
        let dto = AddExpenseDto::from_form_data(&form(&[
            ("amount", " 150000 "),
            ("description", "Tien dien"),
        ]))
        .unwrap();

        assert_eq!(dto.amount, 150000);
        assert_eq!(dto.description, "Tien dien");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_amount_must_be_integer() {
        let missing = AddExpenseDto::from_form_data(&form(&[("description", "x")])).unwrap_err();
        let decimal =
            AddExpenseDto::from_form_data(&form(&[("amount", "12.5"), ("description", "x")]))
                .unwrap_err();

        assert_eq!(missing.code, StatusCode::BAD_REQUEST);
        assert_eq!(decimal.code, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_amount_above_bound_fails_validation() {
        let dto = AddExpenseDto::from_form_data(&form(&[
            ("amount", "5000000000000000000"),
            ("description", "x"),
        ]))
        .unwrap();

        assert!(dto.validate().is_err());
        assert!(AddExpenseDto {
            amount: crate::transactions::MAX_AMOUNT,
            description: "x".to_string(),
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_missing_description_fails_validation() {
        let dto = AddExpenseDto::from_form_data(&form(&[("amount", "10")])).unwrap();

        assert!(dto.validate().is_err());
    }
}
