use crate::{
    app::models::api_error::ApiError,
    transactions::MAX_AMOUNT,
    webhooks::sepay::{dtos::sepay_webhook_dto::SepayWebhookDto, errors::WebhooksApiError},
};

/// A provider callback with every field the ledger needs present and checked.
#[derive(Debug, Clone, PartialEq)]
pub struct SepayEvent {
    pub id: Option<i64>,
    /// Whole currency units, rounded from the provider's decimal.
    pub amount: i64,
    pub content: String,
    /// `None` when the provider sent nothing usable.
    pub sub_account_name: Option<String>,
    pub transaction_date: String,
}

impl TryFrom<SepayWebhookDto> for SepayEvent {
    type Error = ApiError;

    fn try_from(dto: SepayWebhookDto) -> Result<Self, Self::Error> {
        let Some(transfer_amount) = dto.transfer_amount else {
            return Err(WebhooksApiError::MissingTransferAmount.value());
        };
        if !transfer_amount.is_finite()
            || transfer_amount < 0.0
            || transfer_amount > MAX_AMOUNT as f64
        {
            return Err(WebhooksApiError::InvalidTransferAmount.value());
        }

        let Some(content) = dto.content else {
            return Err(WebhooksApiError::MissingContent.value());
        };

        let Some(transaction_date) = dto
            .transaction_date
            .filter(|date| !date.trim().is_empty())
        else {
            return Err(WebhooksApiError::MissingTransactionDate.value());
        };

        let sub_account_name = dto
            .sub_account_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Self {
            id: dto.id,
            amount: transfer_amount.round() as i64,
            content,
            sub_account_name,
            transaction_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    fn dto() -> SepayWebhookDto {
        SepayWebhookDto {
            id: Some(92704),
            transfer_amount: Some(50000.0),
            content: Some("SEVQR Nam ung ho".to_string()),
            sub_account_name: None,
            transaction_date: Some("2024-07-02 11:09:00".to_string()),
        }
    }

    #[test]
    fn test_complete_payload_converts() {
        let event = SepayEvent::try_from(dto()).unwrap();

        assert_eq!(event.id, Some(92704));
        assert_eq!(event.amount, 50000);
        assert_eq!(event.content, "SEVQR Nam ung ho");
        assert_eq!(event.transaction_date, "2024-07-02 11:09:00");
    }

    #[test]
    fn test_decimal_amount_is_rounded() {
        let event = SepayEvent::try_from(SepayWebhookDto {
            transfer_amount: Some(10000.6),
            ..dto()
        })
        .unwrap();

        assert_eq!(event.amount, 10001);
    }

    #[test]
    fn test_missing_required_fields_are_client_errors() {
        let cases = [
            SepayWebhookDto {
                transfer_amount: None,
                ..dto()
            },
            SepayWebhookDto {
                transfer_amount: Some(-1.0),
                ..dto()
            },
            SepayWebhookDto {
                transfer_amount: Some(5.0e18),
                ..dto()
            },
            SepayWebhookDto {
                transfer_amount: Some(f64::NAN),
                ..dto()
            },
            SepayWebhookDto {
                content: None,
                ..dto()
            },
            SepayWebhookDto {
                transaction_date: Some("  ".to_string()),
                ..dto()
            },
        ];

        for case in cases {
            let e = SepayEvent::try_from(case).unwrap_err();
            assert_eq!(e.code, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_amount_at_upper_bound_is_accepted() {
        let event = SepayEvent::try_from(SepayWebhookDto {
            transfer_amount: Some(MAX_AMOUNT as f64),
            ..dto()
        })
        .unwrap();

        assert_eq!(event.amount, MAX_AMOUNT);
    }

    #[test]
    fn test_blank_sub_account_name_counts_as_absent() {
        let blank = SepayEvent::try_from(SepayWebhookDto {
            sub_account_name: Some("   ".to_string()),
            ..dto()
        })
        .unwrap();
        let named = SepayEvent::try_from(SepayWebhookDto {
            sub_account_name: Some(" QUY TU THIEN ".to_string()),
            ..dto()
        })
        .unwrap();

        assert_eq!(blank.sub_account_name, None);
        assert_eq!(named.sub_account_name.as_deref(), Some("QUY TU THIEN"));
    }
}
