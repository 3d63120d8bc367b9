use crate::{
    app::{models::api_error::ApiError, store::LedgerStore},
    transactions::{
        memo::{self, ParsedMemo},
        models::new_transaction::NewTransaction,
    },
};

use super::models::{sepay_event::SepayEvent, webhook_response::WebhookResponse};

/// Turns one provider callback into at most one IN row.
///
/// Transfers without the marker are someone else's account activity and are acknowledged
/// without touching the ledger. Deliveries are not deduplicated.
pub async fn receive_webhook<S: LedgerStore>(
    event: SepayEvent,
    store: &S,
) -> Result<WebhookResponse, ApiError> {
    if !memo::contains_marker(&event.content) {
        tracing::info!(id = ?event.id, "ignoring unrelated transfer");
        return Ok(WebhookResponse::ignored());
    }

    let parsed = match event.sub_account_name {
        Some(sender_name) => ParsedMemo {
            sender_name,
            description: memo::strip_marker(&event.content),
        },
        None => memo::parse_memo(&event.content),
    };

    let new = NewTransaction::incoming(
        event.amount,
        parsed.description,
        parsed.sender_name,
        event.transaction_date,
    );

    let transaction = store.insert_transaction(&new).await?;
    tracing::info!(
        id = ?event.id,
        transaction_id = transaction.id,
        amount = transaction.amount,
        "donation recorded"
    );

    Ok(WebhookResponse::success())
}
