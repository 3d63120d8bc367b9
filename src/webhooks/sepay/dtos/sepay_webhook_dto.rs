use serde::Deserialize;

// https://docs.sepay.vn/tich-hop-webhooks.html
// Fields the ledger does not use (gateway, accountNumber, code, referenceCode...) are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SepayWebhookDto {
    pub id: Option<i64>,
    pub transfer_amount: Option<f64>,
    pub content: Option<String>,
    pub sub_account_name: Option<String>,
    pub transaction_date: Option<String>,
}
