use std::path::Path;

use crate::app::{
    models::api_error::ApiError, store::LedgerStore,
    util::multipart::models::file_properties::FileProperties,
};

use super::{
    dtos::add_expense_dto::AddExpenseDto,
    enums::transaction_type::TransactionType,
    errors::TransactionsApiError,
    models::{
        home_feed::HomeFeed, new_transaction::NewTransaction, stats::Stats,
        transaction::Transaction,
    },
    SUPPORTERS_LIMIT,
};

/// Public path prefix receipts are reachable under.
pub static RECEIPTS_PATH: &str = "static/uploads";

pub async fn get_stats<S: LedgerStore>(store: &S) -> Result<Stats, ApiError> {
    store.get_stats().await
}

pub async fn get_home_feed<S: LedgerStore>(store: &S) -> Result<HomeFeed, ApiError> {
    let stats = get_stats(store).await?;
    let feed = store.get_transactions(TransactionType::Out, None).await?;

    Ok(HomeFeed::new(stats, feed))
}

pub async fn get_supporters<S: LedgerStore>(store: &S) -> Result<Vec<Transaction>, ApiError> {
    store
        .get_transactions(TransactionType::In, Some(SUPPORTERS_LIMIT))
        .await
}

/// Writes the receipt under `upload_dir` and appends the OUT row pointing at it.
///
/// Receipts are stored by their uploaded file name, so a second upload with the same name
/// replaces the first file.
pub async fn add_expense<S: LedgerStore>(
    dto: &AddExpenseDto,
    receipt: &FileProperties,
    upload_dir: &Path,
    store: &S,
) -> Result<Transaction, ApiError> {
    if !receipt.is_image() {
        return Err(TransactionsApiError::ReceiptNotImage.value());
    }

    if let Err(e) = imagesize::blob_size(&receipt.data) {
        tracing::debug!(?e, "receipt is not a readable image");
        return Err(TransactionsApiError::ReceiptNotImage.value());
    }

    let Some(file_name) = receipt_file_name(&receipt.file_name) else {
        return Err(TransactionsApiError::InvalidReceiptName.value());
    };

    if let Err(e) = tokio::fs::create_dir_all(upload_dir).await {
        tracing::error!(%e);
        return Err(TransactionsApiError::FailedToStoreReceipt.value());
    }

    if let Err(e) = tokio::fs::write(upload_dir.join(file_name), &receipt.data).await {
        tracing::error!(%e);
        return Err(TransactionsApiError::FailedToStoreReceipt.value());
    }

    let new = NewTransaction::outgoing(
        dto.amount,
        dto.description.to_string(),
        [RECEIPTS_PATH, "/", file_name].concat(),
    );

    store.insert_transaction(&new).await
}

/// Last path component of a client supplied file name, so uploads cannot leave `upload_dir`.
fn receipt_file_name(file_name: &str) -> Option<&str> {
    let name = file_name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();

    match name {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}
