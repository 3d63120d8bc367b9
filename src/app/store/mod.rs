use crate::{
    feedbacks::models::feedback::{Feedback, NewFeedback},
    transactions::{
        enums::transaction_type::TransactionType,
        models::{new_transaction::NewTransaction, stats::Stats, transaction::Transaction},
    },
};

use super::models::api_error::ApiError;

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Append-only storage for ledger rows and feedback.
///
/// Every call is a single round trip; implementations acquire whatever connection they need
/// for the duration of the call only.
pub trait LedgerStore {
    async fn insert_transaction(&self, new: &NewTransaction) -> Result<Transaction, ApiError>;

    /// Rows of one direction, newest first.
    async fn get_transactions(
        &self,
        kind: TransactionType,
        limit: Option<i64>,
    ) -> Result<Vec<Transaction>, ApiError>;

    async fn get_stats(&self) -> Result<Stats, ApiError>;

    async fn insert_feedback(&self, new: &NewFeedback) -> Result<Feedback, ApiError>;
}
