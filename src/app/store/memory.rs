use std::sync::Mutex;

use crate::{
    app::models::api_error::ApiError,
    feedbacks::models::feedback::{Feedback, NewFeedback},
    transactions::{
        enums::transaction_type::TransactionType,
        models::{new_transaction::NewTransaction, stats::Stats, transaction::Transaction},
    },
};

use super::LedgerStore;

/// Vec-backed store for service tests.
#[derive(Default)]
pub struct MemoryStore {
    pub transactions: Mutex<Vec<Transaction>>,
    pub feedbacks: Mutex<Vec<Feedback>>,
}

impl MemoryStore {
    pub fn transaction_count(&self) -> usize {
        self.transactions.lock().unwrap().len()
    }
}

impl LedgerStore for MemoryStore {
    async fn insert_transaction(&self, new: &NewTransaction) -> Result<Transaction, ApiError> {
        let mut transactions = self.transactions.lock().unwrap();
        let transaction = Transaction {
            id: transactions.len() as i32 + 1,
            kind: new.kind.value().to_string(),
            amount: new.amount,
            description: new.description.to_string(),
            sender_name: new.sender_name.to_owned(),
            image_path: new.image_path.to_owned(),
            created_at: new.created_at.to_string(),
        };

        transactions.push(transaction.clone());

        Ok(transaction)
    }

    async fn get_transactions(
        &self,
        kind: TransactionType,
        limit: Option<i64>,
    ) -> Result<Vec<Transaction>, ApiError> {
        let transactions = self.transactions.lock().unwrap();
        let limit = limit.map(|l| l as usize).unwrap_or(usize::MAX);

        Ok(transactions
            .iter()
            .rev()
            .filter(|t| t.kind == kind.value())
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_stats(&self) -> Result<Stats, ApiError> {
        let transactions = self.transactions.lock().unwrap();
        let sum = |kind: TransactionType| -> i64 {
            transactions
                .iter()
                .filter(|t| t.kind == kind.value())
                .fold(0i64, |total, t| total.saturating_add(t.amount))
        };

        Ok(Stats::new(
            sum(TransactionType::In),
            sum(TransactionType::Out),
        ))
    }

    async fn insert_feedback(&self, new: &NewFeedback) -> Result<Feedback, ApiError> {
        let mut feedbacks = self.feedbacks.lock().unwrap();
        let feedback = Feedback {
            id: feedbacks.len() as i32 + 1,
            name: new.name.to_string(),
            content: new.content.to_string(),
            created_at: new.created_at.to_string(),
        };

        feedbacks.push(feedback.clone());

        Ok(feedback)
    }
}
