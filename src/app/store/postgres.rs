use sqlx::PgPool;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    feedbacks::models::feedback::{Feedback, NewFeedback},
    transactions::{
        enums::transaction_type::TransactionType,
        models::{new_transaction::NewTransaction, stats::Stats, transaction::Transaction},
    },
};

use super::LedgerStore;

/// Creates both tables when they do not exist yet. Existing tables are left untouched.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS transactions (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL,
            amount BIGINT NOT NULL,
            description TEXT NOT NULL,
            sender_name TEXT,
            image_path TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS feedbacks (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

impl LedgerStore for PgPool {
    async fn insert_transaction(&self, new: &NewTransaction) -> Result<Transaction, ApiError> {
        let sqlx_result = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                type, amount, description, sender_name, image_path, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new.kind.value())
        .bind(new.amount)
        .bind(&new.description)
        .bind(&new.sender_name)
        .bind(&new.image_path)
        .bind(&new.created_at)
        .fetch_one(self)
        .await;

        match sqlx_result {
            Ok(transaction) => Ok(transaction),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn get_transactions(
        &self,
        kind: TransactionType,
        limit: Option<i64>,
    ) -> Result<Vec<Transaction>, ApiError> {
        let mut sql = "SELECT * FROM transactions WHERE type = $1 ORDER BY id DESC".to_string();

        if limit.is_some() {
            sql.push_str(" LIMIT $2");
        }

        let mut sqlx = sqlx::query_as::<_, Transaction>(&sql).bind(kind.value());

        if let Some(limit) = limit {
            sqlx = sqlx.bind(limit);
        }

        match sqlx.fetch_all(self).await {
            Ok(transactions) => Ok(transactions),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn get_stats(&self) -> Result<Stats, ApiError> {
        // SUM over BIGINT yields NUMERIC in postgres; clamp before the cast so it cannot fail.
        let sqlx_result = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT
                LEAST(COALESCE(SUM(amount) FILTER (WHERE type = 'IN'), 0), 9223372036854775807)::BIGINT,
                LEAST(COALESCE(SUM(amount) FILTER (WHERE type = 'OUT'), 0), 9223372036854775807)::BIGINT
            FROM transactions
            "#,
        )
        .fetch_one(self)
        .await;

        match sqlx_result {
            Ok((total_in, total_out)) => Ok(Stats::new(total_in, total_out)),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    async fn insert_feedback(&self, new: &NewFeedback) -> Result<Feedback, ApiError> {
        let sqlx_result = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedbacks (name, content, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.content)
        .bind(&new.created_at)
        .fetch_one(self)
        .await;

        match sqlx_result {
            Ok(feedback) => Ok(feedback),
            Err(e) => {
                tracing::error!(%e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }
}
