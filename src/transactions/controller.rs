use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, util::multipart::multipart::get_form_data},
    AppState,
};

use super::{
    dtos::add_expense_dto::AddExpenseDto, errors::TransactionsApiError,
    models::transaction::Transaction, service,
};

pub async fn get_supporters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    match service::get_supporters(&state.pool).await {
        Ok(supporters) => Ok(Json(supporters)),
        Err(e) => Err(e),
    }
}

pub async fn add_expense(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let mut form_data = get_form_data(multipart).await?;

    let dto = AddExpenseDto::from_form_data(&form_data)?;
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    let Some(receipt) = form_data.take_file("file") else {
        return Err(TransactionsApiError::MissingReceipt.value());
    };

    match service::add_expense(&dto, &receipt, &state.envy.upload_dir(), &state.pool).await {
        Ok(transaction) => {
            tracing::info!(id = transaction.id, amount = transaction.amount, "expense recorded");
            Ok(Redirect::to("/"))
        }
        Err(e) => Err(e),
    }
}
