use axum::{extract::State, Json};

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::sepay_webhook_dto::SepayWebhookDto,
    models::{sepay_event::SepayEvent, webhook_response::WebhookResponse},
    service,
};

pub async fn receive_webhook(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<SepayWebhookDto>,
) -> Result<Json<WebhookResponse>, ApiError> {
    let event = SepayEvent::try_from(dto)?;

    match service::receive_webhook(event, &state.pool).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}
