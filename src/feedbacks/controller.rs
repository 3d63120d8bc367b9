use axum::{extract::State, http::StatusCode, response::Redirect};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::form_from_request::FormFromRequest},
    AppState,
};

use super::{dtos::send_feedback_dto::SendFeedbackDto, service};

pub async fn send_feedback(
    State(state): State<AppState>,
    FormFromRequest(dto): FormFromRequest<SendFeedbackDto>,
) -> Result<Redirect, ApiError> {
    let dto = dto.trimmed();
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::send_feedback(&dto, &state.pool).await {
        Ok(_) => Ok(Redirect::to("/feedback?success=1")),
        Err(e) => Err(e),
    }
}
