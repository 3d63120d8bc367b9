use crate::app::{models::api_error::ApiError, store::LedgerStore};

use super::{
    dtos::send_feedback_dto::SendFeedbackDto,
    models::feedback::{Feedback, NewFeedback},
};

pub async fn send_feedback<S: LedgerStore>(
    dto: &SendFeedbackDto,
    store: &S,
) -> Result<Feedback, ApiError> {
    store.insert_feedback(&NewFeedback::new(dto)).await
}
