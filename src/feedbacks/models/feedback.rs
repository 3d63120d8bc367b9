use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{app::util::time, feedbacks::dtos::send_feedback_dto::SendFeedbackDto};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    pub id: i32,
    pub name: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug)]
pub struct NewFeedback {
    pub name: String,
    pub content: String,
    pub created_at: String,
}

impl NewFeedback {
    pub fn new(dto: &SendFeedbackDto) -> Self {
        Self {
            name: dto.name.to_string(),
            content: dto.content.to_string(),
            created_at: time::current_timestamp(),
        }
    }
}
