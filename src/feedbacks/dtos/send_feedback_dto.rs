use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SendFeedbackDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "name must be between 1 and 255 characters."
    ))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 5000,
        message = "content must be between 1 and 5000 characters."
    ))]
    pub content: String,
}

impl SendFeedbackDto {
    /// Surrounding whitespace does not count towards the length limits.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }
}
