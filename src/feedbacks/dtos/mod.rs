pub mod send_feedback_dto;
