use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookResponse {
    pub status: String,
    pub message: String,
}

impl WebhookResponse {
    pub fn ignored() -> Self {
        Self {
            status: "ignored".to_string(),
            message: "Giao dịch vãng lai".to_string(),
        }
    }

    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: "Đã lưu giao dịch".to_string(),
        }
    }
}
