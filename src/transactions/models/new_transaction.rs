use crate::{app::util::time, transactions::enums::transaction_type::TransactionType};

/// A row about to be appended.
///
/// Built only through [`NewTransaction::incoming`] and [`NewTransaction::outgoing`], so an IN row
/// always carries a sender and an OUT row always carries a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: i64,
    pub description: String,
    pub sender_name: Option<String>,
    pub image_path: Option<String>,
    pub created_at: String,
}

impl NewTransaction {
    /// A donation. `created_at` is the provider's own timestamp, kept verbatim.
    pub fn incoming(amount: i64, description: String, sender_name: String, created_at: String) -> Self {
        Self {
            kind: TransactionType::In,
            amount,
            description,
            sender_name: Some(sender_name),
            image_path: None,
            created_at,
        }
    }

    pub fn outgoing(amount: i64, description: String, image_path: String) -> Self {
        Self {
            kind: TransactionType::Out,
            amount,
            description,
            sender_name: None,
            image_path: Some(image_path),
            created_at: time::current_timestamp(),
        }
    }
}
