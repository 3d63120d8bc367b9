#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    In,
    Out,
}

impl TransactionType {
    pub fn value(&self) -> &str {
        match *self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}
