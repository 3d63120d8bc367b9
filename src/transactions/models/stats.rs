use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_in: i64,
    pub total_out: i64,
    pub balance: i64,
}

impl Stats {
    pub fn new(total_in: i64, total_out: i64) -> Self {
        Self {
            total_in,
            total_out,
            balance: total_in.saturating_sub(total_out),
        }
    }
}
