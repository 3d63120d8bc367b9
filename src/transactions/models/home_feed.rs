use serde::Serialize;

use crate::app::util::format::format_amount;

use super::{stats::Stats, transaction::Transaction};

#[derive(Debug, Serialize)]
pub struct HomeFeed {
    pub stats: Stats,
    pub total_in: String,
    pub total_out: String,
    pub balance: String,
    pub feed: Vec<Transaction>,
}

impl HomeFeed {
    pub fn new(stats: Stats, feed: Vec<Transaction>) -> Self {
        Self {
            stats,
            total_in: format_amount(stats.total_in),
            total_out: format_amount(stats.total_out),
            balance: format_amount(stats.balance),
            feed,
        }
    }
}
