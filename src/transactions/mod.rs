pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod memo;
pub mod models;
pub mod service;

pub static SUPPORTERS_LIMIT: i64 = 50;
/// Largest single amount accepted on either write path, one trillion units.
pub static MAX_AMOUNT: i64 = 1_000_000_000_000;
