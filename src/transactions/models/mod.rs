pub mod home_feed;
pub mod new_transaction;
pub mod stats;
pub mod transaction;
