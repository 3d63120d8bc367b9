use chrono::Local;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Server local time, minute precision, as stored in `created_at` columns.
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
