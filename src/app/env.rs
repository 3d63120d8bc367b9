use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub database_url: String,
    #[serde(default = "default_database_max_connections")]
    pub database_max_connections: u32,

    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    #[serde(default = "default_rate_limit_per_sec")]
    pub rate_limit_per_sec: u64,
}

impl Envy {
    /// Directory receipts are written to. Always served under `/static/uploads`.
    pub fn upload_dir(&self) -> PathBuf {
        self.static_dir.join("uploads")
    }
}

fn default_database_max_connections() -> u32 {
    10
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_pages_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_rate_limit_per_sec() -> u64 {
    50
}
