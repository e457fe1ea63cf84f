/// Defaults loaded from environment variables (and `.env`)
pub struct Settings {
    pub min_allowed_ram: String,
    pub max_allowed_ram: String,
    pub log_filter: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            min_allowed_ram: std::env::var("HEAP_PERCENT_MIN").unwrap_or_else(|_| "2GiB".into()),
            max_allowed_ram: std::env::var("HEAP_PERCENT_MAX").unwrap_or_else(|_| "30GiB".into()),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_allowed_ram: "2GiB".into(),
            max_allowed_ram: "30GiB".into(),
            log_filter: "warn".into(),
        }
    }
}
