// Runtime configuration shared across layers

/// Upper bound for any `limit` query parameter.
pub const MAX_LIST_LIMIT: usize = 200;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    /// Snapshot file; `None` keeps the dataset in memory only.
    pub data_path: Option<String>,
    pub seed_path: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_list_limit: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3400".to_string(),
            data_path: None,
            seed_path: None,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            default_list_limit: 50,
        }
    }
}
