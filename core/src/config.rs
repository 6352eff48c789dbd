use std::time::Duration;

/// Production host of the API.
pub const DEFAULT_API_ROOT: &str = "https://www.goodreads.com";

/// Static settings shared by every call a client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    /// Base URL without a trailing slash.
    pub api_root: String,
    /// Whole-request deadline, applied by the default transport only.
    pub timeout: Option<Duration>,
    /// Log request URLs at `info` instead of `debug`.
    pub verbose: bool,
}

impl ClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_root: DEFAULT_API_ROOT.to_string(),
            timeout: None,
            verbose: false,
        }
    }

    pub fn with_api_root(mut self, api_root: &str) -> Self {
        self.api_root = api_root.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
