use std::env;
use std::time::Duration;

/// Deadlines for store operations
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deadline for a single fetch
    pub fetch_timeout: Duration,

    /// Deadline for a single put
    pub put_timeout: Duration,

    /// Deadline for each relocate step (copy, delete)
    pub relocate_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(600),    // 10 minutes
            put_timeout: Duration::from_secs(600),      // 10 minutes
            relocate_timeout: Duration::from_secs(600), // 10 minutes
        }
    }
}

impl ClientConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fetch deadline
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set the put deadline
    pub fn with_put_timeout(mut self, timeout: Duration) -> Self {
        self.put_timeout = timeout;
        self
    }

    /// Set the per-step relocate deadline
    pub fn with_relocate_timeout(mut self, timeout: Duration) -> Self {
        self.relocate_timeout = timeout;
        self
    }
}

/// Connection settings for the S3 backend
///
/// Anything left unset falls back to the SDK's default provider chain
/// (environment variables, profiles, instance metadata).
#[derive(Debug, Clone, Default)]
pub struct S3Config {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Path-style addressing, required by most S3-compatible services
    pub force_path_style: bool,
}

impl S3Config {
    /// Create an empty config; the SDK's provider chain supplies the rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from `STOWAGE_*` environment variables
    pub fn from_env() -> Self {
        fn get_env(key: &str) -> Option<String> {
            env::var(key).ok().filter(|value| !value.is_empty())
        }

        Self {
            region: get_env("STOWAGE_REGION"),
            endpoint_url: get_env("STOWAGE_ENDPOINT_URL"),
            access_key_id: get_env("STOWAGE_ACCESS_KEY_ID"),
            secret_access_key: get_env("STOWAGE_SECRET_ACCESS_KEY"),
            force_path_style: get_env("STOWAGE_ENDPOINT_URL").is_some(),
        }
    }

    /// Set the region
    pub fn with_region<S: Into<String>>(mut self, region: S) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set a custom endpoint URL (MinIO, RustFS, LocalStack)
    pub fn with_endpoint_url<S: Into<String>>(mut self, endpoint_url: S) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Set static credentials instead of the provider chain
    pub fn with_credentials<I: Into<String>, S: Into<String>>(
        mut self,
        access_key_id: I,
        secret_access_key: S,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Use path-style addressing
    pub fn force_path_style(mut self) -> Self {
        self.force_path_style = true;
        self
    }
}
