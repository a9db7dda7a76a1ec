//! Endpoint configuration for the directory.

/// Where the directory fetches users from.
///
/// Production talks to the public randomuser.me generator; tests construct
/// a config pointing at a local mock server.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub api_base_url: String,
}

impl DirectoryConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    /// Full collection endpoint, e.g. `https://randomuser.me/api/`.
    pub fn api_url(&self) -> String {
        format!("{}/api/", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://randomuser.me".to_owned(),
        }
    }
}
