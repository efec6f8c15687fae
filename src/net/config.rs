//! API endpoint configuration.
//!
//! In the browser requests go to relative `/api/...` paths on the page's own
//! origin, so the default base URL is empty. Native callers point the client
//! at a server with `PORTAL_API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_BASE_URL_ENV: &str = "PORTAL_API_BASE_URL";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Build config from the environment.
    ///
    /// Optional:
    /// - `PORTAL_API_BASE_URL`: server origin, e.g. `https://app.example.org`
    ///   (default: empty, meaning same-origin relative paths)
    pub fn from_env() -> Self {
        Self::from_raw(std::env::var(API_BASE_URL_ENV).ok().as_deref())
    }

    fn from_raw(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::default, Self::new)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute (or same-origin) URL for an `/api/...` path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
