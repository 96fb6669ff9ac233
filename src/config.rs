//! Backend location for REST calls.
//!
//! The default is same-origin: requests use relative paths and the browser
//! attaches the session cookie itself. A different origin can be baked in at
//! build time through `NEWSLETTER_API_BASE`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin prefix without a trailing slash. Empty means same-origin.
    pub base_url: String,
}

impl ApiConfig {
    /// Config compiled into this build (`NEWSLETTER_API_BASE`), or same-origin.
    pub fn from_build_env() -> Self {
        Self::from_base(option_env!("NEWSLETTER_API_BASE"))
    }

    pub fn from_base(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .map(|s| s.trim_end_matches('/'))
            .unwrap_or_default()
            .to_owned();
        Self { base_url }
    }

    /// Full URL for an absolute API path such as `/api/login`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
