//! Endpoints of the attendance server consumed by the client.

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Teacher,
    Student,
    Video,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "/login",
            Endpoint::Teacher => "/teacher",
            Endpoint::Student => "/student",
            Endpoint::Video => "/video",
        }
    }
}

/// Where the attendance server lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `endpoint`.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let api = ApiConfig::default();
        assert_eq!(api.url(Endpoint::Login), "http://localhost:8000/login");
        assert_eq!(api.url(Endpoint::Video), "http://localhost:8000/video");
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let api = ApiConfig::new("https://clara.example.org:9000/");
        assert_eq!(api.base_url(), "https://clara.example.org:9000");
        assert_eq!(api.url(Endpoint::Teacher), "https://clara.example.org:9000/teacher");
    }

    #[test]
    fn blank_base_falls_back_to_default() {
        assert_eq!(ApiConfig::new("   "), ApiConfig::default());
    }
}
