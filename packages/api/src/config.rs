//! Client configuration. The base URL is fixed at build time; deployments
//! that need a different backend set `STUDYPORT_API_URL` when building.

const DEFAULT_BASE_URL: &str = "http://localhost:7070/api";

/// Frontend configuration for the portal API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads the base URL from the build-time environment, falling back to
    /// the local development default.
    pub fn load() -> Self {
        let base_url = option_env!("STUDYPORT_API_URL")
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);

        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Joins the base URL and a path, tolerant of stray slashes on either
    /// side.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        let path = path.trim().trim_start_matches('/');

        if base.is_empty() {
            path.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}
