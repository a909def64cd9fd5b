use serde::Deserialize;
use url::Url;

/// Root of the production feeds/comments API
pub const API_BASE_URL: &str = "http://www.buzzfeed.com/api/v2";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Replaces the production API root; lets the client point at a mock
    /// or staging server
    pub api_base_url: Option<String>,
}

impl AppConfig {
    pub fn from_file(file_name: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(file_name)?;
        Self::from_str(&contents)
    }

    pub fn from_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: AppConfig = serde_json::from_str(contents)?;

        // A configured root must at least be an absolute URL
        if let Some(base_url) = &config.api_base_url {
            Url::parse(base_url)?;
        }

        Ok(config)
    }

    /// API root with any trailing slash trimmed, so request URLs can be
    /// assembled segment by segment
    #[must_use]
    pub fn get_api_base_url(&self) -> String {
        let base_url = self
            .api_base_url
            .clone()
            .unwrap_or_else(|| API_BASE_URL.to_string());
        base_url.trim_end_matches('/').to_string()
    }
}
