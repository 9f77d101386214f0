use crate::prelude::*;

pub mod components;
pub mod issues;

/// Tracker connection settings resolved by the CLI layer
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub project: String,
}

impl JiraConfig {
    /// Build the configuration from the CLI-provided base URL and project
    pub fn new(base_url: &str, project: &str) -> Self {
        // Handle base_url that may or may not have trailing slash
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project: project.to_string(),
        }
    }
}

/// Create an HTTP client with JSON headers
pub fn create_client() -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}
