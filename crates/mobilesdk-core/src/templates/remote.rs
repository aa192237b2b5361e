//! Remote template registry document
//!
//! A YAML list of [`Template`](super::Template) records published alongside
//! the template repos, so new templates can appear without a plugin release.

use anyhow::{Context, Result};
use url::Url;

use super::Template;

/// Default location of the registry document
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/forcedotcom/SalesforceMobileSDK-Templates/master/templates.yaml";

/// Environment variable overriding the registry URL
pub const REGISTRY_URL_ENV: &str = "MOBILESDK_TEMPLATE_REGISTRY";

fn registry_url() -> Result<Url> {
    let url_str =
        std::env::var(REGISTRY_URL_ENV).unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string());
    Url::parse(&url_str).with_context(|| format!("Invalid template registry URL: {}", url_str))
}

/// Fetch and parse the registry document
pub async fn fetch_registry(user_agent: &str) -> Result<Vec<Template>> {
    let url = registry_url()?;
    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Failed to fetch template registry from {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!(
            "Failed to fetch template registry from {}: HTTP {}",
            url,
            response.status()
        );
    }

    let content = response.text().await?;
    parse_registry(&content)
}

fn parse_registry(content: &str) -> Result<Vec<Template>> {
    serde_yaml::from_str(content).context("Failed to parse template registry")
}
