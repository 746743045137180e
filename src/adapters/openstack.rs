//! OpenStack Nova Compute Adapter
//!
//! Implements the ComputeProvider port against the Nova REST API
//! (`GET /servers/detail`), authenticating with a pre-issued token.
//!
//! Nova paginates large listings via `servers_links`; this adapter follows
//! `next` links until the listing is exhausted so the reconciler always sees
//! the full server set.
//!
//! # Example
//!
//! ```rust,no_run
//! use openstack_reachability::adapters::{OpenStackCompute, OpenStackConfig};
//! use openstack_reachability::check_reachability;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = OpenStackConfig {
//!         compute_url: "http://controller:8774/v2.1".to_string(),
//!         auth_token: "your-token-here".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let provider = OpenStackCompute::new(config)?;
//!     let report = check_reachability(&provider, "app", "inventory.ini", None).await?;
//!     println!("unreachable: {:?}", report.unreachable);
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::provider::{ComputeProvider, ProviderError, ServerRecord};

/// Configuration for the Nova connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenStackConfig {
    /// Compute endpoint base URL (e.g., "http://controller:8774/v2.1")
    pub compute_url: String,

    /// Pre-issued Keystone token
    pub auth_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for OpenStackConfig {
    fn default() -> Self {
        Self {
            compute_url: "http://localhost:8774/v2.1".to_string(),
            auth_token: String::new(),
            timeout_secs: 30,
        }
    }
}

/// One page of a Nova server listing
#[derive(Debug, Deserialize)]
struct ServerPage {
    servers: Vec<NovaServer>,
    #[serde(default)]
    servers_links: Vec<PageLink>,
}

#[derive(Debug, Deserialize)]
struct NovaServer {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PageLink {
    rel: String,
    href: String,
}

/// Nova-backed implementation of the ComputeProvider port
pub struct OpenStackCompute {
    config: OpenStackConfig,
    client: Client,
}

impl OpenStackCompute {
    /// Create a new Nova compute adapter
    pub fn new(config: OpenStackConfig) -> Result<Self, ProviderError> {
        info!("Connecting to Nova at {}", config.compute_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    "X-Auth-Token",
                    config.auth_token.parse().map_err(|e| {
                        ProviderError::Authentication(format!("Invalid auth token: {}", e))
                    })?,
                );
                headers
            })
            .build()
            .map_err(|e| {
                ProviderError::Request(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    async fn fetch_page(&self, url: &str) -> Result<ServerPage, ProviderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Request(format!("Nova API error: {}", e)))?;

        match response.status() {
            status if status.is_success() => {
                let page = response.json::<ServerPage>().await.map_err(|e| {
                    ProviderError::MalformedResponse(format!("Nova server listing: {}", e))
                })?;
                debug!("Fetched {} servers from {}", page.servers.len(), url);
                Ok(page)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ProviderError::Authentication(format!(
                    "Nova rejected token: {}",
                    response.status()
                )))
            }
            status => {
                let body = response.text().await.unwrap_or_else(|_| "".to_string());
                Err(ProviderError::Request(format!(
                    "Nova API returned {}: {}",
                    status, body
                )))
            }
        }
    }
}

#[async_trait]
impl ComputeProvider for OpenStackCompute {
    async fn list_servers(&self) -> Result<Vec<ServerRecord>, ProviderError> {
        let mut url = format!("{}/servers/detail", self.config.compute_url);
        let mut all = Vec::new();

        loop {
            let page = self.fetch_page(&url).await?;
            all.extend(
                page.servers
                    .into_iter()
                    .map(|server| ServerRecord::new(server.name)),
            );

            match page.servers_links.into_iter().find(|link| link.rel == "next") {
                Some(next) => url = next.href,
                None => break,
            }
        }

        debug!("Listed {} servers from Nova", all.len());
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = OpenStackConfig::default();
        assert_eq!(config.compute_url, "http://localhost:8774/v2.1");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_server_page_deserialization() {
        let page: ServerPage = serde_json::from_str(
            r#"{
                "servers": [
                    {"id": "a1", "name": "app_dev1", "status": "ACTIVE"},
                    {"id": "a2", "name": "app_dev2", "status": "SHUTOFF"}
                ],
                "servers_links": [
                    {"rel": "next", "href": "http://controller:8774/v2.1/servers/detail?marker=a2"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.servers.len(), 2);
        assert_eq!(page.servers[0].name, "app_dev1");
        assert_eq!(page.servers_links[0].rel, "next");
    }

    #[test]
    fn test_server_page_without_links() {
        let page: ServerPage =
            serde_json::from_str(r#"{"servers": [{"name": "app_dev1"}]}"#).unwrap();
        assert!(page.servers_links.is_empty());
    }
}
