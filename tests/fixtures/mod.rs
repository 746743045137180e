//! Test Fixtures for openstack-reachability
//!
//! Provides a static compute-provider double and on-disk inventory fixtures
//! so reconciliation tests run without contacting real infrastructure.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use async_trait::async_trait;
use std::io::Write;
use tempfile::NamedTempFile;

use openstack_reachability::{ComputeProvider, ProviderError, ServerRecord};

/// Provider double that serves a fixed server listing
pub struct StaticCompute {
    servers: Vec<ServerRecord>,
}

impl StaticCompute {
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            servers: names.iter().map(|name| ServerRecord::new(*name)).collect(),
        }
    }
}

#[async_trait]
impl ComputeProvider for StaticCompute {
    async fn list_servers(&self) -> Result<Vec<ServerRecord>, ProviderError> {
        Ok(self.servers.clone())
    }
}

/// Provider double whose listing call always fails
pub struct FailingCompute;

#[async_trait]
impl ComputeProvider for FailingCompute {
    async fn list_servers(&self) -> Result<Vec<ServerRecord>, ProviderError> {
        Err(ProviderError::Request("connection refused".to_string()))
    }
}

/// Install the env-filtered test subscriber; safe to call from every test
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Write inventory text to a temp file; the file lives as long as the handle
pub fn inventory_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create inventory fixture");
    file.write_all(content.as_bytes())
        .expect("Failed to write inventory fixture");
    file
}
