//! Compute provider port
//!
//! The reconciler sees the cloud through exactly one operation: list the
//! server records visible to a connection. Concrete adapters live in
//! [`crate::adapters`]; tests substitute a double.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

use crate::domain::TagPattern;

/// Errors surfaced by a compute provider
///
/// These propagate unmodified to the caller. The reconciler performs no
/// retry, no backoff, and no error translation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider rejected the connection's credentials
    #[error("Provider authentication failed: {0}")]
    Authentication(String),

    /// The listing request failed (connectivity, timeout, server error)
    #[error("Provider request failed: {0}")]
    Request(String),

    /// The provider returned a response the adapter cannot interpret
    #[error("Provider returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// A compute instance as reported by the provider
///
/// Only `name` is consumed by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub name: String,
}

impl ServerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Port for listing compute instances
#[async_trait]
pub trait ComputeProvider: Send + Sync {
    /// List all server records visible to this connection
    async fn list_servers(&self) -> Result<Vec<ServerRecord>, ProviderError>;
}

/// The names of active servers whose name matches the tag pattern
///
/// One provider round-trip; results are not cached and may be stale the
/// instant they are returned.
pub async fn active_tagged_servers<P>(
    provider: &P,
    pattern: &TagPattern,
) -> Result<HashSet<String>, ProviderError>
where
    P: ComputeProvider + ?Sized,
{
    let servers = provider.list_servers().await?;
    debug!("Provider returned {} server records", servers.len());

    Ok(servers
        .into_iter()
        .map(|server| server.name)
        .filter(|name| pattern.matches(name))
        .collect())
}
