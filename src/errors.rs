//! Error types for reachability reconciliation

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors that can occur while reconciling inventory against a compute provider
#[derive(Debug, Error)]
pub enum ReachabilityError {
    /// The requested group does not exist in the inventory
    #[error("Group '{group}' not found in inventory")]
    GroupNotFound { group: String },

    /// The inventory source could not be read
    #[error("Failed to read inventory: {0}")]
    InventoryIo(#[from] std::io::Error),

    /// The inventory contains a line the reader cannot place
    #[error("Invalid inventory line {line}: {content}")]
    InvalidLine { line: usize, content: String },

    /// The supplied tag cannot form a valid server-name pattern
    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    /// The compute provider failed while listing servers
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Result type for reachability operations
pub type ReachabilityResult<T> = Result<T, ReachabilityError>;
