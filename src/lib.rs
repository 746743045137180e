//! Inventory reachability reconciliation for cloud compute
//!
//! Reconciles the hostnames declared under an inventory group against the
//! tagged compute instances a provider reports as active, producing the
//! reachable (declared and active) and unreachable (declared but not active)
//! subsets. The provider is an injected port so tests run without
//! infrastructure; a Nova adapter is available behind the `openstack`
//! feature.

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod provider;
pub mod reconciler;

// Re-export commonly used types
pub use errors::{ReachabilityError, ReachabilityResult};
pub use inventory::Inventory;
pub use provider::{ComputeProvider, ProviderError, ServerRecord};
pub use reconciler::{check_reachability, reconcile, ReachabilityReport, DEFAULT_GROUP};
