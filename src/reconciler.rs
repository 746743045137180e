//! Reachability reconciliation
//!
//! Orchestrates the inventory reader and the compute provider port, then
//! computes the reachable/unreachable partition. Every call is a single
//! stateless request/response cycle; errors from either sub-step propagate
//! unchanged and no partial result is ever returned.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::domain::TagPattern;
use crate::errors::{ReachabilityError, ReachabilityResult};
use crate::inventory::Inventory;
use crate::provider::{active_tagged_servers, ComputeProvider};

/// Group consulted when the caller does not name one
pub const DEFAULT_GROUP: &str = "webservers";

/// Partition of the declared hosts by provider-reported activity
///
/// `reachable` and `unreachable` are always disjoint and their union is
/// exactly the declared host set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityReport {
    /// Declared hosts that are active: declared ∩ active
    pub reachable: HashSet<String>,
    /// Declared hosts that are not active: declared − active
    pub unreachable: HashSet<String>,
}

impl ReachabilityReport {
    /// Whether every declared host is active
    pub fn is_fully_reachable(&self) -> bool {
        self.unreachable.is_empty()
    }

    /// The declared host set this report partitions
    pub fn declared(&self) -> HashSet<String> {
        self.reachable.union(&self.unreachable).cloned().collect()
    }
}

/// Partition declared hosts by membership in the active set
pub fn reconcile(declared: &HashSet<String>, active: &HashSet<String>) -> ReachabilityReport {
    ReachabilityReport {
        reachable: declared.intersection(active).cloned().collect(),
        unreachable: declared.difference(active).cloned().collect(),
    }
}

/// Check which declared hosts are currently active on the provider
///
/// Reads the host keys declared under `group_name` (default
/// [`DEFAULT_GROUP`]) in the inventory file, lists the provider's servers
/// whose name matches `<tag>_dev<digits>`, and returns the partition.
///
/// The active set reflects provider state at the moment of the listing and
/// may be stale immediately after; no caching or retry is performed.
pub async fn check_reachability<P>(
    provider: &P,
    tag: &str,
    inventory_path: impl AsRef<Path>,
    group_name: Option<&str>,
) -> ReachabilityResult<ReachabilityReport>
where
    P: ComputeProvider + ?Sized,
{
    let group = group_name.unwrap_or(DEFAULT_GROUP);
    let pattern =
        TagPattern::new(tag).map_err(|e| ReachabilityError::InvalidTag(e.to_string()))?;

    let inventory = Inventory::load(inventory_path).await?;
    let declared = inventory.expected_hosts(group)?;
    debug!("Group '{}' declares {} hosts", group, declared.len());

    let active = active_tagged_servers(provider, &pattern).await?;

    let report = reconcile(&declared, &active);
    info!(
        group,
        reachable = report.reachable.len(),
        unreachable = report.unreachable.len(),
        "Reconciled inventory against provider"
    );
    Ok(report)
}
