//! Property-Based Tests for the Reachability Partition
//!
//! For all declared-host sets D and active-host sets A:
//! - reachable = D ∩ A and unreachable = D − A
//! - reachable ∪ unreachable = D and reachable ∩ unreachable = ∅
//! - A ⊇ D implies unreachable = ∅
//! - A ∩ D = ∅ implies reachable = ∅ and unreachable = D

use proptest::prelude::*;
use std::collections::HashSet;

use openstack_reachability::reconcile;

fn host_set() -> impl Strategy<Value = HashSet<String>> {
    prop::collection::hash_set("[a-z]{1,4}_dev[0-9]{1,2}", 0..16)
}

proptest! {
    /// The report always partitions the declared set
    #[test]
    fn partition_is_exact(declared in host_set(), active in host_set()) {
        let report = reconcile(&declared, &active);

        prop_assert!(report.reachable.is_disjoint(&report.unreachable));

        let union: HashSet<String> = report
            .reachable
            .union(&report.unreachable)
            .cloned()
            .collect();
        prop_assert_eq!(union, declared);
    }

    /// Every reachable host is active, no unreachable host is
    #[test]
    fn membership_matches_activity(declared in host_set(), active in host_set()) {
        let report = reconcile(&declared, &active);

        prop_assert!(report.reachable.iter().all(|host| active.contains(host)));
        prop_assert!(report.unreachable.iter().all(|host| !active.contains(host)));
    }

    /// An active superset of the declared hosts leaves nothing unreachable
    #[test]
    fn superset_means_fully_reachable(declared in host_set(), extra in host_set()) {
        let active: HashSet<String> = declared.union(&extra).cloned().collect();
        let report = reconcile(&declared, &active);

        prop_assert!(report.unreachable.is_empty());
        prop_assert_eq!(report.reachable, declared);
    }

    /// A disjoint active set leaves nothing reachable
    #[test]
    fn disjoint_means_fully_unreachable(declared in host_set(), active in host_set()) {
        let active: HashSet<String> = active.difference(&declared).cloned().collect();
        let report = reconcile(&declared, &active);

        prop_assert!(report.reachable.is_empty());
        prop_assert_eq!(report.unreachable, declared);
    }
}
