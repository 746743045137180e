//! Compute provider adapter implementations
//!
//! This module contains concrete implementations of the ComputeProvider trait
//! for real cloud APIs.

#[cfg(feature = "openstack")]
pub mod openstack;

#[cfg(feature = "openstack")]
pub use openstack::{OpenStackCompute, OpenStackConfig};
