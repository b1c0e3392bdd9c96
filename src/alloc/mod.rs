//! Contiguous-memory allocation core
//!
//! This module provides the allocation model the UI visualizes:
//! - [`policy`]: the three fit policies (first, worst, best) and the shared
//!   selection contract
//! - [`driver`]: sequencing of a request list against one partition list,
//!   recording a per-request outcome trail
//!
//! # Model
//!
//! A partition is a fixed-position block of memory identified by its index;
//! only its free capacity changes. A request qualifies against a partition
//! iff the partition's current capacity is at least the request size. A
//! successful allocation subtracts the request size from the chosen
//! partition, so capacities never go negative and the partition list never
//! grows, shrinks, or reorders during a run.

pub mod driver;
pub mod policy;

pub use driver::{run_allocations, AllocationStep, Placement};
pub use policy::FitPolicy;
