//! Per-session caching of dashboard snapshots.
//!
//! This module provides the `SnapshotCache` for holding the last-fetched
//! worker and customer dashboard bundles in memory. Snapshots are considered
//! stale after 5 minutes by default.
//!
//! Staleness is advisory: the cache never evicts and never refetches. Callers
//! consult `is_stale` before deciding to issue a new network fetch, which
//! keeps the refresh policy in the session layer.

pub mod snapshot;

pub use snapshot::{Snapshot, SnapshotCache, DEFAULT_MAX_AGE_MS};
