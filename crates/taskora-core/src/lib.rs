//! Core library for the taskora web client.
//!
//! Taskora is a service marketplace connecting customers with local workers.
//! This crate contains the state layer shared by the web front end:
//!
//! - `api`: thin REST wrappers over the taskora backend
//! - `cache`: per-session snapshot cache for dashboard bundles
//! - `classify`: offer lifecycle partitioning for display
//! - `models`: wire-shape data models
//! - `session`: per-session refresh policy over cache and API
//!
//! The crate performs no I/O of its own outside the `api` module and holds
//! no state beyond the lifetime of a `Session`.

pub mod api;
pub mod cache;
pub mod classify;
pub mod config;
pub mod models;
pub mod session;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use cache::{Snapshot, SnapshotCache, DEFAULT_MAX_AGE_MS};
pub use classify::{
    classify_offers, classify_offers_now, ClassifyError, OfferBuckets, OFFER_EXPIRY_DAYS,
};
pub use config::Config;
pub use models::{
    Booking, CustomerDashboard, CustomerProfile, DashboardKind, Offer, OfferStatus,
    WorkerDashboard, WorkerProfile,
};
pub use session::Session;
