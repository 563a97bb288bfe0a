//! Data models for taskora entities.
//!
//! This module contains the data structures shared by the web client:
//!
//! - `Offer`, `OfferStatus`: priced proposals and their lifecycle status
//! - `WorkerDashboard`, `CustomerDashboard`: per-kind dashboard bundles
//! - `WorkerProfile`, `CustomerProfile`, `Booking`: bundle components
//! - `DashboardKind`: the worker/customer partition used as the cache key

pub mod dashboard;
pub mod offer;

pub use dashboard::{
    Booking, CustomerDashboard, CustomerProfile, DashboardKind, WorkerDashboard, WorkerProfile,
};
pub use offer::{Offer, OfferStatus};
