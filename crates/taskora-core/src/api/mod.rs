//! REST client for the taskora backend.
//!
//! This module provides the `ApiClient` with thin wrappers over the
//! dashboard and offer endpoints. Auth token acquisition and refresh live
//! with the embedding application; the wrappers only attach a bearer token
//! and retry rate limits with bounded backoff.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
