//! API client for communicating with the taskora REST backend.
//!
//! This module provides the `ApiClient` struct for fetching dashboard
//! bundles and offer lists, and for driving offer state transitions.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::models::{CustomerDashboard, Offer, WorkerDashboard};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of retries for rate-limited (429) requests.
/// 3 retries with exponential backoff usually succeeds without excessive delay.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
const INITIAL_BACKOFF_MS: u64 = 1000;

/// API client for the taskora backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: None,
        })
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    /// Returns Ok(Some(response)) for success, Ok(None) for rate limit
    /// (should retry), or Err for other errors.
    async fn check_response_for_retry(
        response: reqwest::Response,
    ) -> Result<Option<reqwest::Response>> {
        if response.status().is_success() {
            Ok(Some(response))
        } else if response.status().as_u16() == 429 {
            // Rate limited - signal to retry
            Ok(None)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let response = self
                .client
                .get(url)
                .headers(self.auth_headers()?)
                .send()
                .await
                .with_context(|| format!("Failed to send GET request to {}", url))?;

            match Self::check_response_for_retry(response).await? {
                Some(response) => {
                    return response
                        .json()
                        .await
                        .with_context(|| format!("Failed to parse JSON response from {}", url));
                }
                None => {
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited.into());
                    }
                    warn!(url = url, retry = retries, backoff_ms = backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2; // Exponential backoff
                }
            }
        }
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, url: &str, body: &B) -> Result<T> {
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let response = self
                .client
                .post(url)
                .headers(self.auth_headers()?)
                .json(body)
                .send()
                .await
                .with_context(|| format!("Failed to send POST request to {}", url))?;

            match Self::check_response_for_retry(response).await? {
                Some(response) => {
                    return response
                        .json()
                        .await
                        .with_context(|| format!("Failed to parse JSON response from {}", url));
                }
                None => {
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited.into());
                    }
                    warn!(url = url, retry = retries, backoff_ms = backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2; // Exponential backoff
                }
            }
        }
    }

    // ===== Dashboards =====

    /// Fetch the worker dashboard bundle (profile, offers, bookings)
    pub async fn fetch_worker_dashboard(&self, worker_id: &str) -> Result<WorkerDashboard> {
        let url = format!("{}/workers/{}/dashboard", self.base_url, worker_id);
        self.get(&url).await
    }

    /// Fetch the customer dashboard bundle (profile, offers, bookings)
    pub async fn fetch_customer_dashboard(&self, customer_id: &str) -> Result<CustomerDashboard> {
        let url = format!("{}/customers/{}/dashboard", self.base_url, customer_id);
        self.get(&url).await
    }

    // ===== Offers =====

    /// Fetch all offers made by a worker
    pub async fn fetch_worker_offers(&self, worker_id: &str) -> Result<Vec<Offer>> {
        let url = format!("{}/workers/{}/offers", self.base_url, worker_id);
        self.get(&url).await
    }

    /// Fetch all offers received by a customer
    pub async fn fetch_customer_offers(&self, customer_id: &str) -> Result<Vec<Offer>> {
        let url = format!("{}/customers/{}/offers", self.base_url, customer_id);
        self.get(&url).await
    }

    /// Accept a pending offer. Returns the updated offer.
    pub async fn accept_offer(&self, offer_id: &str) -> Result<Offer> {
        let url = format!("{}/offers/{}/accept", self.base_url, offer_id);
        self.post(&url, &serde_json::json!({})).await
    }

    /// Reject a pending offer. Returns the updated offer.
    pub async fn reject_offer(&self, offer_id: &str) -> Result<Offer> {
        let url = format!("{}/offers/{}/reject", self.base_url, offer_id);
        self.post(&url, &serde_json::json!({})).await
    }

    /// Withdraw a pending offer (worker side). Returns the updated offer.
    pub async fn withdraw_offer(&self, offer_id: &str) -> Result<Offer> {
        let url = format!("{}/offers/{}/withdraw", self.base_url, offer_id);
        self.post(&url, &serde_json::json!({})).await
    }

    /// Begin checkout for an accepted offer. The returned offer carries the
    /// payment session reference.
    pub async fn start_checkout(&self, offer_id: &str) -> Result<Offer> {
        let url = format!("{}/offers/{}/checkout", self.base_url, offer_id);
        self.post(&url, &serde_json::json!({})).await
    }
}
