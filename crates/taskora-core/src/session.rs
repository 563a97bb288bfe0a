//! Per-session orchestration of fetching and caching.
//!
//! A `Session` owns the API client and the snapshot cache for one signed-in
//! user and applies the refresh policy: read through the cache, refetch only
//! when the snapshot is stale or missing. The cache itself never fetches.

use std::future::Future;

use anyhow::{Context, Result};
use tracing::debug;

use crate::api::ApiClient;
use crate::cache::SnapshotCache;
use crate::config::Config;
use crate::models::{CustomerDashboard, DashboardKind, WorkerDashboard};

pub struct Session {
    api: ApiClient,
    cache: SnapshotCache,
    max_age_ms: i64,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(&config.api_base_url).context("Failed to build API client")?,
            cache: SnapshotCache::new(),
            max_age_ms: config.cache_max_age_ms,
        })
    }

    /// Attach a bearer token for the signed-in user.
    pub fn with_token(mut self, token: String) -> Self {
        self.api = self.api.with_token(token);
        self
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    // ===== Worker dashboard =====

    /// Worker dashboard, served from cache while fresh.
    pub async fn worker_dashboard(&mut self, worker_id: &str) -> Result<WorkerDashboard> {
        let api = self.api.clone();
        let worker_id = worker_id.to_string();
        self.worker_dashboard_with(move || async move {
            api.fetch_worker_dashboard(&worker_id).await
        })
        .await
    }

    /// Worker dashboard with an injected fetcher.
    ///
    /// The fetcher runs only when the cached snapshot is stale or missing;
    /// its result is written through to the cache.
    pub async fn worker_dashboard_with<F, Fut>(&mut self, fetcher: F) -> Result<WorkerDashboard>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<WorkerDashboard>>,
    {
        if !self.cache.is_stale_within(DashboardKind::Worker, self.max_age_ms) {
            if let Some(snapshot) = self.cache.worker() {
                debug!(kind = %DashboardKind::Worker, "serving dashboard from cache");
                return Ok(snapshot.data.clone());
            }
        }

        let bundle = fetcher().await.context("Failed to fetch worker dashboard")?;
        self.cache.set_worker(bundle.clone());
        Ok(bundle)
    }

    // ===== Customer dashboard =====

    /// Customer dashboard, served from cache while fresh.
    pub async fn customer_dashboard(&mut self, customer_id: &str) -> Result<CustomerDashboard> {
        let api = self.api.clone();
        let customer_id = customer_id.to_string();
        self.customer_dashboard_with(move || async move {
            api.fetch_customer_dashboard(&customer_id).await
        })
        .await
    }

    /// Customer dashboard with an injected fetcher.
    pub async fn customer_dashboard_with<F, Fut>(&mut self, fetcher: F) -> Result<CustomerDashboard>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<CustomerDashboard>>,
    {
        if !self.cache.is_stale_within(DashboardKind::Customer, self.max_age_ms) {
            if let Some(snapshot) = self.cache.customer() {
                debug!(kind = %DashboardKind::Customer, "serving dashboard from cache");
                return Ok(snapshot.data.clone());
            }
        }

        let bundle = fetcher().await.context("Failed to fetch customer dashboard")?;
        self.cache.set_customer(bundle.clone());
        Ok(bundle)
    }

    // ===== Lifecycle =====

    /// Drop one cached dashboard (entity switch).
    pub fn clear_dashboard(&mut self, kind: DashboardKind) {
        self.cache.clear(kind);
    }

    /// Drop all cached state (logout).
    pub fn logout(&mut self) {
        debug!("logging out, dropping cached dashboards");
        self.cache.clear_all();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkerProfile;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn session() -> Session {
        Session::new(&Config::default()).unwrap()
    }

    fn worker_bundle(id: &str) -> WorkerDashboard {
        WorkerDashboard {
            worker: WorkerProfile {
                id: id.to_string(),
                first_name: "Mara".to_string(),
                last_name: "Ellis".to_string(),
                email: None,
                phone: None,
                rating: None,
                completed_jobs: 0,
            },
            offers: vec![],
            bookings: vec![],
        }
    }

    #[tokio::test]
    async fn test_first_read_fetches_and_caches() {
        let mut session = session();
        let calls = Arc::new(AtomicUsize::new(0));

        let counted = calls.clone();
        let bundle = session
            .worker_dashboard_with(move || async move {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(worker_bundle("wrk_1"))
            })
            .await
            .unwrap();

        assert_eq!(bundle.worker.id, "wrk_1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(session.cache().worker().is_some());
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_the_fetcher() {
        let mut session = session();
        session
            .worker_dashboard_with(|| async { Ok(worker_bundle("wrk_1")) })
            .await
            .unwrap();

        // A failing fetcher proves the cache was used
        let bundle = session
            .worker_dashboard_with(|| async { anyhow::bail!("network down") })
            .await
            .unwrap();

        assert_eq!(bundle.worker.id, "wrk_1");
    }

    #[tokio::test]
    async fn test_logout_forces_a_refetch() {
        let mut session = session();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let counted = calls.clone();
            session
                .worker_dashboard_with(move || async move {
                    counted.fetch_add(1, Ordering::SeqCst);
                    Ok(worker_bundle("wrk_1"))
                })
                .await
                .unwrap();
            session.logout();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(session.cache().worker().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates_and_leaves_cache_empty() {
        let mut session = session();
        let result = session
            .worker_dashboard_with(|| async { anyhow::bail!("503 from backend") })
            .await;

        assert!(result.is_err());
        assert!(session.cache().worker().is_none());
    }
}
