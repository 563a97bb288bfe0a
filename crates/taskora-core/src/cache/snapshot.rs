use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{CustomerDashboard, DashboardKind, WorkerDashboard};

/// Consider a dashboard snapshot stale after 5 minutes.
/// Offers and bookings move quickly enough that anything older should
/// trigger a refetch.
pub const DEFAULT_MAX_AGE_MS: i64 = 300_000;

/// A cached payload together with the instant it was stored.
///
/// Both fields are only ever written together: an overwrite replaces the
/// whole `Snapshot`, so a reader can never see a new payload with an old
/// timestamp.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub data: T,
    pub stored_at: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            stored_at: Utc::now(),
        }
    }

    /// Age of this snapshot at `now`, in milliseconds.
    pub fn age_ms(&self, now: DateTime<Utc>) -> i64 {
        (now - self.stored_at).num_milliseconds()
    }

    pub fn is_stale_at(&self, max_age_ms: i64, now: DateTime<Utc>) -> bool {
        self.age_ms(now) > max_age_ms
    }

    /// Human-readable age for "updated Xm ago" chrome.
    pub fn age_display(&self, now: DateTime<Utc>) -> String {
        let minutes = self.age_ms(now) / 60_000;
        if minutes < 1 {
            // Also covers clock skew (negative ages)
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

/// In-memory store of the last-fetched dashboard bundle per entity kind.
///
/// The cache is a passive timestamp ledger owned by a single session: it
/// never refetches, never evicts, and holds at most one snapshot per kind.
/// Entries survive until overwritten by a later fetch or dropped by
/// `clear`/`clear_all` (logout, entity switch).
#[derive(Debug, Default)]
pub struct SnapshotCache {
    worker: Option<Snapshot<WorkerDashboard>>,
    customer: Option<Snapshot<CustomerDashboard>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Worker =====

    /// Current worker snapshot, or `None` if never stored or cleared.
    pub fn worker(&self) -> Option<&Snapshot<WorkerDashboard>> {
        self.worker.as_ref()
    }

    /// Store a worker dashboard bundle, unconditionally replacing any
    /// previous snapshot.
    pub fn set_worker(&mut self, data: WorkerDashboard) {
        debug!(kind = %DashboardKind::Worker, "caching dashboard snapshot");
        self.worker = Some(Snapshot::new(data));
    }

    // ===== Customer =====

    /// Current customer snapshot, or `None` if never stored or cleared.
    pub fn customer(&self) -> Option<&Snapshot<CustomerDashboard>> {
        self.customer.as_ref()
    }

    /// Store a customer dashboard bundle, unconditionally replacing any
    /// previous snapshot.
    pub fn set_customer(&mut self, data: CustomerDashboard) {
        debug!(kind = %DashboardKind::Customer, "caching dashboard snapshot");
        self.customer = Some(Snapshot::new(data));
    }

    // ===== Kind-keyed operations =====

    /// Remove the entry for `kind`. No-op when nothing is cached.
    pub fn clear(&mut self, kind: DashboardKind) {
        debug!(kind = %kind, "clearing dashboard snapshot");
        match kind {
            DashboardKind::Worker => self.worker = None,
            DashboardKind::Customer => self.customer = None,
        }
    }

    /// Drop both entries (logout).
    pub fn clear_all(&mut self) {
        self.clear(DashboardKind::Worker);
        self.clear(DashboardKind::Customer);
    }

    /// When the entry for `kind` was stored, if one exists.
    pub fn stored_at(&self, kind: DashboardKind) -> Option<DateTime<Utc>> {
        match kind {
            DashboardKind::Worker => self.worker.as_ref().map(|s| s.stored_at),
            DashboardKind::Customer => self.customer.as_ref().map(|s| s.stored_at),
        }
    }

    /// Staleness with the default 5 minute window.
    pub fn is_stale(&self, kind: DashboardKind) -> bool {
        self.is_stale_within(kind, DEFAULT_MAX_AGE_MS)
    }

    pub fn is_stale_within(&self, kind: DashboardKind, max_age_ms: i64) -> bool {
        self.is_stale_at(kind, max_age_ms, Utc::now())
    }

    /// Staleness at an explicit instant. A missing entry is always stale.
    ///
    /// Pure read: never evicts and never mutates the cache.
    pub fn is_stale_at(&self, kind: DashboardKind, max_age_ms: i64, now: DateTime<Utc>) -> bool {
        match kind {
            DashboardKind::Worker => self
                .worker
                .as_ref()
                .map(|s| s.is_stale_at(max_age_ms, now))
                .unwrap_or(true),
            DashboardKind::Customer => self
                .customer
                .as_ref()
                .map(|s| s.is_stale_at(max_age_ms, now))
                .unwrap_or(true),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkerProfile;
    use chrono::Duration;

    fn worker_bundle(id: &str) -> WorkerDashboard {
        WorkerDashboard {
            worker: WorkerProfile {
                id: id.to_string(),
                first_name: "Mara".to_string(),
                last_name: "Ellis".to_string(),
                email: None,
                phone: None,
                rating: None,
                completed_jobs: 12,
            },
            offers: vec![],
            bookings: vec![],
        }
    }

    #[test]
    fn test_set_overwrites_payload_and_timestamp_together() {
        let mut cache = SnapshotCache::new();
        cache.set_worker(worker_bundle("wrk_a"));
        let first_stored_at = cache.worker().unwrap().stored_at;

        cache.set_worker(worker_bundle("wrk_b"));
        let snapshot = cache.worker().unwrap();

        assert_eq!(snapshot.data.worker.id, "wrk_b");
        assert!(snapshot.stored_at >= first_stored_at);
    }

    #[test]
    fn test_staleness_window_boundaries() {
        let mut cache = SnapshotCache::new();
        cache.set_worker(worker_bundle("wrk_a"));

        // Evaluate at an instant where the entry is exactly 400000ms old
        let now = cache.stored_at(DashboardKind::Worker).unwrap() + Duration::milliseconds(400_000);

        assert!(cache.is_stale_at(DashboardKind::Worker, 300_000, now));
        assert!(!cache.is_stale_at(DashboardKind::Worker, 500_000, now));
        // Exactly at the boundary is not yet stale
        assert!(!cache.is_stale_at(DashboardKind::Worker, 400_000, now));
    }

    #[test]
    fn test_default_window_after_six_minutes() {
        let mut cache = SnapshotCache::new();
        cache.set_worker(worker_bundle("wrk_a"));

        let stored_at = cache.stored_at(DashboardKind::Worker).unwrap();
        let now = stored_at + Duration::milliseconds(360_000);

        assert!(cache.is_stale_at(DashboardKind::Worker, DEFAULT_MAX_AGE_MS, now));
    }

    #[test]
    fn test_missing_entry_is_stale() {
        let cache = SnapshotCache::new();
        assert!(cache.is_stale(DashboardKind::Worker));
        assert!(cache.is_stale(DashboardKind::Customer));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cache = SnapshotCache::new();
        cache.set_worker(worker_bundle("wrk_a"));

        cache.clear(DashboardKind::Worker);
        assert!(cache.worker().is_none());

        cache.clear(DashboardKind::Worker);
        assert!(cache.worker().is_none());
    }

    #[test]
    fn test_clear_only_touches_the_given_kind() {
        let mut cache = SnapshotCache::new();
        cache.set_worker(worker_bundle("wrk_a"));

        cache.clear(DashboardKind::Customer);
        assert!(cache.worker().is_some());
    }

    #[test]
    fn test_staleness_does_not_evict() {
        let mut cache = SnapshotCache::new();
        cache.set_worker(worker_bundle("wrk_a"));

        let now = cache.stored_at(DashboardKind::Worker).unwrap() + Duration::days(2);
        assert!(cache.is_stale_at(DashboardKind::Worker, DEFAULT_MAX_AGE_MS, now));
        assert!(cache.worker().is_some());
    }

    #[test]
    fn test_age_display_buckets() {
        let snapshot = Snapshot::new(vec![1, 2, 3]);
        let at = |d: Duration| snapshot.stored_at + d;

        assert_eq!(snapshot.age_display(at(Duration::seconds(30))), "just now");
        assert_eq!(snapshot.age_display(at(Duration::minutes(5))), "5m ago");
        assert_eq!(snapshot.age_display(at(Duration::hours(3))), "3h ago");
        assert_eq!(snapshot.age_display(at(Duration::days(2))), "2d ago");
        // Clock skew reads as "just now" rather than a negative age
        assert_eq!(snapshot.age_display(at(Duration::minutes(-5))), "just now");
    }
}
