//! Offer lifecycle classification for dashboard display.
//!
//! Screens that render an offer list feed the raw records through
//! [`classify_offers`] to split them into an active bucket (still actionable)
//! and an expired bucket (aged-out pending, rejected, withdrawn), each sorted
//! newest-first.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::models::{Offer, OfferStatus};

/// Pending offers older than this are shown as expired, independent of the
/// advisory `expiresAt` the backend sends.
pub const OFFER_EXPIRY_DAYS: i64 = 30;

#[derive(Error, Debug)]
pub enum ClassifyError {
    /// A required field was missing or unparsable. The whole list is
    /// rejected: defaulting the timestamp to epoch or "now" would silently
    /// move the offer between buckets.
    #[error("offer {id}: invalid createdAt timestamp {raw:?}")]
    InvalidOfferData { id: String, raw: String },
}

/// Result of partitioning an offer list for display.
#[derive(Debug, Clone, Default)]
pub struct OfferBuckets {
    /// Still actionable: fresh pending offers, and accepted offers with a
    /// payment in progress. Newest first.
    pub active: Vec<Offer>,
    /// No longer actionable: aged-out pending, rejected, withdrawn.
    /// Newest first.
    pub expired: Vec<Offer>,
}

impl OfferBuckets {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.expired.is_empty()
    }

    /// Offers that landed in either bucket. Input records can classify into
    /// neither, so this may be less than the input length.
    pub fn total(&self) -> usize {
        self.active.len() + self.expired.len()
    }
}

/// Partition `offers` into active and expired buckets as of `now`.
///
/// Completed offers and accepted offers without a payment session land in
/// neither bucket: completed work is surfaced as bookings elsewhere, and an
/// accepted offer reappears once checkout attaches a payment session.
///
/// Fails with [`ClassifyError::InvalidOfferData`] if any `createdAt` does not
/// parse; no partial result is produced. Given a fixed `now`, the function is
/// a pure transformation of its input.
pub fn classify_offers(
    offers: Vec<Offer>,
    now: DateTime<Utc>,
) -> Result<OfferBuckets, ClassifyError> {
    let cutoff = now - Duration::days(OFFER_EXPIRY_DAYS);

    let mut active: Vec<(DateTime<Utc>, Offer)> = Vec::new();
    let mut expired: Vec<(DateTime<Utc>, Offer)> = Vec::new();

    for offer in offers {
        let created_at = offer
            .created_at_utc()
            .ok_or_else(|| ClassifyError::InvalidOfferData {
                id: offer.id.clone(),
                raw: offer.created_at.clone(),
            })?;

        match offer.status {
            OfferStatus::Pending if created_at < cutoff => expired.push((created_at, offer)),
            OfferStatus::Pending => active.push((created_at, offer)),
            OfferStatus::Accepted if offer.payment_session_ref.is_some() => {
                active.push((created_at, offer))
            }
            // Accepted with no payment session: hidden until checkout starts
            // or the backend moves the offer on.
            OfferStatus::Accepted => {}
            OfferStatus::Rejected | OfferStatus::Withdrawn => expired.push((created_at, offer)),
            // Completed offers surface as bookings, not here.
            OfferStatus::Completed => {}
        }
    }

    // Newest first. Vec::sort_by is stable, so equal timestamps keep input order.
    active.sort_by(|a, b| b.0.cmp(&a.0));
    expired.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(OfferBuckets {
        active: active.into_iter().map(|(_, offer)| offer).collect(),
        expired: expired.into_iter().map(|(_, offer)| offer).collect(),
    })
}

/// [`classify_offers`] against the current wall clock.
pub fn classify_offers_now(offers: Vec<Offer>) -> Result<OfferBuckets, ClassifyError> {
    classify_offers(offers, Utc::now())
}

// ============================================================================
// Tests
// ============================================================================
