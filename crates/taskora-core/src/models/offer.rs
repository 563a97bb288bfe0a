use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::{format_hours, format_price};

/// Lifecycle status of an offer as reported by the backend.
///
/// A `pending` offer may be accepted, rejected, or withdrawn. Acceptance plus
/// a successful payment turns it into a booking and the offer leaves the
/// dashboard lists as `completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
    Withdrawn,
    Completed,
}

impl std::fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OfferStatus::Pending => write!(f, "Pending"),
            OfferStatus::Accepted => write!(f, "Accepted"),
            OfferStatus::Rejected => write!(f, "Rejected"),
            OfferStatus::Withdrawn => write!(f, "Withdrawn"),
            OfferStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// A priced proposal from a worker to a customer for a service.
///
/// The offer only references the worker, customer, and service; it does not
/// own them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    #[serde(rename = "workerId")]
    pub worker_id: String,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    #[serde(rename = "serviceId")]
    pub service_id: String,
    pub price: f64,
    #[serde(rename = "estimatedHours")]
    pub estimated_hours: f64,
    pub status: OfferStatus,
    /// Present once checkout has started for an accepted offer.
    #[serde(rename = "paymentSessionRef", default)]
    pub payment_session_ref: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Advisory target expiry from the backend; display only.
    #[serde(rename = "expiresAt", default)]
    pub expires_at: Option<String>,
}

impl Offer {
    /// Parse the creation timestamp. The API sends RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }

    pub fn formatted_hours(&self) -> String {
        format_hours(self.estimated_hours)
    }
}
