use serde::{Deserialize, Serialize};

use super::Offer;
use crate::utils::format_date;

/// Which side of the marketplace a dashboard belongs to.
///
/// Acts as the snapshot cache key: at most one cached bundle per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Worker,
    Customer,
}

impl std::fmt::Display for DashboardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardKind::Worker => write!(f, "worker"),
            DashboardKind::Customer => write!(f, "customer"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerProfile {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f64>,
    #[serde(rename = "completedJobs", default)]
    pub completed_jobs: i64,
}

impl WorkerProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Confirmed job produced from a completed offer.
///
/// Bookings are payload freight here: the dashboard renders them, but the
/// lifecycle classifier never touches them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(rename = "offerId")]
    pub offer_id: String,
    #[serde(rename = "serviceName")]
    pub service_name: Option<String>,
    #[serde(rename = "scheduledFor")]
    pub scheduled_for: Option<String>,
}

impl Booking {
    pub fn formatted_schedule(&self) -> String {
        match &self.scheduled_for {
            Some(date) => format_date(date),
            None => "TBD".to_string(),
        }
    }
}

/// Everything the worker dashboard screen renders, fetched as one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerDashboard {
    pub worker: WorkerProfile,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// Everything the customer dashboard screen renders, fetched as one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDashboard {
    pub customer: CustomerProfile,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_dashboard_tolerates_missing_lists() {
        let bundle: WorkerDashboard = serde_json::from_value(serde_json::json!({
            "worker": {
                "id": "wrk_9",
                "firstName": "Mara",
                "lastName": "Ellis",
                "email": null,
                "phone": null,
                "rating": 4.8
            }
        }))
        .unwrap();

        assert_eq!(bundle.worker.display_name(), "Mara Ellis");
        assert!(bundle.offers.is_empty());
        assert!(bundle.bookings.is_empty());
        assert_eq!(bundle.worker.completed_jobs, 0);
    }

    #[test]
    fn test_booking_formatted_schedule_falls_back() {
        let booking = Booking {
            id: "bkg_1".to_string(),
            offer_id: "off_1".to_string(),
            service_name: Some("Gutter cleaning".to_string()),
            scheduled_for: None,
        };
        assert_eq!(booking.formatted_schedule(), "TBD");
    }
}
