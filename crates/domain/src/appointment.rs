//! Appointment — a scheduled or historical treatment visit.

use serde::{Deserialize, Serialize};

use crate::id::{AppointmentId, SubscriptionId};
use crate::service_type::ServiceType;
use crate::time::Timestamp;

/// Lifecycle state of an appointment.
///
/// Transitions (`Pending → Completed`, `Pending → Canceled`) are driven by
/// the external booking workflow; the engine only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Completed,
    Canceled,
}

/// A treatment visit, carrying its resolved service type.
///
/// Read-only history to the engine, except for subscription reassignment
/// which re-points `subscription_id` and `service_type` on pending
/// appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub subscription_id: SubscriptionId,
    pub service_type: ServiceType,
    pub status: AppointmentStatus,
    pub scheduled_start: Timestamp,
    pub completion_date: Option<Timestamp>,
}

impl Appointment {
    /// Whether this visit is the first under its subscription, derived from
    /// the service type.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.service_type.is_initial
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == AppointmentStatus::Pending
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == AppointmentStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::service_type::ServicePlan;

    #[test]
    fn should_derive_is_initial_from_service_type() {
        let appointment = Appointment {
            id: AppointmentId::new(),
            subscription_id: SubscriptionId::new(),
            service_type: ServiceType::initial(ServicePlan::Pro),
            status: AppointmentStatus::Completed,
            scheduled_start: Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
            completion_date: Some(Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap()),
        };
        assert!(appointment.is_initial());
        assert!(appointment.is_completed());
        assert!(!appointment.is_pending());
    }
}
