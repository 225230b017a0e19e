//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! The engine never performs IO itself: loading pending appointments and
//! persisting reassignments go through these traits, and the CRM-backed
//! adapters own their retry, caching, and consistency guarantees.

use std::future::Future;

use pestcycle_domain::appointment::Appointment;
use pestcycle_domain::error::EngineError;
use pestcycle_domain::id::SubscriptionId;

/// Repository for loading and persisting [`Appointment`]s.
pub trait AppointmentRepository {
    /// All pending appointments tied to the given subscription.
    fn find_pending_by_subscription(
        &self,
        subscription_id: SubscriptionId,
    ) -> impl Future<Output = Result<Vec<Appointment>, EngineError>> + Send;

    /// Persist an updated appointment.
    fn update(
        &self,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Appointment, EngineError>> + Send;
}
