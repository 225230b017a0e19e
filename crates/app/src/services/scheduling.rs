//! Scheduling eligibility — may this appointment action go ahead?
//!
//! Eligibility questions return [`Check`] values, never errors: a "no" is an
//! answer for the customer, not a failure. Only structurally invalid input
//! (an unclassifiable subscription set, a spot without a route) is an error.
//! All predicates take an explicit decision instant so callers and tests
//! control the clock.

use pestcycle_domain::appointment::Appointment;
use pestcycle_domain::check::Check;
use pestcycle_domain::customer::CustomerSnapshot;
use pestcycle_domain::due;
use pestcycle_domain::error::{EngineError, SnapshotError};
use pestcycle_domain::id::AppointmentId;
use pestcycle_domain::route::{Route, Spot};
use pestcycle_domain::subscription::Subscription;
use pestcycle_domain::time::Timestamp;

use crate::ports::AppointmentRepository;

/// A proposed appointment, before anything is committed.
///
/// Route and spot are optional: a candidate may be booked without either,
/// and the spot's parent route arrives pre-resolved on the spot itself.
#[derive(Debug, Clone)]
pub struct AppointmentCandidate {
    pub start: Timestamp,
    pub end: Timestamp,
    pub route: Option<Route>,
    pub spot: Option<Spot>,
}

/// Result of migrating pending appointments between subscriptions.
///
/// `failed` holds the ids that could not be persisted; the batch never
/// aborts on an individual failure.
#[derive(Debug, Default)]
pub struct ReassignmentOutcome {
    pub migrated: Vec<Appointment>,
    pub failed: Vec<AppointmentId>,
}

impl ReassignmentOutcome {
    /// True when the old subscription had no pending appointments at all.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.migrated.is_empty() && self.failed.is_empty()
    }
}

/// Application service answering scheduling-eligibility questions and
/// migrating appointments when a customer's active subscription changes.
pub struct SchedulingEligibilityService<R> {
    appointments: R,
}

impl<R: AppointmentRepository> SchedulingEligibilityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(appointments: R) -> Self {
        Self { appointments }
    }

    /// May this candidate appointment be created for this customer?
    ///
    /// Checks short-circuit in order: route classification, spot
    /// classification and availability, candidate dates, and finally the
    /// double-booking guard (due subscriptions must outnumber upcoming
    /// appointments).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AmbiguousDueState`] when the customer's
    /// subscription set cannot be classified, or [`EngineError::Snapshot`]
    /// when the spot carries no resolved route.
    pub fn can_create_appointment(
        &self,
        candidate: &AppointmentCandidate,
        customer: &CustomerSnapshot,
        now: Timestamp,
    ) -> Result<Check, EngineError> {
        if let Some(route) = &candidate.route
            && route.is_initial_route()
        {
            return Ok(Check::fail("initial routes cannot be booked directly"));
        }
        if let Some(spot) = &candidate.spot {
            if spot.resolved_route()?.is_initial_route() {
                return Ok(Check::fail("the selected spot is on an initial route"));
            }
            if spot.start <= now {
                return Ok(Check::fail("the selected spot is no longer available"));
            }
        }
        if candidate.start <= now || candidate.end <= now {
            return Ok(Check::fail(
                "appointments can only be scheduled for a future date",
            ));
        }

        let due_count = due::due_subscriptions(customer, now)?.len();
        let upcoming_count = customer
            .appointments
            .iter()
            .filter(|a| a.is_pending() && a.scheduled_start > now)
            .count();
        if due_count <= upcoming_count {
            return Ok(Check::fail(
                "every service that is due already has an upcoming appointment",
            ));
        }
        Ok(Check::pass())
    }

    /// May this appointment be moved to another time?
    #[must_use]
    pub fn can_reschedule_appointment(&self, appointment: &Appointment, now: Timestamp) -> Check {
        if appointment.scheduled_start <= now {
            return Check::fail("only upcoming appointments can be rescheduled");
        }
        Check::pass()
    }

    /// May the customer cancel this appointment?
    ///
    /// Only upcoming reservice visits are cancellable; initial and regular
    /// recurring visits are not.
    #[must_use]
    pub fn can_cancel_appointment(&self, appointment: &Appointment, now: Timestamp) -> Check {
        if appointment.scheduled_start <= now {
            return Check::fail("only upcoming appointments can be canceled");
        }
        if !appointment.service_type.is_reservice {
            return Check::fail("only reservice visits can be canceled");
        }
        Check::pass()
    }

    /// May this spot be assigned to an appointment?
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::UnresolvedSpotRoute`] when the spot carries
    /// no resolved route.
    pub fn can_assign_spot_to_appointment(
        &self,
        spot: &Spot,
        now: Timestamp,
    ) -> Result<Check, SnapshotError> {
        if spot.resolved_route()?.is_initial_route() {
            return Ok(Check::fail("the selected spot is on an initial route"));
        }
        if spot.start <= now {
            return Ok(Check::fail("the selected spot is no longer available"));
        }
        Ok(Check::pass())
    }

    /// Move every pending appointment of `old_subscription` over to
    /// `new_subscription`, re-pointing subscription and service type.
    ///
    /// Individual persistence failures are logged and collected in the
    /// outcome; the rest of the batch still goes through. No pending
    /// appointments means a no-op outcome.
    ///
    /// # Errors
    ///
    /// Returns a storage error only when the pending appointments cannot be
    /// loaded at all.
    pub async fn reassign_subscription_to_appointment(
        &self,
        new_subscription: &Subscription,
        old_subscription: &Subscription,
    ) -> Result<ReassignmentOutcome, EngineError> {
        let pending = self
            .appointments
            .find_pending_by_subscription(old_subscription.id)
            .await?;

        let mut outcome = ReassignmentOutcome::default();
        for mut appointment in pending {
            let appointment_id = appointment.id;
            appointment.subscription_id = new_subscription.id;
            appointment.service_type = new_subscription.service_type.clone();
            match self.appointments.update(appointment).await {
                Ok(updated) => outcome.migrated.push(updated),
                Err(error) => {
                    tracing::warn!(
                        appointment_id = %appointment_id,
                        subscription_id = %new_subscription.id,
                        %error,
                        "failed to reassign appointment",
                    );
                    outcome.failed.push(appointment_id);
                }
            }
        }
        Ok(outcome)
    }
}
