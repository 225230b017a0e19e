//! Customer snapshot — the fully materialized per-call input to the engine.
//!
//! Snapshots are assembled by the calling layer from the CRM-backed
//! repositories and passed in by value. Every relation a decision needs must
//! already be attached; the engine never fetches on demand.

use chrono::FixedOffset;

use crate::appointment::Appointment;
use crate::error::SnapshotError;
use crate::id::{CustomerId, OfficeId};
use crate::subscription::Subscription;

/// One customer's subscriptions and appointment history, frozen for a single
/// decision. Created fresh per call and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSnapshot {
    pub customer_id: CustomerId,
    pub office_id: OfficeId,
    utc_offset: FixedOffset,
    pub subscriptions: Vec<Subscription>,
    pub appointments: Vec<Appointment>,
}

impl CustomerSnapshot {
    /// Create a builder for assembling a [`CustomerSnapshot`].
    #[must_use]
    pub fn builder() -> CustomerSnapshotBuilder {
        CustomerSnapshotBuilder::default()
    }

    /// The office's UTC offset, used for all day-boundary calculations.
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }
}

/// Step-by-step builder for [`CustomerSnapshot`].
#[derive(Debug, Default)]
pub struct CustomerSnapshotBuilder {
    customer_id: Option<CustomerId>,
    office_id: Option<OfficeId>,
    utc_offset_minutes: i32,
    subscriptions: Vec<Subscription>,
    appointments: Vec<Appointment>,
}

impl CustomerSnapshotBuilder {
    #[must_use]
    pub fn customer_id(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    #[must_use]
    pub fn office_id(mut self, office_id: OfficeId) -> Self {
        self.office_id = Some(office_id);
        self
    }

    /// Office UTC offset in minutes east of UTC. Defaults to zero.
    #[must_use]
    pub fn utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    #[must_use]
    pub fn subscription(mut self, subscription: Subscription) -> Self {
        self.subscriptions.push(subscription);
        self
    }

    #[must_use]
    pub fn appointment(mut self, appointment: Appointment) -> Self {
        self.appointments.push(appointment);
        self
    }

    /// Consume the builder, validate, and return a [`CustomerSnapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::InvalidUtcOffset`] when the offset does not
    /// fall within the representable ±24h range.
    pub fn build(self) -> Result<CustomerSnapshot, SnapshotError> {
        let utc_offset = self
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(SnapshotError::InvalidUtcOffset {
                minutes: self.utc_offset_minutes,
            })?;
        Ok(CustomerSnapshot {
            customer_id: self.customer_id.unwrap_or_default(),
            office_id: self.office_id.unwrap_or_default(),
            utc_offset,
            subscriptions: self.subscriptions,
            appointments: self.appointments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service_type::{ServicePlan, ServiceType};

    #[test]
    fn should_build_empty_snapshot_with_utc_default() {
        let snapshot = CustomerSnapshot::builder().build().unwrap();
        assert_eq!(snapshot.utc_offset(), FixedOffset::east_opt(0).unwrap());
        assert!(snapshot.subscriptions.is_empty());
        assert!(snapshot.appointments.is_empty());
    }

    #[test]
    fn should_accept_mountain_time_offset() {
        let snapshot = CustomerSnapshot::builder()
            .utc_offset_minutes(-7 * 60)
            .build()
            .unwrap();
        assert_eq!(
            snapshot.utc_offset(),
            FixedOffset::west_opt(7 * 3600).unwrap()
        );
    }

    #[test]
    fn should_reject_offset_beyond_a_day() {
        let result = CustomerSnapshot::builder()
            .utc_offset_minutes(25 * 60)
            .build();
        assert!(matches!(
            result,
            Err(SnapshotError::InvalidUtcOffset { minutes }) if minutes == 25 * 60
        ));
    }

    #[test]
    fn should_attach_subscriptions_in_order() {
        let customer_id = CustomerId::new();
        let subscription = Subscription {
            id: crate::id::SubscriptionId::new(),
            customer_id,
            office_id: OfficeId::new(),
            service_type: ServiceType::recurring(ServicePlan::Quarterly),
            is_active: true,
        };
        let snapshot = CustomerSnapshot::builder()
            .customer_id(customer_id)
            .subscription(subscription.clone())
            .build()
            .unwrap();
        assert_eq!(snapshot.subscriptions, vec![subscription]);
    }
}
