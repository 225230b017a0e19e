//! Due-date resolution — which subscription, if any, a customer is due for.
//!
//! Resolution is a pure function over one [`CustomerSnapshot`] and a decision
//! instant. It partitions active subscriptions into category slots, evaluates
//! each slot against the threshold table, and tie-breaks Standard before
//! Mosquito. Configurations it cannot classify are rejected with
//! [`AmbiguousDueStateError`] rather than guessed at.

use crate::appointment::Appointment;
use crate::customer::CustomerSnapshot;
use crate::error::AmbiguousDueStateError;
use crate::id::SubscriptionId;
use crate::service_type::ServiceCategory;
use crate::subscription::Subscription;
use crate::time::{Season, Timestamp, local_days_between};

/// Grace window after an initial visit, in whole office-local calendar days.
///
/// A customer whose first visit was fewer than this many days ago is not
/// offered the next visit yet, whatever the plan threshold says.
pub const INITIAL_VISIT_GRACE_DAYS: i64 = 20;

/// Resolve the single subscription the customer is due for, if any.
///
/// When both category slots are due, Standard wins.
///
/// # Errors
///
/// Returns [`AmbiguousDueStateError`] when the customer holds no active
/// subscription, or more than one active subscription in the same category.
pub fn resolve_due_subscription(
    customer: &CustomerSnapshot,
    now: Timestamp,
) -> Result<Option<&Subscription>, AmbiguousDueStateError> {
    let slots = CategorySlots::partition(customer)?;
    for subscription in [slots.standard, slots.mosquito].into_iter().flatten() {
        if is_subscription_due(customer, subscription, now) {
            return Ok(Some(subscription));
        }
    }
    Ok(None)
}

/// All subscriptions the customer is currently due for, Standard first.
///
/// Feeds the double-booking guard in appointment creation, which compares
/// this count against already-scheduled upcoming appointments.
///
/// # Errors
///
/// Same classification errors as [`resolve_due_subscription`].
pub fn due_subscriptions(
    customer: &CustomerSnapshot,
    now: Timestamp,
) -> Result<Vec<&Subscription>, AmbiguousDueStateError> {
    let slots = CategorySlots::partition(customer)?;
    Ok([slots.standard, slots.mosquito]
        .into_iter()
        .flatten()
        .filter(|subscription| is_subscription_due(customer, subscription, now))
        .collect())
}

/// At most one active subscription per category.
struct CategorySlots<'a> {
    standard: Option<&'a Subscription>,
    mosquito: Option<&'a Subscription>,
}

impl<'a> CategorySlots<'a> {
    fn partition(customer: &'a CustomerSnapshot) -> Result<Self, AmbiguousDueStateError> {
        let mut slots = Self {
            standard: None,
            mosquito: None,
        };
        for subscription in customer.subscriptions.iter().filter(|s| s.is_active) {
            let category = subscription.category();
            let slot = match category {
                ServiceCategory::Standard => &mut slots.standard,
                ServiceCategory::Mosquito => &mut slots.mosquito,
            };
            if slot.is_some() {
                return Err(AmbiguousDueStateError::DuplicateCategory {
                    customer_id: customer.customer_id,
                    category,
                });
            }
            *slot = Some(subscription);
        }
        if slots.standard.is_none() && slots.mosquito.is_none() {
            return Err(AmbiguousDueStateError::NoActiveSubscriptions {
                customer_id: customer.customer_id,
            });
        }
        Ok(slots)
    }
}

/// Whether a single subscription is due at `now`.
fn is_subscription_due(
    customer: &CustomerSnapshot,
    subscription: &Subscription,
    now: Timestamp,
) -> bool {
    let offset = customer.utc_offset();

    // Never serviced under this subscription: always due.
    let Some(last) = latest_completed_appointment(customer, subscription.id) else {
        return true;
    };

    // Initial-visit grace window, counted from the visit's scheduled start.
    if last.is_initial()
        && local_days_between(last.scheduled_start, now, offset) < INITIAL_VISIT_GRACE_DAYS
    {
        return false;
    }

    // A completed visit without a completion date cannot anchor the interval
    // check; treat the subscription as due rather than withholding service.
    let Some(completed_on) = last.completion_date else {
        return true;
    };

    let elapsed = local_days_between(completed_on, now, offset);
    let season = Season::at(now, offset);
    subscription
        .service_type
        .plan
        .due_threshold(season)
        .is_met(elapsed)
}

/// The most recent completed appointment under the given subscription.
fn latest_completed_appointment(
    customer: &CustomerSnapshot,
    subscription_id: SubscriptionId,
) -> Option<&Appointment> {
    customer
        .appointments
        .iter()
        .filter(|a| a.is_completed() && a.subscription_id == subscription_id)
        .max_by_key(|a| a.completion_date.unwrap_or(a.scheduled_start))
}
