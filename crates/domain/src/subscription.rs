//! Subscription — a customer's recurring treatment plan.

use serde::{Deserialize, Serialize};

use crate::id::{CustomerId, OfficeId, SubscriptionId};
use crate::service_type::{ServiceCategory, ServiceType};

/// A recurring service subscription, carrying its resolved service type.
///
/// A customer may legitimately hold at most one active subscription per
/// [`ServiceCategory`]; the due-date resolver rejects any other
/// configuration rather than guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub customer_id: CustomerId,
    pub office_id: OfficeId,
    pub service_type: ServiceType,
    pub is_active: bool,
}

impl Subscription {
    /// The category of the attached service type.
    #[must_use]
    pub fn category(&self) -> ServiceCategory {
        self.service_type.category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service_type::ServicePlan;

    #[test]
    fn should_expose_category_of_attached_service_type() {
        let subscription = Subscription {
            id: SubscriptionId::new(),
            customer_id: CustomerId::new(),
            office_id: OfficeId::new(),
            service_type: ServiceType::recurring(ServicePlan::Mosquito),
            is_active: true,
        };
        assert_eq!(subscription.category(), ServiceCategory::Mosquito);
    }
}
