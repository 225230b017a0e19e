//! Service types — immutable reference data owned by the external catalog.
//!
//! Classification is a closed enumeration with a static threshold table, so
//! adding a plan is a compile-time-checked change rather than a string match.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::ServiceTypeId;
use crate::time::Season;

/// Coarse classification of a service type.
///
/// A customer may hold at most one active subscription per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// The primary recurring treatment plan.
    Standard,
    /// A secondary, independently-cadenced treatment plan.
    Mosquito,
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Mosquito => write!(f, "mosquito"),
        }
    }
}

/// The concrete recurring plan a service type belongs to.
///
/// Each plan maps to a [`ServiceCategory`] and a due threshold, seasonal
/// where the business rules call for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServicePlan {
    Quarterly,
    Basic,
    Pro,
    ProPlus,
    Premium,
    Mosquito,
}

impl ServicePlan {
    /// The category this plan belongs to.
    #[must_use]
    pub fn category(self) -> ServiceCategory {
        match self {
            Self::Mosquito => ServiceCategory::Mosquito,
            _ => ServiceCategory::Standard,
        }
    }

    /// Due threshold for this plan in the given season, in whole office-local
    /// calendar days since the last completed visit.
    #[must_use]
    pub fn due_threshold(self, season: Season) -> DueThreshold {
        match (self, season) {
            // Quarterly cadence is the one inclusive boundary: due on the
            // 63rd day, not after it.
            (Self::Quarterly, _) => DueThreshold::inclusive(63),
            (Self::Basic, _) => DueThreshold::exclusive(39),
            (Self::Pro | Self::ProPlus, Season::Summer) => DueThreshold::exclusive(24),
            (Self::Premium, Season::Summer) => DueThreshold::exclusive(14),
            (Self::Pro | Self::ProPlus | Self::Premium, Season::Winter) => {
                DueThreshold::exclusive(39)
            }
            (Self::Mosquito, _) => DueThreshold::exclusive(26),
        }
    }
}

/// An elapsed-days threshold with its boundary semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueThreshold {
    days: i64,
    inclusive: bool,
}

impl DueThreshold {
    const fn inclusive(days: i64) -> Self {
        Self {
            days,
            inclusive: true,
        }
    }

    const fn exclusive(days: i64) -> Self {
        Self {
            days,
            inclusive: false,
        }
    }

    /// Whether the given elapsed day count satisfies the threshold.
    #[must_use]
    pub fn is_met(self, elapsed_days: i64) -> bool {
        if self.inclusive {
            elapsed_days >= self.days
        } else {
            elapsed_days > self.days
        }
    }
}

/// A service type as published by the external catalog. The engine only
/// reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceType {
    pub id: ServiceTypeId,
    pub plan: ServicePlan,
    /// A recurring follow-up visit, as opposed to the first visit under a
    /// subscription.
    pub is_reservice: bool,
    /// The first visit under a subscription.
    pub is_initial: bool,
}

impl ServiceType {
    /// A regular recurring visit of the given plan.
    #[must_use]
    pub fn recurring(plan: ServicePlan) -> Self {
        Self {
            id: ServiceTypeId::new(),
            plan,
            is_reservice: false,
            is_initial: false,
        }
    }

    /// The first visit under a subscription of the given plan.
    #[must_use]
    pub fn initial(plan: ServicePlan) -> Self {
        Self {
            id: ServiceTypeId::new(),
            plan,
            is_reservice: false,
            is_initial: true,
        }
    }

    /// A follow-up reservice visit of the given plan.
    #[must_use]
    pub fn reservice(plan: ServicePlan) -> Self {
        Self {
            id: ServiceTypeId::new(),
            plan,
            is_reservice: true,
            is_initial: false,
        }
    }

    /// The category this service type belongs to.
    #[must_use]
    pub fn category(&self) -> ServiceCategory {
        self.plan.category()
    }
}
