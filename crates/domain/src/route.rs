//! Routes and spots — read-only inputs from the external dispatch catalog.

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::id::{OfficeId, RouteId, SpotId};
use crate::time::Timestamp;

/// A scheduled work unit managed by the external dispatch catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub office_id: OfficeId,
    pub title: String,
}

impl Route {
    /// Heuristic classification of initial-visit routes, derived from the
    /// route title as maintained by dispatch.
    #[must_use]
    pub fn is_initial_route(&self) -> bool {
        self.title.to_ascii_lowercase().contains("initial")
    }
}

/// An open time slot on a route.
///
/// The parent route is resolved by the assembling layer before the spot
/// reaches the engine; a missing route is a [`SnapshotError`], not an
/// eligibility answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    pub id: SpotId,
    pub start: Timestamp,
    pub route: Option<Route>,
}

impl Spot {
    /// The pre-resolved parent route.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::UnresolvedSpotRoute`] when the assembling
    /// layer failed to attach the route.
    pub fn resolved_route(&self) -> Result<&Route, SnapshotError> {
        self.route
            .as_ref()
            .ok_or(SnapshotError::UnresolvedSpotRoute { spot_id: self.id })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn route(title: &str) -> Route {
        Route {
            id: RouteId::new(),
            office_id: OfficeId::new(),
            title: title.to_string(),
        }
    }

    #[test]
    fn should_classify_initial_routes_by_title() {
        assert!(route("Initial Services - North").is_initial_route());
        assert!(route("INITIAL visits").is_initial_route());
        assert!(route("Reinitialization crew").is_initial_route());
        assert!(!route("Quarterly - East Valley").is_initial_route());
        assert!(!route("Mosquito route 7").is_initial_route());
    }

    #[test]
    fn should_return_resolved_route_when_attached() {
        let spot = Spot {
            id: SpotId::new(),
            start: Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
            route: Some(route("Quarterly - East Valley")),
        };
        assert_eq!(spot.resolved_route().unwrap().title, "Quarterly - East Valley");
    }

    #[test]
    fn should_error_when_route_is_not_attached() {
        let spot = Spot {
            id: SpotId::new(),
            start: Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
            route: None,
        };
        assert!(matches!(
            spot.resolved_route(),
            Err(SnapshotError::UnresolvedSpotRoute { spot_id }) if spot_id == spot.id
        ));
    }
}
