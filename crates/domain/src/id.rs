//! Typed identifier newtypes backed by UUIDs.
//!
//! Every record coming out of the CRM keeps its identity as a distinct type,
//! so a subscription id can never be handed where an appointment id belongs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an identifier received from the CRM.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// The raw UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a customer.
    CustomerId
);

define_id!(
    /// Unique identifier for an office (regional business unit).
    OfficeId
);

define_id!(
    /// Unique identifier for a [`Subscription`](crate::subscription::Subscription).
    SubscriptionId
);

define_id!(
    /// Unique identifier for a [`ServiceType`](crate::service_type::ServiceType).
    ServiceTypeId
);

define_id!(
    /// Unique identifier for an [`Appointment`](crate::appointment::Appointment).
    AppointmentId
);

define_id!(
    /// Unique identifier for a [`Route`](crate::route::Route).
    RouteId
);

define_id!(
    /// Unique identifier for a [`Spot`](crate::route::Spot).
    SpotId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_id_through_string() {
        let id = SubscriptionId::new();
        let parsed: SubscriptionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_generate_distinct_ids() {
        assert_ne!(AppointmentId::new(), AppointmentId::new());
    }

    #[test]
    fn should_preserve_wrapped_uuid() {
        let raw = uuid::Uuid::new_v4();
        assert_eq!(CustomerId::from_uuid(raw).as_uuid(), raw);
    }
}
