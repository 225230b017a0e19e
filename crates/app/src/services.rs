//! Application services — the engine's use-case surface.

pub mod scheduling;

pub use scheduling::{AppointmentCandidate, ReassignmentOutcome, SchedulingEligibilityService};
