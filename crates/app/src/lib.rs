//! # pestcycle-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AppointmentRepository` — load and persist appointments
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SchedulingEligibilityService` — create/reschedule/cancel eligibility
//!     checks and subscription-to-appointment reassignment
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `pestcycle-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
