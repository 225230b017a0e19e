//! # pestcycle-domain
//!
//! Pure domain model for the pestcycle recurring-treatment backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **ServiceTypes** (reference data: plan, category, threshold table)
//! - Define **Subscriptions** (a customer's recurring treatment plans)
//! - Define **Appointments** (visit history and upcoming visits)
//! - Define **CustomerSnapshots** (fully materialized per-call input)
//! - Define **Routes/Spots** (read-only dispatch-catalog inputs)
//! - Due-date resolution: decide which subscription, if any, a customer is
//!   currently due for
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod check;
pub mod error;
pub mod id;
pub mod time;

pub mod appointment;
pub mod customer;
pub mod due;
pub mod route;
pub mod service_type;
pub mod subscription;
