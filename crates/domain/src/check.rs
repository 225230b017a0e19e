//! Check — the uniform result of an eligibility predicate.

use serde::{Deserialize, Serialize};

/// Outcome of a single eligibility question.
///
/// `reason` is a human-presentable explanation, `Some` exactly when `ok` is
/// false; it is surfaced directly in user-facing messaging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub ok: bool,
    pub reason: Option<String>,
}

impl Check {
    /// A passing check.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    /// A failing check carrying the reason to show the customer.
    #[must_use]
    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}
