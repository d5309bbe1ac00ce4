//! Notification input and transaction candidate output types.
//!
//! These are the two values that cross the core's boundaries: a
//! [`NotificationEvent`] arrives from the OS notification facility once per
//! posted notification, and a [`TransactionCandidate`] leaves through the
//! event bridge toward the downstream subscriber. Both are intentionally
//! serializable so they can be carried over a layer boundary verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Amount;

/// A single posted notification as observed from the OS facility.
///
/// Owned transiently: the OS collaborator constructs one per callback
/// invocation and the core consumes it by value without retaining it.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// Package identifier of the posting application.
    pub source_package: String,
    /// Notification title, if the posting application set one.
    pub title: Option<String>,
    /// Notification body text, if the posting application set one.
    pub body: Option<String>,
}

impl NotificationEvent {
    /// Creates a notification event.
    #[must_use]
    pub fn new(
        source_package: impl Into<String>,
        title: Option<String>,
        body: Option<String>,
    ) -> Self {
        Self {
            source_package: source_package.into(),
            title,
            body,
        }
    }
}

/// A structured transaction record detected from a notification event.
///
/// A candidate only exists fully populated: the validating constructor stamps
/// the detection timestamp and enforces that the amount is positive and the
/// description non-empty. The serialized form is the delivered-value shape
/// `{amount, description, detectedAtEpochMillis}`.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCandidate {
    pub amount: Amount,
    pub description: String,
    #[serde(rename = "detectedAtEpochMillis", with = "chrono::serde::ts_milliseconds")]
    pub detected_at: DateTime<Utc>,
}

impl TransactionCandidate {
    /// Creates a candidate, stamping the detection time at construction.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyDescription` if `description` is empty.
    pub fn new(amount: Amount, description: impl Into<String>) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        Ok(Self {
            amount,
            description,
            detected_at: Utc::now(),
        })
    }

    /// Detection time as milliseconds since the Unix epoch.
    #[must_use]
    pub fn detected_at_epoch_millis(&self) -> i64 {
        self.detected_at.timestamp_millis()
    }
}
