//! Relevance filtering for inbound notification events.
//!
//! The filter is the cheap front gate of the pipeline: most notifications
//! from most applications are rejected here before any text parsing runs.

use crate::error::ValidationError;

/// Package identifier of the default monitored payment provider.
pub const DEFAULT_PROVIDER_PACKAGE: &str = "com.samsung.android.spay";

/// Title substrings that mark a provider notification as transaction-bearing.
const TITLE_KEYWORDS: [&str; 2] = ["payment", "transaction"];

/// Decides whether a notification event is transaction-relevant.
///
/// An event passes iff it originates from the configured provider package and
/// its title contains `payment` or `transaction`, compared case-insensitively.
/// The substring match deliberately tolerates provider wording drift: a false
/// positive costs one extraction attempt, while a false negative silently
/// loses a real transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceFilter {
    provider_package: String,
}

impl RelevanceFilter {
    /// Creates a filter for the given provider package identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyProviderPackage` if the identifier is
    /// empty.
    pub fn new(provider_package: impl Into<String>) -> Result<Self, ValidationError> {
        let provider_package = provider_package.into();
        if provider_package.is_empty() {
            return Err(ValidationError::EmptyProviderPackage);
        }
        Ok(Self { provider_package })
    }

    /// The provider package this filter accepts events from.
    #[must_use]
    pub fn provider_package(&self) -> &str {
        &self.provider_package
    }

    /// Returns true iff the event is a transaction notification.
    #[must_use]
    pub fn is_transaction_notification(&self, source_package: &str, title: Option<&str>) -> bool {
        if source_package != self.provider_package {
            return false;
        }

        let Some(title) = title else {
            return false;
        };

        let title = title.to_lowercase();
        TITLE_KEYWORDS.iter().any(|keyword| title.contains(keyword))
    }
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self {
            provider_package: DEFAULT_PROVIDER_PACKAGE.to_string(),
        }
    }
}
