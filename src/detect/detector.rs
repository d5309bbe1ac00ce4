//! Transaction detection over inbound notification events.

use tracing::{debug, trace};

use crate::detect::extract::extract_amount;
use crate::detect::filter::RelevanceFilter;
use crate::event::{NotificationEvent, TransactionCandidate};

/// Runs the detection pipeline on notification events.
///
/// Stateless across calls: each event is filtered and parsed independently
/// and either yields a fully populated candidate or nothing. Every rejection
/// path is a normal outcome, never an error.
#[derive(Debug, Clone, Default)]
pub struct TransactionDetector {
    filter: RelevanceFilter,
}

impl TransactionDetector {
    /// Creates a detector using the given relevance filter.
    #[must_use]
    pub const fn new(filter: RelevanceFilter) -> Self {
        Self { filter }
    }

    /// The relevance filter this detector applies.
    #[must_use]
    pub const fn filter(&self) -> &RelevanceFilter {
        &self.filter
    }

    /// Detects a transaction candidate in one notification event.
    ///
    /// Returns `None` when the event is not from the configured provider,
    /// has no transaction-relevant title, has no body, or the body contains
    /// no parseable amount. On success the candidate carries the extracted
    /// amount, the full body text verbatim, and the detection timestamp.
    #[must_use]
    pub fn detect(&self, event: NotificationEvent) -> Option<TransactionCandidate> {
        if !self
            .filter
            .is_transaction_notification(&event.source_package, event.title.as_deref())
        {
            trace!(source = %event.source_package, "notification is not transaction-relevant");
            return None;
        }

        let Some(body) = event.body else {
            trace!(source = %event.source_package, "provider notification without body");
            return None;
        };

        let Some(amount) = extract_amount(&body) else {
            debug!(source = %event.source_package, "no amount found in notification");
            return None;
        };

        match TransactionCandidate::new(amount, body) {
            Ok(candidate) => {
                debug!(amount = %candidate.amount, "transaction detected");
                Some(candidate)
            }
            Err(err) => {
                // A body that matched the amount pattern is never empty, so
                // this path only guards the candidate invariant.
                debug!(error = %err, "candidate construction rejected");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::filter::DEFAULT_PROVIDER_PACKAGE;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn provider_event(title: Option<&str>, body: Option<&str>) -> NotificationEvent {
        NotificationEvent::new(
            DEFAULT_PROVIDER_PACKAGE,
            title.map(String::from),
            body.map(String::from),
        )
    }

    #[test]
    fn detects_candidate_from_transaction_notification() {
        let detector = TransactionDetector::default();
        let before = Utc::now();

        let candidate = detector
            .detect(provider_event(
                Some("Transaction Alert"),
                Some("You paid $42.00 to Store X"),
            ))
            .unwrap();

        assert_eq!(candidate.amount.as_decimal(), dec!(42.00));
        assert_eq!(candidate.description, "You paid $42.00 to Store X");
        assert!(candidate.detected_at >= before);
    }

    #[test]
    fn rejects_wrong_source() {
        let detector = TransactionDetector::default();
        let event = NotificationEvent::new(
            "com.other.app",
            Some("Payment received".to_string()),
            Some("You paid $42.00".to_string()),
        );
        assert!(detector.detect(event).is_none());
    }

    #[test]
    fn rejects_irrelevant_title() {
        let detector = TransactionDetector::default();
        let event = provider_event(Some("Weekly summary"), Some("You paid $42.00"));
        assert!(detector.detect(event).is_none());
    }

    #[test]
    fn rejects_missing_title() {
        let detector = TransactionDetector::default();
        assert!(detector.detect(provider_event(None, Some("You paid $42.00"))).is_none());
    }

    #[test]
    fn rejects_missing_body() {
        let detector = TransactionDetector::default();
        assert!(detector.detect(provider_event(Some("Transaction Alert"), None)).is_none());
    }

    #[test]
    fn rejects_body_without_amount() {
        let detector = TransactionDetector::default();
        let event = provider_event(Some("Transaction Alert"), Some("Thank you for using the app"));
        assert!(detector.detect(event).is_none());
    }

    #[test]
    fn description_preserves_body_verbatim() {
        let detector = TransactionDetector::default();
        let body = "Paid $12.34 at store, prior charge $5.00";
        let candidate = detector
            .detect(provider_event(Some("Payment"), Some(body)))
            .unwrap();

        assert_eq!(candidate.amount.as_decimal(), dec!(12.34));
        assert_eq!(candidate.description, body);
    }
}
