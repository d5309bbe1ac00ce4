//! Detection pipeline for transaction-bearing notifications.
//!
//! The pipeline is a pair of pure functions feeding an orchestrator: the
//! relevance filter decides whether an inbound event could be a transaction
//! notification at all, the extractor pulls the first monetary amount out of
//! the free-text body, and the detector combines both into a fully populated
//! [`TransactionCandidate`](crate::event::TransactionCandidate) or nothing.

/// Pipeline orchestration per notification event.
pub mod detector;
/// Amount extraction from free text.
pub mod extract;
/// Relevance filtering for inbound events.
pub mod filter;

pub use detector::TransactionDetector;
pub use extract::extract_amount;
pub use filter::{RelevanceFilter, DEFAULT_PROVIDER_PACKAGE};
