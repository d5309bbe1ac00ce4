//! # walletwatch - Payment notification transaction detection
//!
//! walletwatch observes the stream of free-text notification events posted by
//! a payment application, detects which of them represent completed
//! transactions, extracts a structured record (amount, description,
//! timestamp), and forwards it to a single downstream subscriber in near
//! real time.
//!
//! ## Core Concepts
//!
//! - **NotificationEvent**: one posted OS notification (source package, title, body)
//! - **TransactionCandidate**: a structured transaction record detected from an event
//! - **TransactionDetector**: the filter + extract pipeline, pure per event
//! - **EventBridge**: the single-subscriber delivery mechanism with at-most-once,
//!   best-effort semantics
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use walletwatch::{MonitorConfig, NotificationEvent, TransactionMonitor};
//!
//! // `OsSource` implements walletwatch::NotificationSource for the
//! // platform's notification-observation facility.
//! let monitor = TransactionMonitor::new(MonitorConfig::default(), Arc::new(OsSource))?;
//!
//! // The consuming layer attaches; this activates upstream observation.
//! let stream = monitor.subscribe();
//!
//! // The OS facility invokes this once per posted notification.
//! monitor.observe(NotificationEvent::new(
//!     "com.samsung.android.spay",
//!     Some("Transaction Alert".into()),
//!     Some("You paid $42.00 to Store X".into()),
//! ));
//!
//! let candidate = stream.recv()?;
//! assert_eq!(candidate.description, "You paid $42.00 to Store X");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core types
pub mod error;
pub mod event;
pub mod money;

// Detection pipeline and delivery
pub mod bridge;
pub mod detect;
pub mod monitor;

// Re-export primary types at crate root for convenience
pub use bridge::{
    BridgeConfig, EventBridge, NotificationSource, NullSource, SubscriptionId, TransactionStream,
};
pub use detect::{extract_amount, RelevanceFilter, TransactionDetector, DEFAULT_PROVIDER_PACKAGE};
pub use error::{ExecutionError, ValidationError, WatchError, WatchResult};
pub use event::{NotificationEvent, TransactionCandidate};
pub use money::Amount;
pub use monitor::{MonitorConfig, TransactionMonitor};
