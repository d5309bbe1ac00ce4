//! Event bridge connecting detection to the consuming application layer.
//!
//! The bridge holds at most one live subscriber, pushes candidates to it with
//! a single non-blocking handoff, and drives the upstream observation
//! registration so that observation only runs while a consumer is attached.
//! Delivery is best-effort and at-most-once: candidates observed while no
//! subscriber is attached, or while the subscriber's channel is full, are
//! dropped and counted, never queued or retried.

/// Single-subscriber slot and candidate delivery.
pub mod bridge;
/// Upstream registration handle.
pub mod source;
/// Subscriber stream handle.
pub mod stream;

pub use bridge::{BridgeConfig, EventBridge, SubscriptionId};
pub use source::{NotificationSource, NullSource};
pub use stream::TransactionStream;
