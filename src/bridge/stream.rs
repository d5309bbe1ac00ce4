//! Subscriber stream handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Weak;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::bridge::bridge::{BridgeInner, SubscriptionId};
use crate::error::{ExecutionError, WatchError, WatchResult};
use crate::event::TransactionCandidate;

/// A subscription stream of transaction candidates.
///
/// Candidates arrive in the order their source notifications were observed.
/// Dropping this stream attempts best-effort unsubscription from the bridge.
#[derive(Debug)]
pub struct TransactionStream {
    subscription_id: SubscriptionId,
    rx: Receiver<TransactionCandidate>,
    bridge: Weak<BridgeInner>,
    unregistered: AtomicBool,
}

impl TransactionStream {
    pub(crate) fn new(
        subscription_id: SubscriptionId,
        rx: Receiver<TransactionCandidate>,
        bridge: Weak<BridgeInner>,
    ) -> Self {
        Self {
            subscription_id,
            rx,
            bridge,
            unregistered: AtomicBool::new(false),
        }
    }

    /// The subscription id backing this stream.
    #[must_use]
    pub const fn subscription_id(&self) -> SubscriptionId {
        self.subscription_id
    }

    /// Explicit unsubscription.
    ///
    /// Non-blocking and idempotent. If this stream was already replaced by a
    /// newer subscriber, the call leaves the successor untouched. After the
    /// bridge clears the slot, the stream reports disconnection once drained.
    pub fn unsubscribe(&self) {
        if self.unregistered.swap(true, Ordering::AcqRel) {
            return;
        }

        if let Some(bridge) = self.bridge.upgrade() {
            bridge.detach(self.subscription_id);
        }
    }

    /// Receives the next candidate (blocking).
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::Disconnected` once the subscription is gone
    /// and the buffer is drained.
    pub fn recv(&self) -> WatchResult<TransactionCandidate> {
        self.rx.recv().map_err(|_| {
            WatchError::Execution(ExecutionError::Disconnected {
                path: "transaction_stream".to_string(),
            })
        })
    }

    /// Receives the next candidate with a timeout.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::Timeout` when no candidate arrives in time,
    /// or `ExecutionError::Disconnected` once the subscription is gone.
    pub fn recv_timeout(&self, timeout: Duration) -> WatchResult<TransactionCandidate> {
        self.rx.recv_timeout(timeout).map_err(|err| match err {
            RecvTimeoutError::Timeout => WatchError::Execution(ExecutionError::Timeout {
                duration_ms: timeout.as_millis().min(u128::from(u64::MAX)) as u64,
            }),
            RecvTimeoutError::Disconnected => WatchError::Execution(ExecutionError::Disconnected {
                path: "transaction_stream".to_string(),
            }),
        })
    }
}

impl Drop for TransactionStream {
    fn drop(&mut self) {
        // Best-effort: do not block on shutdown.
        if !self.unregistered.swap(true, Ordering::AcqRel) {
            if let Some(bridge) = self.bridge.upgrade() {
                bridge.detach(self.subscription_id);
            }
        }
    }
}
