//! Single-subscriber event bridge.
//!
//! The bridge owns the sole subscriber slot. `attach` installs a new
//! subscription (replacing any previous one), `detach` clears it, and
//! `publish` hands a candidate to the live subscriber with a non-blocking
//! `try_send`. A single mutex serializes all slot access; delivery never
//! blocks the observation path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossbeam_channel::{bounded, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::bridge::source::NotificationSource;
use crate::bridge::stream::TransactionStream;
use crate::event::TransactionCandidate;

/// Unique identifier for a subscription.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Creates a new random subscription id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bridge tuning knobs.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Subscriber channel buffer capacity. Candidates beyond this are dropped
    /// rather than blocking the observation callback.
    pub stream_capacity: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            stream_capacity: 1024,
        }
    }
}

#[derive(Debug)]
struct ActiveSubscription {
    id: SubscriptionId,
    tx: Sender<TransactionCandidate>,
}

#[derive(Debug)]
pub(crate) struct BridgeInner {
    cfg: BridgeConfig,
    source: Arc<dyn NotificationSource>,
    slot: Mutex<Option<ActiveSubscription>>,
    dropped_deliveries: AtomicU64,
}

impl BridgeInner {
    fn slot_guard(&self) -> MutexGuard<'_, Option<ActiveSubscription>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn activate_source(&self) {
        if let Err(err) = self.source.activate() {
            warn!(error = %err, "notification source activation failed");
        }
    }

    fn deactivate_source(&self) {
        if let Err(err) = self.source.deactivate() {
            warn!(error = %err, "notification source deactivation failed");
        }
    }

    /// Clears the slot iff `id` is still the live subscription.
    ///
    /// A replaced stream's late detach (including via `Drop`) must not tear
    /// down its successor's registration.
    pub(crate) fn detach(&self, id: SubscriptionId) {
        let removed = {
            let mut slot = self.slot_guard();
            match slot.take() {
                Some(active) if active.id == id => true,
                other => {
                    *slot = other;
                    false
                }
            }
        };

        if removed {
            debug!(subscription = %id, "subscriber detached");
            self.deactivate_source();
        }
    }
}

/// Delivers transaction candidates to the single attached subscriber.
///
/// State machine: Idle (no subscriber, observation inactive) and Active
/// (subscriber present, observation active). `attach` on an idle bridge
/// activates the upstream source; `attach` on an active bridge swaps the
/// subscriber and leaves observation running; `detach` returns to Idle and
/// deactivates the source; `detach` while idle is a no-op. The bridge has no
/// terminal state and persists for the life of the hosting process.
#[derive(Debug, Clone)]
pub struct EventBridge {
    inner: Arc<BridgeInner>,
}

impl EventBridge {
    /// Creates an idle bridge owning the given upstream registration handle.
    #[must_use]
    pub fn new(cfg: BridgeConfig, source: Arc<dyn NotificationSource>) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                cfg,
                source,
                slot: Mutex::new(None),
                dropped_deliveries: AtomicU64::new(0),
            }),
        }
    }

    /// Attaches a subscriber, replacing any previous one.
    ///
    /// The previous subscriber receives no further events and is not
    /// notified of the replacement; its stream reports disconnection once
    /// drained. Activates the upstream source iff the bridge was idle.
    pub fn attach(&self) -> TransactionStream {
        let id = SubscriptionId::new();
        let (tx, rx) = bounded::<TransactionCandidate>(self.inner.cfg.stream_capacity.max(1));

        let replaced = {
            let mut slot = self.inner.slot_guard();
            slot.replace(ActiveSubscription { id, tx }).is_some()
        };

        if replaced {
            debug!(subscription = %id, "subscriber attached, replacing previous");
        } else {
            debug!(subscription = %id, "subscriber attached");
            self.inner.activate_source();
        }

        TransactionStream::new(id, rx, Arc::downgrade(&self.inner))
    }

    /// Detaches the subscription with the given id, if it is still live.
    pub fn detach(&self, id: SubscriptionId) {
        self.inner.detach(id);
    }

    /// Detaches whatever subscriber is currently attached.
    ///
    /// Idempotent: calling this on an idle bridge is a no-op.
    pub fn detach_current(&self) {
        let removed = self.inner.slot_guard().take().is_some();
        if removed {
            debug!("current subscriber detached");
            self.inner.deactivate_source();
        }
    }

    /// Delivers a candidate to the attached subscriber, if any.
    ///
    /// Never blocks: with no subscriber the candidate is discarded, and a
    /// full or disconnected subscriber channel drops the candidate and
    /// increments [`dropped_deliveries`](Self::dropped_deliveries).
    pub fn publish(&self, candidate: TransactionCandidate) {
        let slot = self.inner.slot_guard();
        let Some(active) = slot.as_ref() else {
            trace!("no subscriber attached, candidate dropped");
            return;
        };

        match active.tx.try_send(candidate) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => {
                self.inner.dropped_deliveries.fetch_add(1, Ordering::Relaxed);
                debug!(subscription = %active.id, "subscriber channel unavailable, candidate dropped");
            }
        }
    }

    /// True while a subscriber is attached.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.slot_guard().is_some()
    }

    /// Number of candidates dropped because the subscriber channel was full
    /// or already gone.
    #[must_use]
    pub fn dropped_deliveries(&self) -> u64 {
        self.inner.dropped_deliveries.load(Ordering::Relaxed)
    }
}
