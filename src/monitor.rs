//! Monitor facade wiring the detection pipeline to the event bridge.
//!
//! [`TransactionMonitor`] is the single entry point the hosting process
//! needs: the OS notification facility invokes [`observe`] once per posted
//! notification, and the consuming application layer calls [`subscribe`] to
//! receive the resulting candidate stream.
//!
//! [`observe`]: TransactionMonitor::observe
//! [`subscribe`]: TransactionMonitor::subscribe

use std::sync::Arc;

use crate::bridge::{BridgeConfig, EventBridge, NotificationSource, TransactionStream};
use crate::detect::{RelevanceFilter, TransactionDetector, DEFAULT_PROVIDER_PACKAGE};
use crate::error::WatchResult;
use crate::event::NotificationEvent;

/// Monitor tuning knobs.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Package identifier of the payment provider to watch.
    pub provider_package: String,
    /// Subscriber channel buffer capacity.
    pub stream_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            provider_package: DEFAULT_PROVIDER_PACKAGE.to_string(),
            stream_capacity: BridgeConfig::default().stream_capacity,
        }
    }
}

/// Observes notification events, detects transactions, and streams candidates
/// to the attached subscriber.
#[derive(Debug, Clone)]
pub struct TransactionMonitor {
    detector: TransactionDetector,
    bridge: EventBridge,
}

impl TransactionMonitor {
    /// Creates a monitor owning the given upstream registration handle.
    ///
    /// The monitor starts idle: the source is not activated until a
    /// subscriber attaches.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `cfg.provider_package` is empty.
    pub fn new(cfg: MonitorConfig, source: Arc<dyn NotificationSource>) -> WatchResult<Self> {
        let filter = RelevanceFilter::new(cfg.provider_package)?;
        let bridge = EventBridge::new(
            BridgeConfig {
                stream_capacity: cfg.stream_capacity,
            },
            source,
        );

        Ok(Self {
            detector: TransactionDetector::new(filter),
            bridge,
        })
    }

    /// Feeds one notification event through the pipeline.
    ///
    /// This is the callback target for the OS observation facility: it is
    /// invoked once per posted notification, never blocks, and never fails.
    /// Events that do not yield a candidate are discarded; a detected
    /// candidate is published to the attached subscriber, if any.
    pub fn observe(&self, event: NotificationEvent) {
        if let Some(candidate) = self.detector.detect(event) {
            self.bridge.publish(candidate);
        }
    }

    /// Attaches a subscriber and returns its candidate stream.
    ///
    /// Replaces any previous subscriber; see
    /// [`EventBridge::attach`](crate::bridge::EventBridge::attach).
    pub fn subscribe(&self) -> TransactionStream {
        self.bridge.attach()
    }

    /// The underlying event bridge.
    #[must_use]
    pub const fn bridge(&self) -> &EventBridge {
        &self.bridge
    }

    /// Number of candidates dropped on delivery.
    #[must_use]
    pub fn dropped_deliveries(&self) -> u64 {
        self.bridge.dropped_deliveries()
    }
}
