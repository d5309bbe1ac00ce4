//! Upstream notification-observation registration handle.

use std::fmt::Debug;

use crate::error::WatchResult;

/// Registration handle for the OS notification-observation facility.
///
/// The event bridge owns one of these and drives it deterministically:
/// observation is activated when a subscriber attaches to an idle bridge and
/// deactivated when the subscriber detaches, so observation only runs while
/// someone is listening. The bridge treats a failed activation or
/// deactivation as degraded operation (logged, state transition proceeds)
/// rather than a fatal condition.
pub trait NotificationSource: Send + Sync + Debug {
    /// Starts delivering notification-posted callbacks.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying registration cannot be
    /// established.
    fn activate(&self) -> WatchResult<()>;

    /// Stops delivering notification-posted callbacks.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying registration cannot be released.
    fn deactivate(&self) -> WatchResult<()>;
}

/// A source with no backing registration.
///
/// Useful for embedded use where notification events are fed to
/// [`TransactionMonitor::observe`](crate::monitor::TransactionMonitor::observe)
/// directly, and for benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSource;

impl NotificationSource for NullSource {
    fn activate(&self) -> WatchResult<()> {
        Ok(())
    }

    fn deactivate(&self) -> WatchResult<()> {
        Ok(())
    }
}
