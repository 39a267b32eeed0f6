//! One-shot timers on the tokio runtime.

use std::time::Duration;

use tokio::task::AbortHandle;

/// Handle to a scheduled one-shot timer.
///
/// Dropping the handle does not cancel the timer; use
/// [`TimerHandle::cancel`] for that.
#[derive(Debug)]
pub struct TimerHandle {
    task: AbortHandle,
}

impl TimerHandle {
    /// Cancel the timer if it has not fired yet.
    ///
    /// Calling this on a timer that already fired or was already cancelled
    /// has no effect.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the timer has fired or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Schedule `callback` to run exactly once after `delay` elapses.
///
/// The callback runs on the tokio runtime, and never before this call
/// returns, even with a zero delay. Must be called from within a runtime.
pub fn start_timer<F>(delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        callback();
    });

    TimerHandle {
        task: task.abort_handle(),
    }
}
