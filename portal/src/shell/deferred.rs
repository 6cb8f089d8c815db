//! Navigation applied after a short delay.
//!
//! The pending transition belongs to the view that scheduled it. Dropping
//! the [`PendingNavigation`] handle aborts the timer, so a torn-down view
//! never applies a stale transition.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{NavigationShell, Section, ShellOutcome};

/// Handle to a scheduled navigation.
#[derive(Debug)]
pub struct PendingNavigation {
    target: Section,
    handle: Option<JoinHandle<ShellOutcome>>,
}

impl PendingNavigation {
    /// Section the shell will switch to.
    pub fn target(&self) -> Section {
        self.target
    }

    /// Whether the navigation has applied or can no longer run.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Waits for the navigation to apply.
    ///
    /// Returns `None` when the task was aborted before it ran. The handle
    /// stays owned while waiting, so cancelling this future still aborts
    /// the navigation.
    pub async fn completed(mut self) -> Option<ShellOutcome> {
        let handle = self.handle.as_mut()?;
        let outcome = handle.await.ok();
        self.handle = None;
        outcome
    }
}

impl Drop for PendingNavigation {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                debug!(target_section = %self.target, "pending navigation discarded");
            }
            handle.abort();
        }
    }
}

/// Schedules a navigation to `target` once `delay` has elapsed.
///
/// Must be called from within a Tokio runtime.
pub fn navigate_after(
    shell: Arc<Mutex<NavigationShell>>,
    target: Section,
    delay: Duration,
) -> PendingNavigation {
    debug!(target_section = %target, delay_ms = delay.as_millis(), "navigation scheduled");
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        shell.lock().await.navigate_to(target)
    });
    PendingNavigation {
        target,
        handle: Some(handle),
    }
}
