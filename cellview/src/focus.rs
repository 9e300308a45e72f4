//! Deferred focus reset.
//!
//! Some hosts refuse to move input focus onto an element created during the
//! current event-processing turn. A focus attempt therefore goes through the
//! scheduler and runs on a subsequent turn of the host loop.

use std::sync::{Arc, Mutex};

use crate::scheduler::{ScheduledCommand, Scheduler};

/// Schedule `command` to run after the current turn completes.
///
/// Never invokes `command` synchronously; it runs exactly once, when the
/// host drains its queue. The caller is not notified of completion, and a
/// failure inside `command` is the caller's concern.
pub fn reset_focus(scheduler: &dyn Scheduler, command: ScheduledCommand) {
    scheduler.schedule_deferred(command);
}

/// Handle for installing a scheduler into focusable components.
///
/// Wraps an optional scheduler that can be installed later by the runtime,
/// so components can be constructed before a host loop exists.
#[derive(Clone, Default)]
pub struct FocusHandle {
    inner: Arc<Mutex<Option<Arc<dyn Scheduler>>>>,
}

impl FocusHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a scheduler.
    pub fn install(&self, scheduler: Arc<dyn Scheduler>) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(scheduler);
        }
    }

    /// Defer `command` past the current turn if a scheduler is installed.
    ///
    /// Without an installed scheduler the command is dropped: resetting
    /// focus on a component not attached to a host loop is a no-op.
    pub fn reset_focus(&self, command: ScheduledCommand) {
        if let Ok(guard) = self.inner.lock() {
            match guard.as_ref() {
                Some(scheduler) => scheduler.schedule_deferred(command),
                None => log::trace!("focus reset dropped: no scheduler installed"),
            }
        }
    }
}

impl std::fmt::Debug for FocusHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let installed = self
            .inner
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false);
        f.debug_struct("FocusHandle")
            .field("installed", &installed)
            .finish()
    }
}
