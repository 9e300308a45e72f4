//! Deferred command scheduling.
//!
//! Components never run deferred work themselves; they hand a command to a
//! [`Scheduler`] and the host event loop drains the queue once per turn. The
//! scheduler is injected rather than ambient, so a test can step the queue
//! by hand.

use tokio::sync::mpsc;

/// A one-shot command scheduled to run on a later event-loop turn.
pub type ScheduledCommand = Box<dyn FnOnce() + Send>;

/// Capability to run a command later, once, after the current turn.
///
/// No ordering or priority contract beyond "after the current turn"; a
/// command cannot be canceled once scheduled.
pub trait Scheduler: Send + Sync {
    fn schedule_deferred(&self, command: ScheduledCommand);
}

/// Sender half of the command channel.
#[derive(Debug, Clone)]
pub struct DeferredScheduler {
    tx: mpsc::UnboundedSender<ScheduledCommand>,
}

impl Scheduler for DeferredScheduler {
    /// Non-blocking. Errors are ignored (receiver dropped = host shut down).
    fn schedule_deferred(&self, command: ScheduledCommand) {
        let _ = self.tx.send(command);
    }
}

/// Receiver half of the command channel, owned by the host event loop.
#[derive(Debug)]
pub struct CommandQueue {
    rx: mpsc::UnboundedReceiver<ScheduledCommand>,
}

impl CommandQueue {
    /// Run every command scheduled before this call, in FIFO order.
    ///
    /// Commands scheduled while the batch runs wait for the next turn.
    /// Returns the number of commands run.
    pub fn drain(&mut self) -> usize {
        let mut batch = Vec::new();
        while let Ok(command) = self.rx.try_recv() {
            batch.push(command);
        }
        let ran = batch.len();
        for command in batch {
            command();
        }
        ran
    }

    /// Wait for the next scheduled command without running it.
    ///
    /// Returns `None` when every scheduler handle has been dropped.
    pub async fn recv(&mut self) -> Option<ScheduledCommand> {
        self.rx.recv().await
    }
}

/// Create a new scheduler/queue pair.
pub fn command_channel() -> (DeferredScheduler, CommandQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DeferredScheduler { tx }, CommandQueue { rx })
}
