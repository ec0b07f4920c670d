//! Debounced save-status settling
//!
//! Every form mutation restarts a single outstanding timer. When the timer
//! elapses it reports the revision it was scheduled for; the model then flips
//! `Saving` to `Saved` only if no later edit bumped the revision. Cancellation
//! is enforced twice: the pending task is aborted, and a message that slips
//! through anyway is dropped by the revision guard.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Quiet period after the last edit before the form counts as saved
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Owns the one outstanding debounce task and the channel it reports on
pub struct Autosave {
    tx: mpsc::UnboundedSender<u64>,
    rx: mpsc::UnboundedReceiver<u64>,
    pending: Option<JoinHandle<()>>,
}

impl Autosave {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: None,
        }
    }

    /// Restart the settle window for `revision`, cancelling any pending one
    pub fn schedule(&mut self, revision: u64) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(SETTLE_DELAY).await;
            let _ = tx.send(revision);
        }));
    }

    /// Drain one settle notification, if any has fired
    pub fn try_settled(&mut self) -> Option<u64> {
        self.rx.try_recv().ok()
    }
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new()
    }
}
