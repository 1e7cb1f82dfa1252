//! Wakeup channel for passive rendering.
//!
//! The host loop blocks while idle. When a timer task mutates widget state
//! (an animation step, a toast expiring), a wakeup signal is sent so the
//! host knows to render again.

use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Sender half of the wakeup channel.
#[derive(Clone, Debug)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Send a wakeup signal.
    ///
    /// Non-blocking. Errors are ignored (receiver dropped = shutting down).
    pub fn send(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Receiver half of the wakeup channel.
pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    /// Wait for a wakeup signal.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Drain all pending wakeup signals.
    ///
    /// Multiple buffered wakeups collapse into a single render.
    pub fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

/// Create a new wakeup channel pair.
pub fn channel() -> (WakeupSender, WakeupReceiver) {
    let (tx, rx) = mpsc::channel(16);
    (WakeupSender { tx }, WakeupReceiver { rx })
}

/// Shared slot for a wakeup sender.
///
/// Widgets hold one of these and hand clones to their timer tasks. The host
/// installs the sender whenever it is ready; signals sent before that are
/// dropped.
#[derive(Debug, Default, Clone)]
pub struct WakeupHandle {
    inner: Arc<Mutex<Option<WakeupSender>>>,
}

impl WakeupHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a wakeup sender.
    pub fn install(&self, sender: WakeupSender) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(sender);
        }
    }

    /// Send a wakeup signal if a sender is installed.
    pub fn send(&self) {
        if let Ok(guard) = self.inner.lock() {
            if let Some(sender) = guard.as_ref() {
                sender.send();
            }
        }
    }
}
