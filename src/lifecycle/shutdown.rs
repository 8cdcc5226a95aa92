//! Shutdown coordination.

use tokio::sync::watch;

/// Fan-out shutdown trigger.
///
/// The server holds a [`ShutdownSignal`] and stops accepting connections
/// once [`Shutdown::trigger`] is called (or the `Shutdown` is dropped).
#[derive(Debug)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Get a future-producing handle for one consumer.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of [`Shutdown`].
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolve once shutdown has been triggered or the sender is gone.
    pub async fn recv(mut self) {
        // Err means the sender dropped, which also counts as shutdown.
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }
}
