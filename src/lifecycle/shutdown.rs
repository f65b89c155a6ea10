//! Shutdown coordination for the server.
//!
//! A `watch` channel holds a single "stopping" flag, so a subscriber that joins
//! after the trigger still observes it.

use tokio::sync::watch;

/// Owner side: flips the flag once.
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

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

/// Listener side, handed to the server.
#[derive(Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolves once shutdown is triggered, or once the [`Shutdown`] owner is
    /// dropped (nothing could trigger it any more).
    pub async fn wait(mut self) {
        let _ = self.rx.wait_for(|stopping| *stopping).await;
    }
}
