use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Shared stop flag, polled by the driver between generations.
#[derive(Debug, Clone, Default)]
pub struct Cancellation(Arc<AtomicBool>);

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Spawn a task that sets the flag on the first Ctrl-C.
    pub fn cancel_on_ctrl_c(&self) -> JoinHandle<()> {
        let token = self.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("interrupt received, stopping after the current generation");
                    token.cancel();
                }
                Err(err) => warn!(%err, "could not listen for interrupts"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = Cancellation::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[tokio::test]
    async fn listener_can_be_aborted() {
        let token = Cancellation::new();
        let listener = token.cancel_on_ctrl_c();
        listener.abort();
        assert!(listener.await.unwrap_err().is_cancelled());
        assert!(!token.is_cancelled());
    }
}
