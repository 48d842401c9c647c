use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

/// Cloneable handle that stops a debate from outside the controller.
///
/// Triggering it cancels a generation that is currently in flight; the
/// controller re-arms it on every start.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    token: Arc<Mutex<CancellationToken>>,
}

impl StopSignal {
    pub fn trigger(&self) {
        self.token.lock().cancel();
    }

    pub fn is_triggered(&self) -> bool {
        self.token.lock().is_cancelled()
    }

    pub(crate) fn token(&self) -> CancellationToken {
        self.token.lock().clone()
    }

    pub(crate) fn rearm(&self) {
        *self.token.lock() = CancellationToken::new();
    }
}
