use std::sync::Arc;
use once_cell::sync::Lazy;
use tokio::sync::{Mutex, MutexGuard};

static PROCESS_WIDE_LOCK: Lazy<IntegrationLock> = Lazy::new(IntegrationLock::new);

/// Serializes create and delete against the singleton webhook integration.
/// Clones share the same underlying mutex.
#[derive(Clone, Default)]
pub struct IntegrationLock {
    inner: Arc<Mutex<()>>,
}

impl IntegrationLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock shared by every adapter in this process.
    pub fn process_wide() -> Self {
        PROCESS_WIDE_LOCK.clone()
    }

    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock().await
    }

    pub fn shares_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
