//! Thread-safe handle around a single indicator.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indicator_spi::{Components, Metadata, StreamingIndicator};

/// Cloneable handle sharing one indicator between threads.
///
/// Every clone feeds the same state; each update holds the lock for the
/// duration of one sample.
#[derive(Debug)]
pub struct Shared<F> {
    inner: Arc<Mutex<F>>,
}

impl<F> Clone for Shared<F> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<F: StreamingIndicator> Shared<F> {
    pub fn new(indicator: F) -> Self {
        Self { inner: Arc::new(Mutex::new(indicator)) }
    }

    /// Exclusive access to the wrapped indicator. A poisoned lock is recovered.
    pub fn lock(&self) -> MutexGuard<'_, F> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<F: StreamingIndicator> StreamingIndicator for Shared<F> {
    fn update(&mut self, sample: f64) -> f64 {
        self.lock().update(sample)
    }

    fn is_primed(&self) -> bool {
        self.lock().is_primed()
    }

    fn metadata(&self) -> Metadata {
        self.lock().metadata()
    }

    fn components(&self) -> Components {
        self.lock().components()
    }
}
