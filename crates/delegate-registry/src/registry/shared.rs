//! Thread-safe registry handle.
//!
//! Readers run concurrently; each write or transaction holds the write
//! lock for its whole duration, so concurrent callers observe every unit
//! of work either entirely or not at all.

use std::sync::{Arc, RwLock};

use crate::error::{RegistryError, Result};

use super::DelegateRegistry;

/// Cloneable handle to one in-memory registry.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<DelegateRegistry>>,
}

impl SharedRegistry {
    /// Wrap `registry` for shared use.
    pub fn new(registry: DelegateRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Run a read-only closure under the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&DelegateRegistry) -> T) -> Result<T> {
        let guard = self.inner.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(f(&guard))
    }

    /// Run a closure under the write lock.
    pub fn write<T>(&self, f: impl FnOnce(&mut DelegateRegistry) -> T) -> Result<T> {
        let mut guard = self.inner.write().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(f(&mut guard))
    }

    /// Run `f` as one atomic unit of work under the write lock.
    ///
    /// See [`DelegateRegistry::transact`].
    pub fn transact<T>(&self, f: impl FnOnce(&mut DelegateRegistry) -> Result<T>) -> Result<T> {
        let mut guard = self.inner.write().map_err(|_| RegistryError::LockPoisoned)?;
        guard.transact(f)
    }

    /// Clone the current registry state.
    pub fn snapshot(&self) -> Result<DelegateRegistry> {
        self.read(|registry| registry.clone())
    }
}
