//! Backend host persistence.
//!
//! The host is a single string stored under [`HOST_STORAGE_KEY`]. Readers get
//! it through the [`HostStore`] trait so guards and loaders never touch
//! `localStorage` directly and tests can swap in [`MemoryHostStore`].

use std::cell::RefCell;

use crate::config::HOST_STORAGE_KEY;
use crate::core::error::HostError;
use crate::utils::dom;

/// Read/write access to the configured backend host.
pub trait HostStore {
    /// Returns the host, or `None` when unconfigured.
    fn get(&self) -> Option<String>;

    /// Persists a new host.
    fn set(&self, host: &str) -> Result<(), HostError>;

    /// Removes the stored host.
    fn clear(&self) -> Result<(), HostError>;
}

/// Blank values count as absent; there is no "configured but empty" state.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Host store backed by browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalHostStore;

impl HostStore for LocalHostStore {
    fn get(&self) -> Option<String> {
        let storage = dom::local_storage()?;
        non_blank(storage.get_item(HOST_STORAGE_KEY).ok()?)
    }

    fn set(&self, host: &str) -> Result<(), HostError> {
        if host.trim().is_empty() {
            return Err(HostError::Empty);
        }
        let storage = dom::local_storage().ok_or(HostError::StorageUnavailable)?;
        storage
            .set_item(HOST_STORAGE_KEY, host)
            .map_err(|_| HostError::SaveFailed)
    }

    fn clear(&self) -> Result<(), HostError> {
        let storage = dom::local_storage().ok_or(HostError::StorageUnavailable)?;
        storage
            .remove_item(HOST_STORAGE_KEY)
            .map_err(|_| HostError::RemoveFailed)
    }
}

/// In-memory host store.
#[derive(Debug, Default)]
pub struct MemoryHostStore {
    host: RefCell<Option<String>>,
}

impl MemoryHostStore {
    pub fn new(host: Option<&str>) -> Self {
        Self {
            host: RefCell::new(host.map(str::to_string)),
        }
    }
}

impl HostStore for MemoryHostStore {
    fn get(&self) -> Option<String> {
        non_blank(self.host.borrow().clone())
    }

    fn set(&self, host: &str) -> Result<(), HostError> {
        if host.trim().is_empty() {
            return Err(HostError::Empty);
        }
        *self.host.borrow_mut() = Some(host.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), HostError> {
        self.host.borrow_mut().take();
        Ok(())
    }
}
