use super::backend::StorageBackend;
use crate::error::{Result, ShopkeepError};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory slot backend for testing.
///
/// Uses `RefCell` for interior mutability since shopkeep is single-threaded,
/// which keeps `StorageBackend` on `&self`.
#[derive(Default)]
pub struct MemBackend {
    slot: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw payload already in the slot (valid or not).
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.slot.borrow_mut() = Some(payload.into());
        backend
    }

    /// The raw payload currently in the slot.
    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write_slot(&self, payload: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShopkeepError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        *self.slot.borrow_mut() = Some(payload.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn slot_path(&self) -> PathBuf {
        PathBuf::from("memory://products.json")
    }
}
