use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while SlotStore handles the "what" (encoding, seed fallback).
pub trait StorageBackend {
    /// Read the raw slot payload.
    /// Returns Ok(None) if nothing has been written yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self) -> Result<Option<String>>;

    /// Replace the slot payload.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, payload: &str) -> Result<()>;

    /// Where the slot lives. For MemBackend, a virtual path.
    fn slot_path(&self) -> PathBuf;
}
