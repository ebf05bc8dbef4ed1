//! # Storage Layer
//!
//! The whole product collection lives in one **durable slot**: a single
//! key-value record holding a JSON array of products. Every read loads the
//! full collection and every write replaces it.
//!
//! ## Layers
//!
//! - [`DataStore`]: what the rest of the crate talks to. `load` never fails
//!   (missing or malformed data yields the seed collection); `save` replaces
//!   the slot wholesale.
//! - [`backend::StorageBackend`]: raw slot I/O, the "how" of storage.
//!   - [`fs_backend::FsBackend`]: `products.json` in a data directory,
//!     written atomically (tmp file then rename)
//!   - [`mem_backend::MemBackend`]: a `RefCell<Option<String>>`, for tests
//! - [`slot_store::SlotStore`]: a `DataStore` over any backend; owns the
//!   JSON encoding and the seed fallback.
//! - [`memory::InMemoryStore`]: a `DataStore` that skips serialization
//!   entirely, for tests of code above the store.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── products.json   # JSON array of products (the durable slot)
//! └── config.json     # ShopkeepConfig
//! ```
//!
//! ## Concurrency
//!
//! There is none. A single writer is assumed; two processes writing the same
//! slot get last-write-wins with no conflict detection.

use crate::error::{Result, ShopkeepError};
use crate::model::{Product, ProductDraft, ProductId};
use crate::validation::validate;
use std::collections::HashSet;
use tracing::warn;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod slot_store;

/// Whole-collection persistence.
pub trait DataStore {
    /// Read the full collection. Falls back to the seed collection when the
    /// slot is empty, unreadable or malformed.
    fn load(&self) -> Vec<Product>;

    /// Replace the persisted collection with `products`.
    fn save(&mut self, products: &[Product]) -> Result<()>;
}

/// Serializes a collection into the slot representation.
pub fn encode(products: &[Product]) -> Result<String> {
    serde_json::to_string_pretty(products).map_err(ShopkeepError::Serialization)
}

/// Parses the slot representation.
///
/// Records that fail validation are dropped, as are later records repeating
/// an earlier id, so every loaded product satisfies the schema and ids stay
/// unique.
pub fn decode(payload: &str) -> Result<Vec<Product>> {
    let parsed: Vec<Product> =
        serde_json::from_str(payload).map_err(ShopkeepError::Serialization)?;

    let products: Vec<Product> = parsed
        .into_iter()
        .filter(|p| match validate(&ProductDraft::from(p)) {
            Ok(()) => true,
            Err(errors) => {
                warn!(id = %p.id, %errors, "Dropping invalid stored product");
                false
            }
        })
        .collect();

    let mut seen: HashSet<ProductId> = HashSet::with_capacity(products.len());
    let total = products.len();
    let unique: Vec<Product> = products
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect();

    if unique.len() != total {
        warn!(
            dropped = total - unique.len(),
            "Stored collection repeats product ids; keeping first occurrences"
        );
    }
    Ok(unique)
}
