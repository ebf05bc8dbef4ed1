use super::backend::StorageBackend;
use super::{decode, encode, DataStore};
use crate::error::Result;
use crate::model::Product;
use crate::seed::seed_products;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A [`DataStore`] persisting the collection as JSON in a backend's slot.
pub struct SlotStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> SlotStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn slot_path(&self) -> PathBuf {
        self.backend.slot_path()
    }
}

impl<B: StorageBackend> DataStore for SlotStore<B> {
    fn load(&self) -> Vec<Product> {
        let payload = match self.backend.read_slot() {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(slot = %self.backend.slot_path().display(), "Slot is empty, using seed collection");
                return seed_products();
            }
            Err(e) => {
                warn!(error = %e, "Could not read product slot, using seed collection");
                return seed_products();
            }
        };

        match decode(&payload) {
            Ok(products) => {
                debug!(count = products.len(), "Loaded products");
                products
            }
            Err(e) => {
                warn!(error = %e, "Stored products are malformed, using seed collection");
                seed_products()
            }
        }
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        let payload = encode(products)?;
        self.backend.write_slot(&payload)?;
        debug!(count = products.len(), "Saved products");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductDraft, ProductId};
    use crate::store::mem_backend::MemBackend;
    use chrono::Utc;

    #[test]
    fn empty_slot_loads_seed() {
        let store = SlotStore::with_backend(MemBackend::new());
        assert_eq!(store.load(), seed_products());
    }

    #[test]
    fn invalid_stored_products_are_not_loaded() {
        let payload = r#"[
            {"id":"bad","name":"","description":"","price":-5,"image":"","creationDate":"2024-01-01T10:00:00Z"},
            {"id":"good","name":"Mug","description":"","price":5,"image":"","creationDate":"2024-01-01T10:00:00Z"}
        ]"#;
        let store = SlotStore::with_backend(MemBackend::with_payload(payload));

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id.as_str(), "good");
    }

    #[test]
    fn malformed_slot_loads_seed() {
        let store = SlotStore::with_backend(MemBackend::with_payload("{oops"));
        assert_eq!(store.load(), seed_products());
    }

    #[test]
    fn empty_array_is_not_malformed() {
        let store = SlotStore::with_backend(MemBackend::with_payload("[]"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_replaces_slot() {
        let mut store = SlotStore::with_backend(MemBackend::new());
        let product = Product::from_draft(
            ProductId::from("only"),
            &ProductDraft::new("Only", 1.0),
            Utc::now(),
        );

        store.save(&[product.clone()]).unwrap();
        assert_eq!(store.load(), vec![product]);

        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
        assert_eq!(store.backend().write_count(), 2);
    }

    #[test]
    fn save_of_load_leaves_slot_unchanged() {
        let mut store = SlotStore::with_backend(MemBackend::new());
        store.save(&seed_products()).unwrap();
        let before = store.backend().payload();

        let loaded = store.load();
        store.save(&loaded).unwrap();
        assert_eq!(store.backend().payload(), before);
    }

    #[test]
    fn write_errors_surface() {
        let mut store = SlotStore::with_backend(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        assert!(store.save(&seed_products()).is_err());
        assert_eq!(store.backend().payload(), None);
    }
}
