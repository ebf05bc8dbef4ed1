//! The authoritative product collection.
//!
//! [`ProductStore`] loads the collection once from a [`DataStore`] and keeps
//! it in memory. Every mutation builds the next collection, saves it, and
//! only then replaces the in-memory copy: a failed save leaves both the slot
//! and the collection as they were.

use crate::error::{Result, ShopkeepError};
use crate::id::generate_unique;
use crate::model::{Product, ProductDraft, ProductId};
use crate::seed::seed_products;
use crate::store::DataStore;
use crate::validation::validate;
use chrono::Utc;
use tracing::info;

pub struct ProductStore<S: DataStore> {
    store: S,
    products: Vec<Product>,
}

impl<S: DataStore> ProductStore<S> {
    pub fn open(store: S) -> Self {
        let products = store.load();
        Self { store, products }
    }

    /// The collection in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn data_store(&self) -> &S {
        &self.store
    }

    /// Validates `draft` and appends it as a new product with a fresh id and
    /// the current time as its creation date.
    pub fn create(&mut self, draft: &ProductDraft) -> Result<Product> {
        validate(draft).map_err(ShopkeepError::Validation)?;

        let id = generate_unique(&self.products);
        let product = Product::from_draft(id, draft, Utc::now());

        let mut next = self.products.clone();
        next.push(product.clone());
        self.commit(next)?;

        info!(id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Validates `draft` and overwrites the editable fields of product `id`,
    /// keeping its position, id and creation date.
    pub fn update(&mut self, id: &ProductId, draft: &ProductDraft) -> Result<Product> {
        validate(draft).map_err(ShopkeepError::Validation)?;

        let pos = self.position(id)?;
        let mut next = self.products.clone();
        next[pos].apply(draft);
        let updated = next[pos].clone();
        self.commit(next)?;

        info!(id = %updated.id, name = %updated.name, "Product updated");
        Ok(updated)
    }

    /// Removes product `id`, leaving the others in order.
    pub fn delete(&mut self, id: &ProductId) -> Result<Product> {
        let pos = self.position(id)?;
        let mut next = self.products.clone();
        let removed = next.remove(pos);
        self.commit(next)?;

        info!(id = %removed.id, name = %removed.name, "Product deleted");
        Ok(removed)
    }

    /// Removes every product in `ids` with a single save. All ids are
    /// resolved first; an unknown id fails before anything is removed.
    pub fn delete_many(&mut self, ids: &[ProductId]) -> Result<Vec<Product>> {
        let mut targets: Vec<&ProductId> = Vec::with_capacity(ids.len());
        for id in ids {
            self.position(id)?;
            if !targets.contains(&id) {
                targets.push(id);
            }
        }

        let (removed, kept): (Vec<Product>, Vec<Product>) = self
            .products
            .iter()
            .cloned()
            .partition(|p| targets.contains(&&p.id));
        self.commit(kept)?;

        for product in &removed {
            info!(id = %product.id, name = %product.name, "Product deleted");
        }
        Ok(removed)
    }

    /// Replaces the whole collection with the seed products.
    pub fn reset(&mut self) -> Result<()> {
        self.commit(seed_products())?;
        info!(count = self.products.len(), "Catalog reset to seed products");
        Ok(())
    }

    fn position(&self, id: &ProductId) -> Result<usize> {
        self.products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| ShopkeepError::ProductNotFound(id.clone()))
    }

    fn commit(&mut self, next: Vec<Product>) -> Result<()> {
        self.store.save(&next)?;
        self.products = next;
        Ok(())
    }
}
