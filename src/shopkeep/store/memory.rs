use super::DataStore;
use crate::error::Result;
use crate::model::Product;
use crate::seed::seed_products;

/// In-memory storage for testing and development.
/// Does NOT persist data, and never serializes.
#[derive(Default)]
pub struct InMemoryStore {
    products: Option<Vec<Product>>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose slot already holds `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Some(products),
            saves: 0,
        }
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// What the last save wrote, if anything was ever written.
    pub fn persisted(&self) -> Option<&[Product]> {
        self.products.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Vec<Product> {
        self.products.clone().unwrap_or_else(seed_products)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.products = Some(products.to_vec());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ProductDraft, ProductId};
    use chrono::{DateTime, Duration};

    /// Builds a product with a fixed id and a creation date `minutes` after a
    /// fixed epoch, so ordering by date is predictable.
    pub fn product(id: &str, name: &str, price: f64, minutes: i64) -> Product {
        let base = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
        Product::from_draft(
            ProductId::from(id),
            &ProductDraft::new(name, price),
            base + Duration::minutes(minutes),
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// An empty (but written) collection.
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::with_products(Vec::new()),
                next: 0,
            }
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for _ in 0..count {
                let n = self.next + 1;
                self = self.with_product(&format!("Product {}", n), n as f64);
            }
            self
        }

        pub fn with_product(self, name: &str, price: f64) -> Self {
            self.with_described_product(name, "", price)
        }

        pub fn with_described_product(mut self, name: &str, description: &str, price: f64) -> Self {
            self.next += 1;
            let mut item = product(&format!("p{}", self.next), name, price, self.next);
            item.description = description.to_string();
            let mut products = self.store.load();
            products.push(item);
            self.store = InMemoryStore::with_products(products);
            self
        }

        pub fn products(&self) -> Vec<Product> {
            self.store.load()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn unwritten_store_loads_seed() {
        assert_eq!(InMemoryStore::new().load(), seed_products());
    }

    #[test]
    fn fixture_keeps_insertion_order() {
        let fixture = StoreFixture::new().with_product("B", 1.0).with_product("A", 2.0);
        let names: Vec<_> = fixture.products().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(fixture.store.save_count(), 0);
    }
}
