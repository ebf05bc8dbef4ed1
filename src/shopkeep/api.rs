//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for one-shot operations, whatever UI drives them.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (raw id strings to [`ProductId`], optional list
//!   parameters to a full [`ViewQuery`] using the configured defaults)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own beyond what the store and config do, and it
//! never formats output.
//!
//! `ShopkeepApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShopkeepApi<SlotStore<FsBackend>>`
//! - Testing: `ShopkeepApi<InMemoryStore>`
//!
//! Interactive use goes through [`ShopkeepApi::into_session`], which hands the
//! store to a [`Session`].

use crate::commands;
use crate::config::ShopkeepConfig;
use crate::error::Result;
use crate::inventory::ProductStore;
use crate::model::{ProductId, SortOption};
use crate::query::ViewQuery;
use crate::session::Session;
use crate::store::DataStore;
use std::path::PathBuf;

pub struct ShopkeepApi<S: DataStore> {
    store: ProductStore<S>,
    config_dir: PathBuf,
    config: ShopkeepConfig,
}

impl<S: DataStore> ShopkeepApi<S> {
    pub fn new(store: S, config_dir: PathBuf, config: ShopkeepConfig) -> Self {
        Self {
            store: ProductStore::open(store),
            config_dir,
            config,
        }
    }

    pub fn store(&self) -> &ProductStore<S> {
        &self.store
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// The query a listing starts from: page 1, configured sort and page size.
    pub fn default_query(&self) -> ViewQuery {
        ViewQuery::default()
            .with_sort(self.config.default_sort)
            .with_page_size(self.config.page_size)
    }

    pub fn list_products(
        &self,
        search: Option<String>,
        sort: Option<SortOption>,
        page: usize,
    ) -> Result<commands::CmdResult> {
        let mut query = self.default_query().with_page(page);
        if let Some(term) = search {
            query = query.with_search(term);
        }
        if let Some(sort) = sort {
            query = query.with_sort(sort);
        }
        commands::list::run(&self.store, &query)
    }

    pub fn add_product(&mut self, fields: &ProductFields) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, fields)
    }

    pub fn show_products<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, &parse_ids(ids))
    }

    pub fn edit_product(&mut self, id: &str, fields: &ProductFields) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, &ProductId::from(id), fields)
    }

    pub fn delete_products<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &parse_ids(ids))
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Hands the store to an interactive session starting at the default query.
    pub fn into_session(self) -> Session<S> {
        let query = self.default_query();
        Session::new(self.store, query)
    }
}

fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Vec<ProductId> {
    inputs
        .iter()
        .map(|s| ProductId::from(s.as_ref().trim()))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ProductFields};
