//! # Session
//!
//! The editor/controller state machine, and the transient view state (search
//! term, sort option, page) that goes with it. Nothing here is persisted
//! except through the [`ProductStore`] it drives.
//!
//! ```text
//!             add_product                 select_product(id)
//! Browsing ─────────────────▶ Creating    Browsing/Creating/Editing ──▶ Editing
//!    ▲                          │ save ok / cancel
//!    └──────────────────────────┘
//!    ▲
//!    │ cancel, delete of the open product, delete of the last product,
//!    │ select of an unknown id
//! Editing ── save ok ──▶ Editing (with the updated snapshot)
//! ```

use crate::editor::EditorForm;
use crate::error::{Result, ShopkeepError};
use crate::inventory::ProductStore;
use crate::model::{Product, ProductId, SortOption};
use crate::query::{derive_view, step_page, total_pages, ProductView, ViewQuery};
use crate::route::Route;
use crate::store::DataStore;
use crate::validation::{Field, ValidationErrors};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Browsing,
    Creating(EditorForm),
    Editing { product: Product, form: EditorForm },
}

pub struct Session<S: DataStore> {
    store: ProductStore<S>,
    state: SessionState,
    query: ViewQuery,
}

impl<S: DataStore> Session<S> {
    pub fn new(store: ProductStore<S>, query: ViewQuery) -> Self {
        Self {
            store,
            state: SessionState::Browsing,
            query,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &ProductStore<S> {
        &self.store
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn into_store(self) -> ProductStore<S> {
        self.store
    }

    /// The product open in the editor, if any.
    pub fn open_product(&self) -> Option<&Product> {
        match &self.state {
            SessionState::Editing { product, .. } => Some(product),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&EditorForm> {
        match &self.state {
            SessionState::Browsing => None,
            SessionState::Creating(form) | SessionState::Editing { form, .. } => Some(form),
        }
    }

    pub fn route(&self) -> Route {
        match &self.state {
            SessionState::Editing { product, .. } => Route::Product(product.id.clone()),
            _ => Route::ProductList,
        }
    }

    /// The current page of the list.
    pub fn view(&self) -> ProductView {
        derive_view(self.store.products(), &self.query)
    }

    pub fn add_product(&mut self) {
        debug!("Opening blank product form");
        self.state = SessionState::Creating(EditorForm::create());
    }

    /// Opens product `id` for editing. An unknown id closes the editor instead.
    pub fn select_product(&mut self, id: &ProductId) -> bool {
        match self.store.get(id) {
            Some(product) => {
                debug!(%id, "Opening product for editing");
                self.state = SessionState::Editing {
                    product: product.clone(),
                    form: EditorForm::edit(product),
                };
                true
            }
            None => {
                debug!(%id, "No such product, closing editor");
                self.state = SessionState::Browsing;
                false
            }
        }
    }

    /// Follows a route: the list path closes the editor, a product path
    /// opens that product (or closes the editor when it does not exist).
    pub fn navigate(&mut self, route: &Route) -> bool {
        match route {
            Route::ProductList => {
                self.state = SessionState::Browsing;
                true
            }
            Route::Product(id) => self.select_product(id),
        }
    }

    /// Changes one field of the open form. Returns the fresh validation
    /// errors, or `None` when no form is open.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Option<&ValidationErrors> {
        match &mut self.state {
            SessionState::Browsing => None,
            SessionState::Creating(form) | SessionState::Editing { form, .. } => {
                Some(form.set_field(field, value))
            }
        }
    }

    /// Commits the open form.
    ///
    /// A new product is appended and the session returns to browsing. An
    /// edited product is replaced in place and stays open with its updated
    /// snapshot.
    pub fn save_product(&mut self) -> Result<Product> {
        match &mut self.state {
            SessionState::Browsing => Err(ShopkeepError::Api("No product is open".to_string())),
            SessionState::Creating(form) => {
                let draft = form.submit().map_err(ShopkeepError::Validation)?;
                let product = self.store.create(&draft)?;
                self.state = SessionState::Browsing;
                self.clamp_page();
                Ok(product)
            }
            SessionState::Editing { product, form } => {
                let draft = form.submit().map_err(ShopkeepError::Validation)?;
                let id = product.id.clone();
                let updated = self.store.update(&id, &draft)?;
                self.state = SessionState::Editing {
                    product: updated.clone(),
                    form: EditorForm::edit(&updated),
                };
                self.clamp_page();
                Ok(updated)
            }
        }
    }

    /// Deletes product `id`. Closes the editor if that product was open or
    /// the collection is now empty.
    pub fn delete_product(&mut self, id: &ProductId) -> Result<Product> {
        let removed = self.store.delete(id)?;
        let was_open = self.open_product().is_some_and(|p| &p.id == id);
        if was_open || self.store.is_empty() {
            self.state = SessionState::Browsing;
        }
        self.clamp_page();
        Ok(removed)
    }

    /// Closes the editor without saving.
    pub fn cancel(&mut self) {
        self.state = SessionState::Browsing;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.clamp_page();
    }

    pub fn set_sort_option(&mut self, sort: SortOption) {
        self.query.sort = sort;
    }

    /// Moves `delta` pages, stopping at the first and last page.
    pub fn change_page(&mut self, delta: isize) -> usize {
        let pages = self.total_pages();
        self.query.page = step_page(self.query.page, delta, pages);
        self.query.page
    }

    fn total_pages(&self) -> usize {
        let matching = crate::query::filter_and_sort(
            self.store.products(),
            &self.query.search_term,
            self.query.sort,
        );
        total_pages(matching.len(), self.query.page_size)
    }

    fn clamp_page(&mut self) {
        let pages = self.total_pages();
        self.query.page = crate::query::clamp_page(self.query.page, pages);
    }
}
