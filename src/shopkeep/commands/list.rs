use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::ProductStore;
use crate::query::{derive_view, ViewQuery};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &ProductStore<S>, query: &ViewQuery) -> Result<CmdResult> {
    let view = derive_view(store.products(), query);
    Ok(CmdResult::default().with_listing(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortOption;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_requested_page() {
        let store = ProductStore::open(StoreFixture::new().with_products(7).store);
        let query = ViewQuery::default()
            .with_sort(SortOption::CreationDate)
            .with_page(2);

        let listing = run(&store, &query).unwrap().listing.unwrap();
        assert_eq!(listing.page, 2);
        assert_eq!(listing.total_pages, 2);
        let names: Vec<_> = listing.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Product 6", "Product 7"]);
    }

    #[test]
    fn honours_page_size() {
        let store = ProductStore::open(StoreFixture::new().with_products(7).store);
        let listing = run(&store, &ViewQuery::default().with_page_size(3))
            .unwrap()
            .listing
            .unwrap();
        assert_eq!(listing.items.len(), 3);
        assert_eq!(listing.total_pages, 3);
    }
}
