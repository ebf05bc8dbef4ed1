//! # Query Engine
//!
//! Derives the view (one page of matching products) from the collection.
//! Everything here is a pure function of its inputs and is recomputed on
//! every call.
//!
//! 1. **Filter**: case-insensitive substring match of the search term against
//!    the name or the description. An empty term matches everything.
//! 2. **Sort**: by name, or by creation date (oldest first). Names collate
//!    the way a person reads them: accents and case only break ties. The
//!    sort is stable, so exact ties keep collection order.
//! 3. **Paginate**: pages are 1-based and `page_size` long. Out-of-range
//!    pages clamp to the nearest valid one.

use crate::model::{Product, SortOption};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Inputs of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub search_term: String,
    pub sort: SortOption,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: SortOption::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewQuery {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// One page of the filtered and sorted collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub items: Vec<Product>,
    /// The page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// How many products matched the search term.
    pub total_matches: usize,
}

impl ProductView {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Computes the view of `products` for `query`.
pub fn derive_view(products: &[Product], query: &ViewQuery) -> ProductView {
    let matching = filter_and_sort(products, &query.search_term, query.sort);
    let page_size = query.page_size.max(1);
    let total_pages = total_pages(matching.len(), page_size);
    let page = clamp_page(query.page, total_pages);

    let items = matching
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|p| (*p).clone())
        .collect();

    ProductView {
        items,
        page,
        total_pages,
        total_matches: matching.len(),
    }
}

/// Filters `products` by `term` and orders the result by `sort`.
pub fn filter_and_sort<'a>(products: &'a [Product], term: &str, sort: SortOption) -> Vec<&'a Product> {
    let term_lower = term.to_lowercase();
    let mut matching: Vec<&Product> = products
        .iter()
        .filter(|p| matches_term(p, &term_lower))
        .collect();

    match sort {
        SortOption::Name => matching.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOption::CreationDate => matching.sort_by_key(|p| p.creation_date),
    }
    matching
}

fn matches_term(product: &Product, term_lower: &str) -> bool {
    product.name.to_lowercase().contains(term_lower)
        || product.description.to_lowercase().contains(term_lower)
}

/// Orders names the way a human expects. Base letters decide first, with
/// accents and case ignored; then unaccented before accented; then
/// lowercase before uppercase.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lowercase `name` with diacritics stripped (NFD, combining marks removed).
fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Number of pages needed for `count` items. Zero items means zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamps a 1-based page into `1..=total_pages` (just `1` when there are no pages).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Moves `delta` pages from `page`, stopping at the first and last page.
pub fn step_page(page: usize, delta: isize, total_pages: usize) -> usize {
    let target = page.saturating_add_signed(delta);
    clamp_page(target, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{product, StoreFixture};

    fn names(view: &ProductView) -> Vec<&str> {
        view.items.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let products = StoreFixture::new()
            .with_product("Apple", 1.0)
            .with_product("Banana", 2.0)
            .products();

        let view = derive_view(&products, &ViewQuery::default().with_search("ban"));
        assert_eq!(names(&view), vec!["Banana"]);
        assert_eq!(view.total_matches, 1);
    }

    #[test]
    fn search_matches_description() {
        let products = StoreFixture::new()
            .with_described_product("Lamp", "Warm LIGHT", 10.0)
            .with_product("Light bulb", 2.0)
            .with_product("Chair", 30.0)
            .products();

        let view = derive_view(&products, &ViewQuery::default().with_search("light"));
        assert_eq!(names(&view), vec!["Lamp", "Light bulb"]);
    }

    #[test]
    fn empty_term_matches_all() {
        let products = StoreFixture::new().with_products(3).products();
        let view = derive_view(&products, &ViewQuery::default());
        assert_eq!(view.total_matches, 3);
    }

    #[test]
    fn sorts_by_name() {
        let products = StoreFixture::new()
            .with_product("Banana", 2.0)
            .with_product("apple", 1.0)
            .with_product("Cherry", 3.0)
            .products();

        let view = derive_view(&products, &ViewQuery::default().with_sort(SortOption::Name));
        assert_eq!(names(&view), vec!["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn sorts_by_creation_date() {
        let products = vec![
            product("c", "Late", 1.0, 30),
            product("a", "Early", 1.0, 10),
            product("b", "Middle", 1.0, 20),
        ];
        let view = derive_view(
            &products,
            &ViewQuery::default().with_sort(SortOption::CreationDate),
        );
        assert_eq!(names(&view), vec!["Early", "Middle", "Late"]);
    }

    #[test]
    fn equal_dates_keep_collection_order() {
        let products = vec![
            product("x", "Second", 1.0, 5),
            product("y", "First", 1.0, 5),
        ];
        let view = derive_view(
            &products,
            &ViewQuery::default().with_sort(SortOption::CreationDate),
        );
        assert_eq!(names(&view), vec!["Second", "First"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let products = StoreFixture::new()
            .with_product("Zebra", 1.0)
            .with_product("Éclair", 2.0)
            .with_product("eclair", 3.0)
            .with_product("Apple", 4.0)
            .products();

        let view = derive_view(&products, &ViewQuery::default());
        assert_eq!(names(&view), vec!["Apple", "eclair", "Éclair", "Zebra"]);
        assert_eq!(compare_names("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_names("Ångström", "Bolt"), Ordering::Less);
    }

    #[test]
    fn equal_names_keep_collection_order() {
        let products = vec![
            product("x", "Lamp", 2.0, 9),
            product("y", "Chair", 1.0, 1),
            product("z", "Lamp", 3.0, 5),
        ];
        let view = derive_view(&products, &ViewQuery::default().with_sort(SortOption::Name));
        let ids: Vec<&str> = view.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["y", "x", "z"]);
    }

    #[test]
    fn names_differing_in_case_put_lowercase_first() {
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Apple", "apple"), Ordering::Greater);
        assert_eq!(compare_names("Apple", "Apple"), Ordering::Equal);
    }

    #[test]
    fn pages_partition_the_sorted_sequence() {
        let products = StoreFixture::new().with_products(12).products();
        let all: Vec<String> = filter_and_sort(&products, "", SortOption::Name)
            .into_iter()
            .map(|p| p.name.clone())
            .collect();

        let first = derive_view(&products, &ViewQuery::default());
        assert_eq!(first.total_pages, 3);

        let mut concatenated = Vec::new();
        for page in 1..=first.total_pages {
            let view = derive_view(&products, &ViewQuery::default().with_page(page));
            assert!(view.items.len() <= DEFAULT_PAGE_SIZE);
            concatenated.extend(view.items.into_iter().map(|p| p.name));
        }
        assert_eq!(concatenated, all);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let products = StoreFixture::new().with_products(7).products();

        let high = derive_view(&products, &ViewQuery::default().with_page(9));
        assert_eq!(high.page, 2);
        assert_eq!(high.items.len(), 2);
        assert!(!high.has_next());
        assert!(high.has_previous());

        let low = derive_view(&products, &ViewQuery::default().with_page(0));
        assert_eq!(low.page, 1);
        assert!(!low.has_previous());
    }

    #[test]
    fn no_matches_means_zero_pages() {
        let products = StoreFixture::new().with_products(3).products();
        let view = derive_view(&products, &ViewQuery::default().with_search("zzz"));
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.page, 1);
        assert!(!view.has_next());
        assert!(!view.has_previous());
    }

    #[test]
    fn page_arithmetic() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(3, 0), 3);

        assert_eq!(step_page(1, -1, 3), 1);
        assert_eq!(step_page(1, 1, 3), 2);
        assert_eq!(step_page(3, 1, 3), 3);
        assert_eq!(step_page(2, 10, 3), 3);
        assert_eq!(step_page(2, -10, 3), 1);
    }
}
