use crate::model::ProductId;
use std::fmt;
use std::str::FromStr;

pub const PRODUCTS_PATH: &str = "/products/";

/// Location of the session: the bare list, or the list with one product open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ProductList,
    Product(ProductId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::ProductList => f.write_str(PRODUCTS_PATH),
            Route::Product(id) => write!(f, "{}{}", PRODUCTS_PATH, id),
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        if path == "/" || path == "/products" || path == PRODUCTS_PATH {
            return Ok(Route::ProductList);
        }
        match path.strip_prefix(PRODUCTS_PATH) {
            Some(rest) => {
                let id = rest.trim_end_matches('/');
                if id.is_empty() || id.contains('/') {
                    Err(format!("Invalid product path: {}", s))
                } else {
                    Ok(Route::Product(ProductId::from(id)))
                }
            }
            None => Err(format!("Unknown path: {}", s)),
        }
    }
}
