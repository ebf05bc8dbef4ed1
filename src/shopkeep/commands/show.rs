use crate::commands::CmdResult;
use crate::error::{Result, ShopkeepError};
use crate::inventory::ProductStore;
use crate::model::ProductId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &ProductStore<S>, ids: &[ProductId]) -> Result<CmdResult> {
    let products = ids
        .iter()
        .map(|id| {
            store
                .get(id)
                .cloned()
                .ok_or_else(|| ShopkeepError::ProductNotFound(id.clone()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_affected_products(products))
}
