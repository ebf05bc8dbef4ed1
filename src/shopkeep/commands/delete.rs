use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::ProductStore;
use crate::model::ProductId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut ProductStore<S>, ids: &[ProductId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for removed in store.delete_many(ids)? {
        result.add_message(CmdMessage::success(format!(
            "Product deleted ({}): {}",
            removed.id, removed.name
        )));
        result.affected_products.push(removed);
    }

    Ok(result)
}
