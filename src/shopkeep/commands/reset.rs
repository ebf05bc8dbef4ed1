use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::ProductStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut ProductStore<S>) -> Result<CmdResult> {
    store.reset()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Catalog reset to {} seed products",
        store.len()
    )));
    Ok(result)
}
