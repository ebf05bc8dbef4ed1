use crate::commands::{CmdMessage, CmdResult, ProductFields};
use crate::editor::EditorForm;
use crate::error::{Result, ShopkeepError};
use crate::inventory::ProductStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut ProductStore<S>, fields: &ProductFields) -> Result<CmdResult> {
    let mut form = EditorForm::create();
    let draft = fields.fill(&mut form).map_err(ShopkeepError::Validation)?;
    let product = store.create(&draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product created ({}): {}",
        product.id, product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
