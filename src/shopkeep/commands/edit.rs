use crate::commands::{CmdMessage, CmdResult, ProductFields};
use crate::editor::EditorForm;
use crate::error::{Result, ShopkeepError};
use crate::inventory::ProductStore;
use crate::model::ProductId;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut ProductStore<S>,
    id: &ProductId,
    fields: &ProductFields,
) -> Result<CmdResult> {
    let current = store
        .get(id)
        .cloned()
        .ok_or_else(|| ShopkeepError::ProductNotFound(id.clone()))?;

    let mut result = CmdResult::default();
    if fields.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Nothing to change for {}",
            current.name
        )));
        return Ok(result.with_affected_products(vec![current]));
    }

    let mut form = EditorForm::edit(&current);
    let draft = fields.fill(&mut form).map_err(ShopkeepError::Validation)?;
    let updated = store.update(id, &draft)?;

    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        updated.id, updated.name
    )));
    Ok(result.with_affected_products(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn changes_only_supplied_fields() {
        let fixture = StoreFixture::new().with_described_product("Lamp", "Warm", 10.0);
        let mut store = ProductStore::open(fixture.store);
        let id = store.products()[0].id.clone();

        let fields = ProductFields {
            price: Some("12".to_string()),
            ..Default::default()
        };
        run(&mut store, &id, &fields).unwrap();

        let product = store.get(&id).unwrap();
        assert_eq!(product.name, "Lamp");
        assert_eq!(product.description, "Warm");
        assert_eq!(product.price, 12.0);
    }

    #[test]
    fn empty_edit_warns_without_saving() {
        let mut store = ProductStore::open(StoreFixture::new().with_products(1).store);
        let id = store.products()[0].id.clone();

        let result = run(&mut store, &id, &ProductFields::default()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.data_store().save_count(), 0);
    }

    #[test]
    fn invalid_edit_is_rejected() {
        let mut store = ProductStore::open(StoreFixture::new().with_product("Lamp", 3.0).store);
        let id = store.products()[0].id.clone();
        let fields = ProductFields {
            name: Some("x".repeat(31)),
            ..Default::default()
        };

        assert!(matches!(
            run(&mut store, &id, &fields),
            Err(ShopkeepError::Validation(_))
        ));
        assert_eq!(store.get(&id).unwrap().name, "Lamp");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = ProductStore::open(StoreFixture::new().store);
        let fields = ProductFields {
            name: Some("X".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut store, &ProductId::from("gone"), &fields),
            Err(ShopkeepError::ProductNotFound(_))
        ));
    }
}
