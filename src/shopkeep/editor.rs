//! The product editor form.
//!
//! An [`EditorForm`] holds the raw text of each field, the way a user types
//! it, and the validation errors for the current values. Every call to
//! [`EditorForm::set_field`] re-validates synchronously, so `errors` always
//! describes the values that are actually in the form.
//!
//! A create form is validated once when it opens, so a blank form starts
//! with submit disabled. An edit form opens on a stored (valid) product and
//! starts with no errors.

use crate::model::{parse_price, Product, ProductDraft, ProductId};
use crate::validation::{validate, Field, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(ProductId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorForm {
    mode: EditorMode,
    name: String,
    description: String,
    price: String,
    image: String,
    errors: ValidationErrors,
}

impl EditorForm {
    /// A blank form for a new product.
    pub fn create() -> Self {
        let mut form = Self {
            mode: EditorMode::Create,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image: String::new(),
            errors: ValidationErrors::default(),
        };
        form.revalidate();
        form
    }

    /// A form loaded with an existing product.
    pub fn edit(product: &Product) -> Self {
        Self {
            mode: EditorMode::Edit(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            errors: ValidationErrors::default(),
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_create(&self) -> bool {
        self.mode == EditorMode::Create
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Price => &self.price,
            Field::Image => &self.image,
        }
    }

    /// Changes one field and re-validates the whole form.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> &ValidationErrors {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::Price => self.price = value,
            Field::Image => self.image = value,
        }
        self.revalidate()
    }

    pub fn revalidate(&mut self) -> &ValidationErrors {
        self.errors = validate(&self.draft()).err().unwrap_or_default();
        &self.errors
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    /// The candidate product described by the current field values.
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: Some(self.description.clone()),
            price: parse_price(&self.price),
            image: self.image.clone(),
        }
    }

    /// Re-validates and returns the draft if every field passes.
    pub fn submit(&mut self) -> Result<ProductDraft, ValidationErrors> {
        if self.revalidate().is_empty() {
            Ok(self.draft())
        } else {
            Err(self.errors.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::product;
    use crate::validation::{NAME_REQUIRED, PRICE_NOT_POSITIVE};

    #[test]
    fn create_form_starts_invalid() {
        let form = EditorForm::create();
        assert!(form.is_create());
        assert!(!form.can_submit());
        assert_eq!(form.errors().get(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn edit_form_starts_clean() {
        let item = product("p1", "Lamp", 12.5, 0);
        let form = EditorForm::edit(&item);
        assert_eq!(form.mode(), &EditorMode::Edit(item.id.clone()));
        assert_eq!(form.value(Field::Price), "12.5");
        assert!(form.can_submit());
    }

    #[test]
    fn every_change_revalidates_with_latest_values() {
        let mut form = EditorForm::create();
        form.set_field(Field::Name, "Lamp");
        assert!(form.errors().get(Field::Name).is_none());
        assert!(!form.can_submit());

        form.set_field(Field::Price, "0");
        assert_eq!(form.errors().get(Field::Price), Some(PRICE_NOT_POSITIVE));

        form.set_field(Field::Price, "4");
        assert!(form.can_submit());
    }

    #[test]
    fn rapid_successive_changes_are_all_seen() {
        let mut form = EditorForm::create();
        form.set_field(Field::Price, "3");
        form.set_field(Field::Name, "Cup");
        form.set_field(Field::Description, "Blue");

        assert!(form.can_submit());
        let draft = form.submit().unwrap();
        assert_eq!(draft.name, "Cup");
        assert_eq!(draft.price, Some(3.0));
        assert_eq!(draft.description.as_deref(), Some("Blue"));
    }

    #[test]
    fn submit_rejects_invalid_form() {
        let item = product("p1", "Lamp", 12.5, 0);
        let mut form = EditorForm::edit(&item);
        form.set_field(Field::Name, "");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn image_is_unconstrained() {
        let mut form = EditorForm::create();
        form.set_field(Field::Name, "Cup");
        form.set_field(Field::Price, "1");
        form.set_field(Field::Image, "not even a url");
        assert!(form.can_submit());
    }
}
