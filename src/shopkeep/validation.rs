//! Product validation.
//!
//! Rules, checked per field in order (the first failing rule wins):
//! - `name`: at least 1 and at most [`NAME_MAX_CHARS`] characters
//! - `description`: at most [`DESCRIPTION_MAX_CHARS`] characters when present
//! - `price`: a finite number, strictly greater than zero
//!
//! `image` is unconstrained.
//!
//! Lengths count `char`s, not bytes.

use crate::model::ProductDraft;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const NAME_MAX_CHARS: usize = 30;
pub const DESCRIPTION_MAX_CHARS: usize = 200;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_LONG: &str = "Name must be 30 characters or less";
pub const DESCRIPTION_TOO_LONG: &str = "Description must be 200 characters or less";
pub const PRICE_NOT_A_NUMBER: &str = "Price must be a number";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than zero";

/// An editable product field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    Price,
    Image,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::Image => "image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "description" | "desc" => Ok(Field::Description),
            "price" => Ok(Field::Price),
            "image" => Ok(Field::Image),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// Field-level validation failures, one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert_first(&mut self, field: Field, message: &str) {
        self.0.entry(field).or_insert_with(|| message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks a candidate product against the schema.
pub fn validate(draft: &ProductDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name_len = draft.name.chars().count();
    if name_len < 1 {
        errors.insert_first(Field::Name, NAME_REQUIRED);
    } else if name_len > NAME_MAX_CHARS {
        errors.insert_first(Field::Name, NAME_TOO_LONG);
    }

    if let Some(description) = &draft.description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.insert_first(Field::Description, DESCRIPTION_TOO_LONG);
        }
    }

    match draft.price {
        Some(price) if !price.is_finite() => {
            errors.insert_first(Field::Price, PRICE_NOT_A_NUMBER)
        }
        Some(price) if price <= 0.0 => errors.insert_first(Field::Price, PRICE_NOT_POSITIVE),
        Some(_) => {}
        None => errors.insert_first(Field::Price, PRICE_NOT_A_NUMBER),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
