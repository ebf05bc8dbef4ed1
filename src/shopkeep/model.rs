use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier of a product.
///
/// Ids are plain strings on disk so that collections written by other tools
/// (or by hand) load without conversion. New ids come from [`crate::id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A catalog record, exactly as persisted in the durable slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    // Empty means "no description"; the slot always carries the key.
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub creation_date: DateTime<Utc>,
}

impl Product {
    /// Builds a product from an already validated draft.
    pub fn from_draft(id: ProductId, draft: &ProductDraft, creation_date: DateTime<Utc>) -> Self {
        let mut product = Self {
            id,
            name: String::new(),
            description: String::new(),
            price: 0.0,
            image: String::new(),
            creation_date,
        };
        product.apply(draft);
        product
    }

    /// Overwrites every editable field. `id` and `creation_date` never change.
    pub fn apply(&mut self, draft: &ProductDraft) {
        self.name = draft.name.clone();
        self.description = draft.description.clone().unwrap_or_default();
        self.price = draft.price.unwrap_or_default();
        self.image = draft.image.clone();
    }
}

/// Candidate values for a product, as typed into the editor.
///
/// `price` is `None` when the entered text is not a number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price: Some(price),
            image: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: Some(product.description.clone()),
            price: Some(product.price),
            image: product.image.clone(),
        }
    }
}

/// Parses the price text of a form. Non-numeric or non-finite input yields `None`.
pub fn parse_price(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// How the view orders matching products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Name,
    CreationDate,
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOption::Name => write!(f, "name"),
            SortOption::CreationDate => write!(f, "creation-date"),
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortOption::Name),
            "creation-date" | "creationdate" | "created" | "date" => Ok(SortOption::CreationDate),
            other => Err(format!(
                "Unknown sort option '{}' (expected 'name' or 'creation-date')",
                other
            )),
        }
    }
}
