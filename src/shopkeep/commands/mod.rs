use crate::config::ShopkeepConfig;
use crate::editor::EditorForm;
use crate::model::{Product, ProductDraft};
use crate::query::ProductView;
use crate::validation::{Field, ValidationErrors};

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod reset;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listing: Option<ProductView>,
    pub config: Option<ShopkeepConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listing(mut self, view: ProductView) -> Self {
        self.listing = Some(view);
        self
    }

    pub fn with_config(mut self, config: ShopkeepConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field values supplied on the command line. `None` leaves a field as the
/// form has it (blank for a new product, the stored value for an edit).
#[derive(Debug, Clone, Default)]
pub struct ProductFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
}

impl ProductFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image.is_none()
    }

    /// Types every supplied value into `form`, then submits it.
    pub fn fill(&self, form: &mut EditorForm) -> Result<ProductDraft, ValidationErrors> {
        let values = [
            (Field::Name, &self.name),
            (Field::Description, &self.description),
            (Field::Price, &self.price),
            (Field::Image, &self.image),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set_field(field, value.as_str());
            }
        }
        form.submit()
    }
}
