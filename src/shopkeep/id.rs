//! Product id generation.
//!
//! An id is a version 4 UUID (122 random bits) rendered as 32 lowercase hex
//! characters. The chance of any collision among `n` generated ids is about
//! `n² / 2¹²³`, so for a local catalog it is effectively zero. Creation still
//! checks the live collection and draws again on a clash.

use crate::model::{Product, ProductId};
use uuid::Uuid;

pub fn generate() -> ProductId {
    ProductId::new(Uuid::new_v4().simple().to_string())
}

/// Generates an id not used by any product in `existing`.
pub fn generate_unique(existing: &[Product]) -> ProductId {
    loop {
        let id = generate();
        if !existing.iter().any(|p| p.id == id) {
            return id;
        }
    }
}
