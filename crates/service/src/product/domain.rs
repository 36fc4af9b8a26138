use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Catalog product (business view).
///
/// `id` is absent until the store assigns one on first save and never
/// changes afterwards. Equality compares all four fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Transient product, not yet persisted.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self { id: None, name: name.into(), description: description.into(), price }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_persisted(&self) -> bool { self.id.is_some() }

    /// Copy the mutable fields from `other`, leaving the id untouched.
    pub fn apply_changes(&mut self, other: &Product) {
        self.name.clone_from(&other.name);
        self.description.clone_from(&other.description);
        self.price = other.price;
    }
}

// Must agree with the derived PartialEq: price is hashed by bit pattern,
// with both zeros folded onto one since `0.0 == -0.0`.
impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.description.hash(state);
        let bits = if self.price == 0.0 { 0u64 } else { self.price.to_bits() };
        bits.hash(state);
    }
}
