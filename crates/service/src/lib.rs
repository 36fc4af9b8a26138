//! Service layer for the product catalog.
//! - `product::repository` is the persistence seam (SeaORM adapter plus an in-memory mock).
//! - `product::service` enforces the existence rules for update and delete.

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test_support;
