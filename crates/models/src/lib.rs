//! Persistence models: the `product` row type and connection/schema helpers.

pub mod errors;
pub mod db;
pub mod product;

#[cfg(test)]
mod tests;
