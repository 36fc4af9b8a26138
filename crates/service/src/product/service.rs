use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::Product;
use super::repository::ProductRepository;
use crate::errors::ServiceError;

/// Product business service, independent of the web framework.
///
/// Reads tolerate absence (`Ok(None)`); updates and deletes require the
/// product to exist and report `ServiceError::NotFound` otherwise.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ServiceError> {
        self.repo.find_all().await
    }

    /// Persist a new product. Any id on the input is discarded; the store assigns one.
    ///
    /// # Examples
    /// ```
    /// use service::product::{Product, ProductService, repository::mock::MockProductRepository};
    /// use std::sync::Arc;
    /// let svc = ProductService::new(Arc::new(MockProductRepository::default()));
    /// let created = tokio_test::block_on(svc.create_product(Product::new("Lamp", "Desk lamp", 19.5))).unwrap();
    /// assert!(created.id.is_some());
    /// ```
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create_product(&self, mut product: Product) -> Result<Product, ServiceError> {
        product.id = None;
        let created = self.repo.save(product).await?;
        info!(id = ?created.id, "product_created");
        Ok(created)
    }

    /// Overwrite name, description and price of an existing product.
    /// `save` is only reached when the product exists.
    ///
    /// # Examples
    /// ```
    /// use service::product::{Product, ProductService, repository::mock::MockProductRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockProductRepository::default());
    /// let svc = ProductService::new(repo.clone());
    /// let err = tokio_test::block_on(svc.update_product(1, Product::new("n", "d", 1.0))).unwrap_err();
    /// assert!(err.is_not_found());
    /// assert_eq!(repo.calls().save, 0);
    /// ```
    #[instrument(skip(self, changes))]
    pub async fn update_product(&self, id: i64, changes: Product) -> Result<Product, ServiceError> {
        let mut existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;
        existing.apply_changes(&changes);
        let updated = self.repo.save(existing).await?;
        info!(id, "product_updated");
        Ok(updated)
    }

    /// Delete an existing product. Unlike `ProductRepository::delete_by_id`,
    /// a missing id is an error.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;
        self.repo.delete(&existing).await?;
        info!(id, "product_deleted");
        Ok(())
    }
}
