use async_trait::async_trait;

use super::domain::Product;
use crate::errors::ServiceError;

/// Persistence gateway for products. A direct adapter over the store;
/// no business rules live here.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert when `id` is absent (the store assigns one), otherwise update
    /// the row with that id. Returns the persisted representation.
    async fn save(&self, product: Product) -> Result<Product, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError>;
    /// Missing ids are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
    /// Remove the row matching `product.id`; a transient product is ignored.
    async fn delete(&self, product: &Product) -> Result<(), ServiceError>;
    async fn delete_all(&self) -> Result<(), ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// Number of times each repository operation was invoked.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct CallCounts {
        pub save: usize,
        pub find_by_id: usize,
        pub find_all: usize,
        pub delete_by_id: usize,
        pub delete: usize,
        pub delete_all: usize,
        pub count: usize,
    }

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i64, Product>, // key: product id
        last_id: i64,
        calls: CallCounts,
    }

    #[derive(Default)]
    pub struct MockProductRepository {
        state: Mutex<State>,
        failing: bool,
    }

    impl MockProductRepository {
        /// Repository pre-populated with `products`; ids are assigned in order.
        pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
            let repo = Self::default();
            {
                let mut st = repo.state.lock().unwrap();
                for mut p in products {
                    st.last_id += 1;
                    let id = st.last_id;
                    p.id = Some(id);
                    st.rows.insert(id, p);
                }
            }
            repo
        }

        /// Repository whose every operation fails with a database error.
        pub fn failing() -> Self {
            Self { failing: true, ..Self::default() }
        }

        pub fn calls(&self) -> CallCounts {
            self.state.lock().unwrap().calls
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.failing {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn save(&self, mut product: Product) -> Result<Product, ServiceError> {
            let mut st = self.state.lock().unwrap();
            st.calls.save += 1;
            self.check()?;
            let id = match product.id {
                Some(id) if st.rows.contains_key(&id) => id,
                _ => {
                    st.last_id += 1;
                    st.last_id
                }
            };
            product.id = Some(id);
            st.rows.insert(id, product.clone());
            Ok(product)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
            let mut st = self.state.lock().unwrap();
            st.calls.find_by_id += 1;
            self.check()?;
            Ok(st.rows.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
            let mut st = self.state.lock().unwrap();
            st.calls.find_all += 1;
            self.check()?;
            Ok(st.rows.values().cloned().collect())
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            let mut st = self.state.lock().unwrap();
            st.calls.delete_by_id += 1;
            self.check()?;
            st.rows.remove(&id);
            Ok(())
        }

        async fn delete(&self, product: &Product) -> Result<(), ServiceError> {
            let mut st = self.state.lock().unwrap();
            st.calls.delete += 1;
            self.check()?;
            if let Some(id) = product.id {
                st.rows.remove(&id);
            }
            Ok(())
        }

        async fn delete_all(&self) -> Result<(), ServiceError> {
            let mut st = self.state.lock().unwrap();
            st.calls.delete_all += 1;
            self.check()?;
            st.rows.clear();
            Ok(())
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            let mut st = self.state.lock().unwrap();
            st.calls.count += 1;
            self.check()?;
            Ok(st.rows.len() as u64)
        }
    }
}
