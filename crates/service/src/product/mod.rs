//! Product module: three-layer split (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::Product;
pub use repository::ProductRepository;
pub use repo::seaorm::SeaOrmProductRepository;
pub use service::ProductService;
