use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("database error: {0}")]
    Db(String),
    #[error("unsupported database backend: {0}")]
    UnsupportedBackend(String),
}
