//! Pieces shared by every crate in the workspace: wire types that are not
//! tied to the product domain and the tracing subscriber setup.

pub mod types;
pub mod utils;
