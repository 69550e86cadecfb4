//! Network retrieval of the remote catalog.

mod catalog;

pub use catalog::{fetch_catalog, parse_catalog_body};
