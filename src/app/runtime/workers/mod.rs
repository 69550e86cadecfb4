/// Catalog fetching worker.
pub mod catalog;
