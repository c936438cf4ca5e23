// Service exports
pub mod catalog;
pub mod enhancer;

pub use catalog::{Catalog, CatalogError};
pub use enhancer::{EnhancerError, PlanEnhancer};
