//! Service layer exposing the category/news catalog on top of `models`.
//! - `catalog::repository::CatalogRepository` is the persistence seam.
//! - `catalog::service::CatalogService` holds the business rules handlers rely on.

pub mod errors;
pub mod catalog;
#[cfg(test)]
pub mod test_support;
