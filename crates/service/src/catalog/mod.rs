//! Catalog module: domain, repository and service layers for categories and their news.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::CatalogService;
