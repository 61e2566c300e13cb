//! Item category catalogue: a tree of categories addressed by id or key.

pub mod domain;
pub mod validation;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::ItemCategoryService;
