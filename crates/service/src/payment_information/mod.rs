//! Payment information aggregate: domain, validation, repository, service.
//!
//! The tree is one root row with an optional escrow (plus its ratio) and
//! any number of item prices (each with optional shipping price and
//! address). Writes to the tree always run in a single transaction.

pub mod domain;
pub mod validation;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::PaymentInformationService;
