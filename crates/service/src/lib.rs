//! Service layer providing business-oriented CRUD operations on top of models.
//! - Validates raw request bodies before anything touches the database.
//! - Composes per-entity repositories into aggregate operations.
//! - Runs every multi-row write inside one transaction.

pub mod errors;
pub mod lookup;
pub mod validation;
pub mod repository;
pub mod payment_information;
pub mod item_category;
#[cfg(test)]
pub mod test_support;
