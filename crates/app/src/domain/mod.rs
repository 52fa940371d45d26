//! Catalog Domain Concerns

pub mod products;
pub mod providers;

mod repository;
