// src/integrations/mod.rs
//
// External Integrations Module

pub mod catalog;
pub mod tmdb;

pub use catalog::CatalogClient;
pub use tmdb::client::TmdbClient;
