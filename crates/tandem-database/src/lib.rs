//! # tandem-database
//!
//! PostgreSQL connection management, embedded migrations, and the repository
//! implementations backing the credential and relationship stores.

pub mod connection;
pub mod migration;
pub mod repositories;
