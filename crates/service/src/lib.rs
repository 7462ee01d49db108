//! Business layer of the bank organization service.
//! - One service per entity, built on a generic CRUD core over a repository trait.
//! - Nested (parent-scoped) operations verify ownership before touching a row.
//! - Filtering, sorting and paging go through one criteria engine shared by
//!   the SeaORM and in-memory repositories.

pub mod crud;
pub mod dto;
pub mod errors;
pub mod filter;
pub mod ownership;
pub mod pagination;
pub mod repository;
pub mod services;

#[cfg(test)]
pub mod test_support;
#[cfg(test)]
mod seaorm_tests;

pub use errors::{ServiceError, ServiceResult};
pub use services::{Repositories, Services};
