//! HTTP surface of the bank organization service.
pub mod errors;
pub mod observability;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use state::ServerState;
