//! Portfolio API server library.
//!
//! Exposes the building blocks (config, state, error handling, services,
//! routes) so integration tests, the seed binary, and the server entrypoint
//! share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
