//! Domain logic for the portfolio records service.
//!
//! Pure code only: resource enums, validation schemas, and pagination math.
//! Nothing in this crate touches the store or the network.

pub mod contact;
pub mod error;
pub mod pagination;
pub mod project;
pub mod types;
pub mod validation;
