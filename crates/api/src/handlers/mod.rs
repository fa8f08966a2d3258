//! HTTP handlers, one module per resource.

pub mod contact;
pub mod health;
pub mod project;
