//! Stored entity models.

pub mod contact;
pub mod project;
