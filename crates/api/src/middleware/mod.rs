//! Request extractors and response middleware shared by every route.

pub mod diagnostics;
pub mod json;
