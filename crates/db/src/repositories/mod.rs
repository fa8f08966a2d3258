//! SQL access for each table. One zero-sized repo type per table.

pub mod contact_repo;
pub mod project_repo;

pub use contact_repo::ContactRepo;
pub use project_repo::ProjectRepo;
