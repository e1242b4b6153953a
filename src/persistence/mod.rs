//! Persistence layer modules.

pub mod db;
pub mod department_repo;
pub mod employee_repo;
pub mod role_repo;
pub mod schema;
