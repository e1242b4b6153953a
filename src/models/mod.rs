//! Domain model module declarations.

pub mod department;
pub mod employee;
pub mod role;
