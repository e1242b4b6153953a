//! Role model and its department-joined listing row.

use serde::Serialize;

/// A job title with a salary, belonging to one department.
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct Role {
    /// Generated identifier.
    pub id: i64,
    /// Job title. Not unique.
    pub title: String,
    /// Yearly salary.
    pub salary: f64,
    /// Owning department.
    pub department_id: i64,
}

/// Insert payload for a new role.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    /// Job title.
    pub title: String,
    /// Yearly salary.
    pub salary: f64,
    /// Resolved department identifier.
    pub department_id: i64,
}

/// One row of the "View All Roles" listing.
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct RoleListing {
    /// Role identifier.
    pub id: i64,
    /// Job title.
    pub title: String,
    /// Name of the owning department.
    pub department: String,
    /// Yearly salary.
    pub salary: f64,
}
