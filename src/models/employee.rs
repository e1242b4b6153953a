//! Employee model and its fully joined listing row.

use serde::Serialize;

/// A person holding one role, optionally reporting to a manager.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Employee {
    /// Generated identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Held role.
    pub role_id: i64,
    /// Manager, if any.
    pub manager_id: Option<i64>,
}

impl Employee {
    /// `"First Last"`, used as the employee's display label.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Insert payload for a new employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Resolved role identifier.
    pub role_id: i64,
    /// Resolved manager identifier; `None` for a top-level employee.
    pub manager_id: Option<i64>,
}

/// One row of the "View All Employees" listing.
///
/// Joins the employee's role and department, and resolves the manager's
/// full name through a self-join. `manager` is `None` for top-level
/// employees.
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct EmployeeListing {
    /// Employee identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Title of the held role.
    pub title: String,
    /// Department owning the role.
    pub department: String,
    /// Salary of the held role.
    pub salary: f64,
    /// Manager's full name.
    pub manager: Option<String>,
}
