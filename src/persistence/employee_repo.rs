//! Employee repository for `SQLite` persistence.

use std::sync::Arc;

use tracing::debug;

use crate::models::employee::{Employee, EmployeeListing, NewEmployee};
use crate::{AppError, Result};

use super::db::Database;

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, role_id, manager_id";

/// Repository for employee records.
#[derive(Clone)]
pub struct EmployeeRepo {
    db: Arc<Database>,
}

impl EmployeeRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a new employee.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Constraint` if `role_id` or `manager_id`
    /// reference missing rows, or `AppError::Db` if the insert otherwise fails.
    pub async fn insert(&self, employee: &NewEmployee) -> Result<Employee> {
        let result = sqlx::query(
            "INSERT INTO employee (first_name, last_name, role_id, manager_id)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.role_id)
        .bind(employee.manager_id)
        .execute(self.db.as_ref())
        .await?;

        let id = result.last_insert_rowid();
        debug!(
            employee_id = id,
            role_id = employee.role_id,
            manager_id = ?employee.manager_id,
            "employee inserted"
        );
        Ok(Employee {
            id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            role_id: employee.role_id,
            manager_id: employee.manager_id,
        })
    }

    /// Retrieve an employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the employee does not exist.
    pub async fn get_by_id(&self, id: i64) -> Result<Employee> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE id = ?1");
        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("employee {id}")))
    }

    /// List every employee ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee ORDER BY id ASC");
        let rows = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(self.db.as_ref())
            .await?;
        Ok(rows)
    }

    /// List employees without a manager, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_top_level(&self) -> Result<Vec<Employee>> {
        let sql = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE manager_id IS NULL ORDER BY id ASC"
        );
        let rows = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(self.db.as_ref())
            .await?;
        Ok(rows)
    }

    /// List every employee with role, department, salary and manager name.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_detailed(&self) -> Result<Vec<EmployeeListing>> {
        let rows = sqlx::query_as::<_, EmployeeListing>(
            "SELECT employee.id AS id,
                    employee.first_name AS first_name,
                    employee.last_name AS last_name,
                    role.title AS title,
                    department.name AS department,
                    role.salary AS salary,
                    manager.first_name || ' ' || manager.last_name AS manager
             FROM employee
             INNER JOIN role ON employee.role_id = role.id
             INNER JOIN department ON role.department_id = department.id
             LEFT JOIN employee AS manager ON employee.manager_id = manager.id
             ORDER BY employee.id ASC",
        )
        .fetch_all(self.db.as_ref())
        .await?;
        Ok(rows)
    }

    /// Point an employee at a different role and return the updated record.
    /// Other columns are untouched.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no employee has `employee_id`,
    /// `AppError::Constraint` if `role_id` references no role, or
    /// `AppError::Db` if the update otherwise fails.
    pub async fn update_role(&self, employee_id: i64, role_id: i64) -> Result<Employee> {
        let mut current = self.get_by_id(employee_id).await?;

        let result = sqlx::query("UPDATE employee SET role_id = ?1 WHERE id = ?2")
            .bind(role_id)
            .bind(employee_id)
            .execute(self.db.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("employee {employee_id}")));
        }
        debug!(employee_id, role_id, "employee role updated");
        current.role_id = role_id;
        Ok(current)
    }
}
