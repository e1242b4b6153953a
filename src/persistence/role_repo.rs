//! Role repository for `SQLite` persistence.

use std::sync::Arc;

use tracing::debug;

use crate::models::role::{NewRole, Role, RoleListing};
use crate::Result;

use super::db::Database;

/// Repository for role records.
#[derive(Clone)]
pub struct RoleRepo {
    db: Arc<Database>,
}

impl RoleRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a new role.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Constraint` if `department_id` references no
    /// department, or `AppError::Db` if the insert otherwise fails.
    pub async fn insert(&self, role: &NewRole) -> Result<Role> {
        let result = sqlx::query(
            "INSERT INTO role (title, salary, department_id)
             VALUES (?1, ?2, ?3)",
        )
        .bind(&role.title)
        .bind(role.salary)
        .bind(role.department_id)
        .execute(self.db.as_ref())
        .await?;

        let id = result.last_insert_rowid();
        debug!(role_id = id, department_id = role.department_id, "role inserted");
        Ok(Role {
            id,
            title: role.title.clone(),
            salary: role.salary,
            department_id: role.department_id,
        })
    }

    /// List every role ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Role>> {
        let rows = sqlx::query_as::<_, Role>(
            "SELECT id, title, salary, department_id FROM role ORDER BY id ASC",
        )
        .fetch_all(self.db.as_ref())
        .await?;
        Ok(rows)
    }

    /// List every role with its department name, ordered by role id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_with_departments(&self) -> Result<Vec<RoleListing>> {
        let rows = sqlx::query_as::<_, RoleListing>(
            "SELECT role.id AS id, role.title AS title,
                    department.name AS department, role.salary AS salary
             FROM role
             INNER JOIN department ON role.department_id = department.id
             ORDER BY role.id ASC",
        )
        .fetch_all(self.db.as_ref())
        .await?;
        Ok(rows)
    }
}
