//! Department repository for `SQLite` persistence.

use std::sync::Arc;

use tracing::debug;

use crate::models::department::Department;
use crate::Result;

use super::db::Database;

/// Repository for department records.
#[derive(Clone)]
pub struct DepartmentRepo {
    db: Arc<Database>,
}

impl DepartmentRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a new department. Duplicate names are allowed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the database insert fails.
    pub async fn insert(&self, name: &str) -> Result<Department> {
        let result = sqlx::query("INSERT INTO department (name) VALUES (?1)")
            .bind(name)
            .execute(self.db.as_ref())
            .await?;

        let department = Department {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
        };
        debug!(department_id = department.id, "department inserted");
        Ok(department)
    }

    /// List every department ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Department>> {
        let rows = sqlx::query_as::<_, Department>(
            "SELECT id, name FROM department ORDER BY id ASC",
        )
        .fetch_all(self.db.as_ref())
        .await?;
        Ok(rows)
    }
}
