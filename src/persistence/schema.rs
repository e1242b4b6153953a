//! `SQLite` schema bootstrap logic.
//!
//! All table definitions use `CREATE TABLE IF NOT EXISTS` and are safe to
//! re-run on every startup.

use sqlx::SqlitePool;
use tracing::info;

use crate::Result;

/// Apply all table definitions to the connected `SQLite` database.
///
/// # Errors
///
/// Returns `AppError::Db` if any DDL statement fails.
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<()> {
    let ddl = r"
CREATE TABLE IF NOT EXISTS department (
    id              INTEGER PRIMARY KEY,
    name            TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS role (
    id              INTEGER PRIMARY KEY,
    title           TEXT NOT NULL,
    salary          REAL NOT NULL,
    department_id   INTEGER NOT NULL REFERENCES department(id)
);

CREATE TABLE IF NOT EXISTS employee (
    id              INTEGER PRIMARY KEY,
    first_name      TEXT NOT NULL,
    last_name       TEXT NOT NULL,
    role_id         INTEGER NOT NULL REFERENCES role(id),
    manager_id      INTEGER REFERENCES employee(id)
);

CREATE INDEX IF NOT EXISTS idx_role_department ON role(department_id);
CREATE INDEX IF NOT EXISTS idx_employee_role ON employee(role_id);
CREATE INDEX IF NOT EXISTS idx_employee_manager ON employee(manager_id);
";

    sqlx::raw_sql(ddl).execute(pool).await?;
    Ok(())
}

/// Insert a small demo dataset when the database holds no departments.
///
/// Returns `true` when rows were inserted.
///
/// # Errors
///
/// Returns `AppError::Db` if any statement fails.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<bool> {
    let (departments,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM department")
        .fetch_one(pool)
        .await?;
    if departments > 0 {
        info!(departments, "database not empty, skipping seed");
        return Ok(false);
    }

    let seed = r"
INSERT INTO department (id, name) VALUES
    (1, 'Engineering'),
    (2, 'Sales'),
    (3, 'Finance'),
    (4, 'Legal');

INSERT INTO role (id, title, salary, department_id) VALUES
    (1, 'Lead Engineer', 150000, 1),
    (2, 'Software Engineer', 120000, 1),
    (3, 'Sales Lead', 100000, 2),
    (4, 'Salesperson', 80000, 2),
    (5, 'Account Manager', 160000, 3),
    (6, 'Accountant', 125000, 3),
    (7, 'Legal Team Lead', 250000, 4),
    (8, 'Lawyer', 190000, 4);

INSERT INTO employee (id, first_name, last_name, role_id, manager_id) VALUES
    (1, 'Ashley', 'Rodriguez', 1, NULL),
    (2, 'Kevin', 'Tupik', 2, 1),
    (3, 'John', 'Doe', 3, NULL),
    (4, 'Mike', 'Chan', 4, 3),
    (5, 'Kunal', 'Singh', 5, NULL),
    (6, 'Malia', 'Brown', 6, 5),
    (7, 'Sarah', 'Lourd', 7, NULL),
    (8, 'Tom', 'Allen', 8, 7);
";

    let mut tx = pool.begin().await?;
    sqlx::raw_sql(seed).execute(&mut *tx).await?;
    tx.commit().await?;
    info!("sample data seeded");
    Ok(true)
}
