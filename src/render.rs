//! Tabular rendering of listings for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::department::Department;
use crate::models::employee::EmployeeListing;
use crate::models::role::RoleListing;

#[derive(Tabled)]
struct DepartmentRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

#[derive(Tabled)]
struct RoleRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Salary")]
    salary: String,
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "First Name")]
    first_name: String,
    #[tabled(rename = "Last Name")]
    last_name: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Manager")]
    manager: String,
}

/// Render salaries without a trailing `.0` for whole amounts.
#[must_use]
pub fn format_salary(salary: f64) -> String {
    format!("{salary}")
}

fn table<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows).with(Style::psql()).to_string()
}

/// Render the "View All Departments" table.
#[must_use]
pub fn departments(rows: &[Department]) -> String {
    if rows.is_empty() {
        return "No departments found.".into();
    }
    table(
        rows.iter()
            .map(|d| DepartmentRow {
                id: d.id,
                name: d.name.clone(),
            })
            .collect(),
    )
}

/// Render the "View All Roles" table.
#[must_use]
pub fn roles(rows: &[RoleListing]) -> String {
    if rows.is_empty() {
        return "No roles found.".into();
    }
    table(
        rows.iter()
            .map(|r| RoleRow {
                id: r.id,
                title: r.title.clone(),
                department: r.department.clone(),
                salary: format_salary(r.salary),
            })
            .collect(),
    )
}

/// Render the "View All Employees" table. Employees without a manager
/// show an empty manager cell.
#[must_use]
pub fn employees(rows: &[EmployeeListing]) -> String {
    if rows.is_empty() {
        return "No employees found.".into();
    }
    table(
        rows.iter()
            .map(|e| EmployeeRow {
                id: e.id,
                first_name: e.first_name.clone(),
                last_name: e.last_name.clone(),
                title: e.title.clone(),
                department: e.department.clone(),
                salary: format_salary(e.salary),
                manager: e.manager.clone().unwrap_or_default(),
            })
            .collect(),
    )
}
