//! Interactive menu loop and its action handlers.
//!
//! Every handler is a straight sequence of awaited steps: reads that
//! populate choice lists, prompts, then exactly one write. Writes are
//! always last, so an error at any earlier step leaves the store as it
//! was.

use std::io::Write;
use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::choice::Choices;
use crate::config::ManagerCandidates;
use crate::models::employee::{Employee, NewEmployee};
use crate::models::role::NewRole;
use crate::persistence::db::Database;
use crate::persistence::department_repo::DepartmentRepo;
use crate::persistence::employee_repo::EmployeeRepo;
use crate::persistence::role_repo::RoleRepo;
use crate::persistence::schema;
use crate::prompt::Prompter;
use crate::{render, AppError, Result};

/// Prompt shown above the main menu.
pub const MENU_PROMPT: &str = "Please select the following options:";

/// Label of the manager entry meaning "no manager".
pub const NO_MANAGER: &str = "None";

/// Top-level menu entries, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Tabulate employees with role, department, salary and manager.
    ViewEmployees,
    /// Create an employee.
    AddEmployee,
    /// Move an employee to a different role.
    UpdateEmployeeRole,
    /// Tabulate roles with their department.
    ViewRoles,
    /// Create a role.
    AddRole,
    /// Tabulate departments.
    ViewDepartments,
    /// Create a department.
    AddDepartment,
    /// Leave the loop.
    Quit,
}

impl MenuAction {
    /// All actions in menu order.
    pub const ALL: [Self; 8] = [
        Self::ViewEmployees,
        Self::AddEmployee,
        Self::UpdateEmployeeRole,
        Self::ViewRoles,
        Self::AddRole,
        Self::ViewDepartments,
        Self::AddDepartment,
        Self::Quit,
    ];

    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ViewEmployees => "View All Employees",
            Self::AddEmployee => "Add Employee",
            Self::UpdateEmployeeRole => "Update Employee Role",
            Self::ViewRoles => "View All Roles",
            Self::AddRole => "Add Role",
            Self::ViewDepartments => "View All Departments",
            Self::AddDepartment => "Add Department",
            Self::Quit => "Quit",
        }
    }

    /// Action at a menu position; `None` for anything outside the menu.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Run one interactive session against `db`, optionally seeding demo data
/// first, and close the pool afterwards whatever the outcome.
///
/// # Errors
///
/// Returns a seeding failure or the first non-recoverable menu error. The
/// pool is closed in either case.
pub async fn run_session<P: Prompter, W: Write>(
    db: Arc<Database>,
    manager_candidates: ManagerCandidates,
    seed: bool,
    prompter: P,
    out: W,
) -> Result<()> {
    let outcome = seed_and_run(Arc::clone(&db), manager_candidates, seed, prompter, out).await;

    db.close().await;
    info!("database connection closed");
    outcome
}

async fn seed_and_run<P: Prompter, W: Write>(
    db: Arc<Database>,
    manager_candidates: ManagerCandidates,
    seed: bool,
    prompter: P,
    out: W,
) -> Result<()> {
    if seed {
        schema::seed_sample_data(&db).await?;
    }
    Tracker::new(db, manager_candidates, prompter, out).run().await
}

/// The interactive tracker: repositories, a prompt source and an output sink.
pub struct Tracker<P, W> {
    departments: DepartmentRepo,
    roles: RoleRepo,
    employees: EmployeeRepo,
    manager_candidates: ManagerCandidates,
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> Tracker<P, W> {
    /// Wire a tracker to `db`.
    #[must_use]
    pub fn new(
        db: Arc<Database>,
        manager_candidates: ManagerCandidates,
        prompter: P,
        out: W,
    ) -> Self {
        Self {
            departments: DepartmentRepo::new(Arc::clone(&db)),
            roles: RoleRepo::new(Arc::clone(&db)),
            employees: EmployeeRepo::new(db),
            manager_candidates,
            prompter,
            out,
        }
    }

    /// Consume the tracker, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Present the menu until the user quits.
    ///
    /// Backing out of the menu, or any answer outside it, counts as Quit.
    /// Recoverable errors are reported and the menu is shown again.
    ///
    /// # Errors
    ///
    /// Returns the first non-recoverable error (storage connection, I/O or
    /// terminal failure).
    pub async fn run(&mut self) -> Result<()> {
        let labels: Vec<String> = MenuAction::ALL
            .iter()
            .map(|action| action.label().to_owned())
            .collect();

        loop {
            let selected = self.prompter.select(MENU_PROMPT, &labels)?;
            let action = selected.and_then(MenuAction::from_index);
            let Some(action) = action.filter(|a| *a != MenuAction::Quit) else {
                info!("quit selected");
                return Ok(());
            };

            match self.dispatch(action).await {
                Ok(()) => {}
                Err(err) if err.is_recoverable() => {
                    warn!(?action, %err, "action abandoned");
                    writeln!(self.out, "error: {err}")?;
                }
                Err(err) => {
                    error!(?action, %err, "action failed");
                    return Err(err);
                }
            }
        }
    }

    /// Run the handler for `action`. `Quit` does nothing.
    ///
    /// # Errors
    ///
    /// Propagates any handler error.
    pub async fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::ViewEmployees => self.view_employees().await,
            MenuAction::AddEmployee => self.add_employee().await,
            MenuAction::UpdateEmployeeRole => self.update_employee_role().await,
            MenuAction::ViewRoles => self.view_roles().await,
            MenuAction::AddRole => self.add_role().await,
            MenuAction::ViewDepartments => self.view_departments().await,
            MenuAction::AddDepartment => self.add_department().await,
            MenuAction::Quit => Ok(()),
        }
    }

    /// Print every department.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` or `AppError::Io` on failure.
    pub async fn view_departments(&mut self) -> Result<()> {
        let rows = self.departments.list_all().await?;
        writeln!(self.out, "{}", render::departments(&rows))?;
        Ok(())
    }

    /// Print every role with its department.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` or `AppError::Io` on failure.
    pub async fn view_roles(&mut self) -> Result<()> {
        let rows = self.roles.list_with_departments().await?;
        writeln!(self.out, "{}", render::roles(&rows))?;
        Ok(())
    }

    /// Print every employee with role, department, salary and manager.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` or `AppError::Io` on failure.
    pub async fn view_employees(&mut self) -> Result<()> {
        let rows = self.employees.list_detailed().await?;
        writeln!(self.out, "{}", render::employees(&rows))?;
        Ok(())
    }

    /// Prompt for a name and insert a department.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for a blank name, otherwise any
    /// prompt or storage error.
    #[instrument(skip_all)]
    pub async fn add_department(&mut self) -> Result<()> {
        let name = self.required_text("Please enter the name of the new department:", "name")?;

        let department = self.departments.insert(&name).await?;
        info!(department_id = department.id, "department added");
        writeln!(self.out, "Added department {}.", department.name)?;
        Ok(())
    }

    /// Prompt for title, salary and department, then insert a role.
    ///
    /// # Errors
    ///
    /// Returns `AppError::EmptyChoices` when no department exists,
    /// `AppError::InvalidInput` for a blank title, otherwise any prompt or
    /// storage error.
    #[instrument(skip_all)]
    pub async fn add_role(&mut self) -> Result<()> {
        let departments = self.departments.list_all().await?;
        let department_choices =
            Choices::from_records(&departments, |d| d.name.clone(), |d| d.id);
        if department_choices.is_empty() {
            return Err(AppError::EmptyChoices(
                "no departments exist; add a department first".into(),
            ));
        }

        let title = self.required_text("Please enter the name of the new role:", "title")?;
        let salary = self.prompter.input_amount("Please enter the salary of this role:")?;
        let (department_id, _) = self.choose(
            "Please select the department this role belongs to:",
            &department_choices,
        )?;

        let role = self
            .roles
            .insert(&NewRole {
                title,
                salary,
                department_id,
            })
            .await?;
        info!(role_id = role.id, department_id, "role added");
        writeln!(self.out, "Added role {}.", role.title)?;
        Ok(())
    }

    /// Prompt for names, role and manager, then insert an employee.
    ///
    /// The manager list starts with [`NO_MANAGER`]; which employees follow
    /// it depends on the configured [`ManagerCandidates`] policy.
    ///
    /// # Errors
    ///
    /// Returns `AppError::EmptyChoices` when no role exists,
    /// `AppError::InvalidInput` for blank names, otherwise any prompt or
    /// storage error.
    #[instrument(skip_all)]
    pub async fn add_employee(&mut self) -> Result<()> {
        let roles = self.roles.list_all().await?;
        let role_choices = Choices::from_records(&roles, |r| r.title.clone(), |r| r.id);
        if role_choices.is_empty() {
            return Err(AppError::EmptyChoices(
                "no roles exist; add a role first".into(),
            ));
        }
        let managers = match self.manager_candidates {
            ManagerCandidates::TopLevel => self.employees.list_top_level().await?,
            ManagerCandidates::Any => self.employees.list_all().await?,
        };
        let manager_choices =
            Choices::from_records(&managers, Employee::full_name, |e| e.id).optional(NO_MANAGER);

        let first_name = self.required_text("First name?", "first name")?;
        let last_name = self.required_text("Last name?", "last name")?;
        let (role_id, _) = self.choose("Role?", &role_choices)?;
        let (manager_id, _) = self.choose("Employee's manager?", &manager_choices)?;

        let employee = self
            .employees
            .insert(&NewEmployee {
                first_name,
                last_name,
                role_id,
                manager_id,
            })
            .await?;
        info!(employee_id = employee.id, role_id, ?manager_id, "employee added");
        writeln!(self.out, "Added employee {}.", employee.full_name())?;
        Ok(())
    }

    /// Prompt for an employee and a role, then reassign the employee.
    ///
    /// # Errors
    ///
    /// Returns `AppError::EmptyChoices` when there are no employees or no
    /// roles, otherwise any prompt or storage error.
    #[instrument(skip_all)]
    pub async fn update_employee_role(&mut self) -> Result<()> {
        let employees = self.employees.list_all().await?;
        let employee_choices = Choices::from_records(&employees, Employee::full_name, |e| e.id);
        if employee_choices.is_empty() {
            return Err(AppError::EmptyChoices(
                "no employees exist; add an employee first".into(),
            ));
        }
        let roles = self.roles.list_all().await?;
        let role_choices = Choices::from_records(&roles, |r| r.title.clone(), |r| r.id);
        if role_choices.is_empty() {
            return Err(AppError::EmptyChoices(
                "no roles exist; add a role first".into(),
            ));
        }

        let (employee_id, _) = self.choose("Which employee?", &employee_choices)?;
        let (role_id, role_label) = self.choose("New role?", &role_choices)?;

        let employee = self.employees.update_role(employee_id, role_id).await?;
        info!(employee_id, role_id, "employee role updated");
        writeln!(
            self.out,
            "Updated {} to role {role_label}.",
            employee.full_name()
        )?;
        Ok(())
    }

    fn required_text(&mut self, prompt: &str, field: &str) -> Result<String> {
        let answer = self.prompter.input(prompt)?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(format!("{field} must not be blank")));
        }
        Ok(trimmed.to_owned())
    }

    fn choose<K: Copy>(&mut self, prompt: &str, choices: &Choices<K>) -> Result<(K, String)> {
        let index = self
            .prompter
            .select(prompt, choices.labels())?
            .ok_or(AppError::Cancelled)?;
        let key = choices.key_at(index)?;
        let label = choices.label_at(index).unwrap_or_default().to_owned();
        Ok((key, label))
    }
}
