//! Error types shared across the application.

use std::fmt::{Display, Formatter};

use sqlx::error::ErrorKind;

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all domain failure modes.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Persistence failure when interacting with `SQLite`.
    Db(String),
    /// A write was rejected by a foreign-key, unique, not-null or check constraint.
    Constraint(String),
    /// Terminal prompt failure.
    Prompt(String),
    /// File-system or I/O operation failure.
    Io(String),
    /// Requested entity does not exist.
    NotFound(String),
    /// A required choice list has nothing to choose from.
    EmptyChoices(String),
    /// User input could not be coerced into the expected shape.
    InvalidInput(String),
    /// The user backed out of a prompt sequence.
    Cancelled,
}

impl AppError {
    /// Whether the menu loop may report this error and keep running.
    ///
    /// Connection, I/O and terminal failures are fatal; everything that
    /// stems from a single rejected request is not.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Constraint(_)
                | Self::NotFound(_)
                | Self::EmptyChoices(_)
                | Self::InvalidInput(_)
                | Self::Cancelled
        )
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Db(msg) => write!(f, "db: {msg}"),
            Self::Constraint(msg) => write!(f, "constraint violation: {msg}"),
            Self::Prompt(msg) => write!(f, "prompt: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::EmptyChoices(msg) => write!(f, "nothing to choose: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if matches!(
                    db_err.kind(),
                    ErrorKind::ForeignKeyViolation
                        | ErrorKind::UniqueViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                ) =>
            {
                Self::Constraint(db_err.message().to_owned())
            }
            _ => Self::Db(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}
