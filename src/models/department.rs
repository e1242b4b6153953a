//! Department model.

use serde::Serialize;

/// Organizational grouping that owns one or more roles.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Department {
    /// Generated identifier.
    pub id: i64,
    /// Display name. Not unique.
    pub name: String,
}
