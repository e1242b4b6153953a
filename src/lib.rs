#![forbid(unsafe_code)]

//! Interactive terminal tool for managing departments, roles and employees.

pub mod choice;
pub mod config;
pub mod errors;
pub mod menu;
pub mod models;
pub mod persistence;
pub mod prompt;
pub mod render;

pub use config::TrackerConfig;
pub use errors::{AppError, Result};
