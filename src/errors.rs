//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid rotation frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Member not found: {0}")]
    MemberNotFound(i64),

    #[error("Event not found: {0}")]
    EventNotFound(i64),

    #[error("Task not found: {0}")]
    TaskNotFound(i64),

    #[error("Goal not found: {0}")]
    GoalNotFound(i64),

    #[error("Reward not found: {0}")]
    RewardNotFound(i64),

    #[error("Budget category not found: {0}")]
    CategoryNotFound(String),

    #[error("Not enough points: {member} has {available}, reward costs {cost}")]
    InsufficientPoints {
        member: String,
        available: i64,
        cost: i64,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
