//! secaudit Library
//!
//! This crate provides the core functionality for validating source trees
//! against a fixed catalog of security anti-patterns and producing a
//! structured findings report.

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod report;
pub mod rules;
pub mod scanner;

pub use config::ScanConfig;
pub use error::SecAuditError;
pub use report::{Finding, Report, Status};
pub use scanner::Validator;
