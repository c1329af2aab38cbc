//! Rules module - Rule catalog and per-line matching

pub mod catalog;
pub mod matcher;

pub use catalog::{Category, Rule, Severity};
pub use matcher::match_line;
