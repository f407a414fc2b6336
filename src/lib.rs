pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
pub mod output;
pub mod scanner;
pub mod source;
pub mod tally;

pub use error::{RbacAuditError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_MIGRATION_NEEDED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
