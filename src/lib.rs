pub mod cli;
pub mod commands;
pub mod deleter;
pub mod error;
pub mod output;
pub mod scanner;

pub use error::{CleanError, DeletionError, ListingError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FATAL: i32 = 1;
pub const EXIT_INTERRUPTED: i32 = 130;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
