//! Core traits for dependency injection and testability
//!
//! The filesystem and the package manager processes are the only things the
//! tool touches outside itself. Both sit behind these traits so the upgrade
//! flow can be exercised with in-memory fakes.

use crate::error::Result;

/// Existence checks relative to the project root.
pub trait FileProbe {
    /// Whether `file_name` exists in the project root.
    fn exists(&self, file_name: &str) -> bool;
}

/// Synchronous execution of a rendered command string.
pub trait CommandRunner {
    /// Run `command` to completion and return its captured stdout.
    ///
    /// A non-zero exit status is an error.
    fn run(&self, command: &str) -> Result<String>;
}
