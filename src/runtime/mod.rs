//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the side effects of
//! an install run, enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `fs` - File system operations (reading a requirements file)
//! - `process` - Child process execution

mod fs;
mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

pub use process::ProcessExit;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;

    // Processes
    /// Run `command[0]` with the remaining elements as arguments, inheriting
    /// the caller's stdin, stdout and stderr, and wait for it to exit.
    /// Returns an error only if the process could not be started.
    async fn run(&self, command: &[String]) -> Result<ProcessExit>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    async fn run(&self, command: &[String]) -> Result<ProcessExit> {
        self.run_impl(command).await
    }
}
