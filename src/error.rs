//! Error types for the `pera` interpreter core.
//!
//! Mirrors the three outcomes an execution can have: success, a compile-time
//! failure, or a runtime failure. Both variants carry a human-readable
//! message; formatting the location of the failure is left to the caller
//! (the scanner/compiler already know line numbers, see `scanner.rs`).

use thiserror::Error;

/// Everything that can go wrong compiling or running a source unit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PeraError {
    #[error("compile error: {0}")]
    Compile(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

impl PeraError {
    pub fn compile(msg: impl Into<String>) -> Self {
        PeraError::Compile(msg.into())
    }

    pub fn runtime(msg: impl Into<String>) -> Self {
        PeraError::Runtime(msg.into())
    }

    pub fn is_compile(&self) -> bool {
        matches!(self, PeraError::Compile(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, PeraError::Runtime(_))
    }
}

/// Crate-local result alias, used throughout the core.
pub type Result<T> = std::result::Result<T, PeraError>;
