//! Core error types shared across the propositional-logic frontend.
//!
//! Errors are partitioned by subsystem, matching the component split of
//! the crates that consume them: this module owns the base/context
//! errors, `propc-par` owns the parser errors.

use thiserror::Error;

/// Errors produced by [`crate::context::Context::variable_get`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// `CREATE` and `REF` were both set, or `UNIQUE` was set without `CREATE`.
    #[error("Incompatible variable_get flags")]
    IncompatibleFlags,

    /// `CREATE` was set but a variable with this name already exists.
    #[error("Variable already exists")]
    CreateAlreadyExists,

    /// `REF` was set but no variable with this name exists yet.
    #[error("Variable reference not found")]
    RefNotFound,
}

/// Result type alias for context operations.
pub type ContextResult<T> = std::result::Result<T, ContextError>;
