//! propc-util — shared foundation types for the propositional-logic frontend.
//!
//! This crate owns the two pieces that `propc-lex` and `propc-par` both
//! need: the variable-interning [`Context`] and source [`Span`] tracking.
//! It carries no I/O, no evaluation, and no knowledge of grammar — those
//! live in the scanner and parser crates respectively.

pub mod context;
pub mod error;
pub mod span;

pub use context::{Context, VariableGetFlags, VariableId};
pub use error::{ContextError, ContextResult};
pub use span::{Position, Span};
