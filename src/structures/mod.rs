//! Structures used by a context.
//!
//! - [Variables](variable), their declarations and references.

pub mod variable;
