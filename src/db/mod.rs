//! Databases for holding the values of a unit.
//!
//!   - [The variable database](crate::db::variable)
//!     + The current value of every declared variable, addressed by kind and [value reference](crate::structures::variable::ValueReference).
//!       * Integer slots
//!       * Boolean slots
//!
//! A database is owned by exactly one context, and no other structure retains a copy of its values.

pub mod variable;
