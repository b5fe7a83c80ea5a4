//! Various procedures for driving a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod access;
pub mod initialise;
pub mod step;
pub mod update;
