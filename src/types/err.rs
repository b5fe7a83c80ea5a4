//! Error types used in the library.
//!
//! - Errors are local to a call, and no error leaves a context unusable.
//!   Correcting the call is always sufficient to recover.
//! - Rejections at the C boundary are noted with an [FmiError], and reported to the host as a status.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::variable::{ValueReference, VariableKind};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Access(AccessError),
    Fmi(FmiError),
    State(StateError),
    VariableDB(VariableDBError),
}

/// Errors with the shape of a request made through the access surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessError {
    /// The references and values of a batch are of different lengths.
    /// Nothing from the batch is applied.
    LengthMismatch { references: usize, values: usize },
}

impl From<AccessError> for ErrorKind {
    fn from(e: AccessError) -> Self {
        ErrorKind::Access(e)
    }
}

/// Errors noted at the FMI boundary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FmiError {
    /// The GUID given at instantiation is not the GUID of the model.
    GuidMismatch,

    /// Instantiation was requested for an interface other than co-simulation.
    UnsupportedInterface,

    /// A required pointer was null.
    NullArgument,

    /// Access to a variable type the model does not declare, e.g. a real.
    UnsupportedVariableType,

    /// A step was cancelled, though steps complete synchronously.
    NoPendingStep,

    /// A step was requested after the host terminated the instance, and before any reset.
    Terminated,

    /// A function of the interface which the unit exports, though does not support.
    Unsupported,
}

impl From<FmiError> for ErrorKind {
    fn from(e: FmiError) -> Self {
        ErrorKind::Fmi(e)
    }
}

/// Errors due to the state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// Some access was made before the context was initialised.
    UninitializedAccess,

    /// A configuration option was changed in a state later than its max state.
    ConfigurationClosed,

    /// The lock of a shared context was poisoned by a panicking holder.
    Poisoned,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Errors in the variable database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VariableDBError {
    /// The reference does not name a declared variable of the given kind.
    InvalidIdentifier(VariableKind, ValueReference),
}

impl From<VariableDBError> for ErrorKind {
    fn from(e: VariableDBError) -> Self {
        ErrorKind::VariableDB(e)
    }
}
