//! C Bindings for the Functional Mock-up Interface, version 2.0, for co-simulation.
//!
//! Bindings are given in [fmi_two], and allow the library to be loaded as a co-simulation slave by an orchestrator.
//!
//! Information about the interface may be found at <https://fmi-standard.org>.
//!
//! Note, 'component' and 'instance' are synonymous in this module.\
//! Though, strictly, 'component' is only used as, or when referring to, the parameter of an interface function, and 'instance' is only used to refer to an [InstanceBundle].
//!
//! # Compiling a library
//!
//! The crate is built as a `cdylib` alongside an `rlib`, and the `cdylib` exports each `fmi2` function.\
//! Packaging the library with a model description is left to other tools.
//!
//! # Implementation details
//!
//! ## Bundles
//!
//! For interaction with the interface a context is bundled together with a few interface specific structures in an [InstanceBundle].
//! Each call to `fmi2Instantiate` allocates a fresh bundle, and the orchestrator owns the pointer to it.
//! There is no registry of instances.
//!
//! ## Status
//!
//! Any [error](crate::types::err::ErrorKind) from a context is returned as [fmi2Error](fmi2Status::fmi2Error).
//! If logging is on, a message is also sent to the logger of the host.

#![allow(non_camel_case_types, non_upper_case_globals)]

use std::ffi::{c_char, c_double, c_int, c_uint, c_void};

mod callbacks;
pub use callbacks::{fmi2CallbackFunctions, fmi2CallbackLogger, HostLogger};

mod instance_bundle;
pub use instance_bundle::InstanceBundle;

pub mod fmi_two;

/// The identifier of the model, and so the prefix of the packaged library.
pub const MODEL_IDENTIFIER: &str = "cockpit_test";

/// The GUID of the model, checked on instantiation.
pub const MODEL_GUID: &str = "{f1e2d3c4-b5a6-7890-abcd-1234567890ef}";

pub type fmi2Component = *mut c_void;
pub type fmi2ComponentEnvironment = *mut c_void;
pub type fmi2ValueReference = c_uint;
pub type fmi2Real = c_double;
pub type fmi2Integer = c_int;
pub type fmi2Boolean = c_int;
pub type fmi2String = *const c_char;
pub type fmi2Byte = c_char;
pub type fmi2FMUstate = *mut c_void;

pub const fmi2True: fmi2Boolean = 1;
pub const fmi2False: fmi2Boolean = 0;

/// Codes used to indicate the success or failure of a function call.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum fmi2Status {
    fmi2OK = 0,
    fmi2Warning,
    fmi2Discard,
    fmi2Error,
    fmi2Fatal,
    fmi2Pending,
}

/// Interfaces a unit may be instantiated for.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum fmi2Type {
    fmi2ModelExchange = 0,
    fmi2CoSimulation = 1,
}

/// Kinds of status which may be queried of a co-simulation slave.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum fmi2StatusKind {
    fmi2DoStepStatus = 0,
    fmi2PendingStatus = 1,
    fmi2LastSuccessfulTime = 2,
    fmi2Terminated = 3,
}
