use std::ffi::CString;

use crate::{context::Context, misc::log::targets::{self}, types::err::ErrorKind};

use super::{fmi2Status, HostLogger};

/// A structure which bundles a context with some structures for the FMI.
pub struct InstanceBundle {
    /// A context.
    pub context: Context,

    /// The name given to the instance by the host.
    pub instance_name: CString,

    /// The logger of the host, if one was given.
    pub logger: HostLogger,

    /// Whether the host has called terminate, and not since reset.
    pub terminated: bool,
}

impl InstanceBundle {
    pub fn new(context: Context, instance_name: CString, logger: HostLogger) -> Self {
        InstanceBundle {
            context,
            instance_name,
            logger,
            terminated: false,
        }
    }

    /// The status to return from `function` given `result`, noting any error.
    pub fn status_of<T>(&self, function: &str, result: Result<T, ErrorKind>) -> fmi2Status {
        match result {
            Ok(_) => fmi2Status::fmi2OK,
            Err(e) => self.error(function, e),
        }
    }

    /// Notes `e` as an error of `function`, and returns [fmi2Error](fmi2Status::fmi2Error).
    pub fn error(&self, function: &str, e: impl Into<ErrorKind>) -> fmi2Status {
        let e = e.into();
        log::warn!(target: targets::FMI, "{function}: {e:?}");

        if self.context.config.logging_on.value && self.logger.is_present() {
            self.logger.log(
                &self.instance_name,
                fmi2Status::fmi2Error,
                "logStatusError",
                &format!("{function}: {e:?}"),
            );
        }

        fmi2Status::fmi2Error
    }
}
