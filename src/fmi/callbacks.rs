//! The callbacks a host passes on instantiation.
//!
//! Of the callbacks only the logger is used.
//! Memory is allocated by the library, and as steps complete synchronously there is never a finished step to note.

use std::ffi::{c_void, CStr, CString};

use super::{fmi2ComponentEnvironment, fmi2Status, fmi2String};

/// The logger of a host.
///
/// The message is a format string, with any arguments following.
pub type fmi2CallbackLogger = Option<
    unsafe extern "C" fn(
        environment: fmi2ComponentEnvironment,
        instance_name: fmi2String,
        status: fmi2Status,
        category: fmi2String,
        message: fmi2String,
        ...
    ),
>;

/// Callbacks given by a host on instantiation.
#[repr(C)]
#[allow(non_snake_case)]
pub struct fmi2CallbackFunctions {
    pub logger: fmi2CallbackLogger,
    pub allocateMemory: Option<unsafe extern "C" fn(count: usize, size: usize) -> *mut c_void>,
    pub freeMemory: Option<unsafe extern "C" fn(object: *mut c_void)>,
    pub stepFinished:
        Option<unsafe extern "C" fn(environment: fmi2ComponentEnvironment, status: fmi2Status)>,
    pub componentEnvironment: fmi2ComponentEnvironment,
}

/// A copy of the logger given by a host, and the environment to pass back with each message.
pub struct HostLogger {
    logger: fmi2CallbackLogger,
    environment: fmi2ComponentEnvironment,
}

impl Default for HostLogger {
    fn default() -> Self {
        HostLogger {
            logger: None,
            environment: std::ptr::null_mut(),
        }
    }
}

impl From<&fmi2CallbackFunctions> for HostLogger {
    fn from(functions: &fmi2CallbackFunctions) -> Self {
        HostLogger {
            logger: functions.logger,
            environment: functions.componentEnvironment,
        }
    }
}

impl HostLogger {
    /// Whether the host gave a logger.
    pub fn is_present(&self) -> bool {
        self.logger.is_some()
    }

    /// Sends `message` to the logger of the host, if present.
    ///
    /// Any nul in `category` or `message` truncates the text sent.
    pub fn log(&self, instance_name: &CStr, status: fmi2Status, category: &str, message: &str) {
        let Some(logger) = self.logger else {
            return;
        };

        let category = terminated(category);
        let message = terminated(message);

        // Messages are never read as a format string.
        unsafe {
            logger(
                self.environment,
                instance_name.as_ptr(),
                status,
                category.as_ptr(),
                c"%s".as_ptr(),
                message.as_ptr(),
            )
        }
    }
}

fn terminated(text: &str) -> CString {
    let bytes = text.bytes().take_while(|byte| *byte != 0).collect::<Vec<_>>();
    CString::new(bytes).unwrap_or_default()
}
