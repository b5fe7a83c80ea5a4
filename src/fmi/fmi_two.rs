//! Bindings for the FMI 2.0 co-simulation interface.
//!
//! In particular:
//! - Only the co-simulation interface is supported, and instantiation for model exchange fails.
//! - The model declares no reals and no strings, so any reference to a real or a string is an error.
//! - There is no support for getting, setting, or serializing the state of an instance.
//! - There is no support for directional derivatives, or input derivatives.
//!
//! Unsupported functions are still exported, as a host may bind every function of the interface when loading the library.
//! Each returns [fmi2Error](fmi2Status::fmi2Error).
//!
//! Otherwise, each function maps to a method of the bundled [context](crate::context::Context).

#![allow(non_snake_case)]

use std::ffi::{c_char, c_int, CStr};

use crate::{
    config::Config,
    context::Context,
    misc::log::targets::{self},
    types::err::FmiError,
};

use super::{
    fmi2Boolean, fmi2Byte, fmi2CallbackFunctions, fmi2Component, fmi2FMUstate, fmi2False,
    fmi2Integer, fmi2Real, fmi2Status, fmi2StatusKind, fmi2String, fmi2True, fmi2Type,
    fmi2ValueReference, HostLogger, InstanceBundle, MODEL_GUID,
};

/// Recovers a bundle from a component, if the component is not null.
unsafe fn bundle_mut<'a>(c: fmi2Component) -> Option<&'a mut InstanceBundle> {
    unsafe { (c as *mut InstanceBundle).as_mut() }
}

/// A slice of `len` elements from `ptr`, unless `ptr` is null and `len` is not zero.
unsafe fn slice_from<'a, T>(ptr: *const T, len: usize) -> Option<&'a [T]> {
    match (len, ptr.is_null()) {
        (0, _) => Some(&[]),
        (_, true) => None,
        (_, false) => Some(unsafe { std::slice::from_raw_parts(ptr, len) }),
    }
}

/// A mutable slice of `len` elements from `ptr`, unless `ptr` is null and `len` is not zero.
unsafe fn slice_from_mut<'a, T>(ptr: *mut T, len: usize) -> Option<&'a mut [T]> {
    match (len, ptr.is_null()) {
        (0, _) => Some(Default::default()),
        (_, true) => None,
        (_, false) => Some(unsafe { std::slice::from_raw_parts_mut(ptr, len) }),
    }
}

/// The platform of the types used by the library.
#[no_mangle]
pub extern "C" fn fmi2GetTypesPlatform() -> *const c_char {
    c"default".as_ptr()
}

/// The version of the interface implemented.
#[no_mangle]
pub extern "C" fn fmi2GetVersion() -> *const c_char {
    c"2.0".as_ptr()
}

/// Instantiates the model and returns a component bound to the instance, or null if instantiation fails.
///
/// The instance is initialised with the default start values before it is returned.
///
/// # Safety
/// Strings must be null or nul terminated, and `functions` must be null or point to valid callbacks.
#[no_mangle]
pub unsafe extern "C" fn fmi2Instantiate(
    instance_name: fmi2String,
    fmu_type: c_int,
    fmu_guid: fmi2String,
    _fmu_resource_location: fmi2String,
    functions: *const fmi2CallbackFunctions,
    _visible: fmi2Boolean,
    logging_on: fmi2Boolean,
) -> fmi2Component {
    let logger = match unsafe { functions.as_ref() } {
        Some(functions) => HostLogger::from(functions),
        None => HostLogger::default(),
    };

    if instance_name.is_null() {
        log::warn!(target: targets::FMI, "fmi2Instantiate: {:?}", FmiError::NullArgument);
        return std::ptr::null_mut();
    }
    let name = unsafe { CStr::from_ptr(instance_name) };

    let rejection = if fmu_type != fmi2Type::fmi2CoSimulation as c_int {
        Some(FmiError::UnsupportedInterface)
    } else if fmu_guid.is_null() {
        Some(FmiError::NullArgument)
    } else if unsafe { CStr::from_ptr(fmu_guid) }.to_bytes() != MODEL_GUID.as_bytes() {
        Some(FmiError::GuidMismatch)
    } else {
        None
    };

    if let Some(e) = rejection {
        log::warn!(target: targets::FMI, "fmi2Instantiate: {e:?}");
        if logging_on != fmi2False {
            logger.log(
                name,
                fmi2Status::fmi2Error,
                "logStatusError",
                &format!("fmi2Instantiate: {e:?}"),
            );
        }
        return std::ptr::null_mut();
    }

    let mut config = Config::default();
    config.instance_name = name.to_string_lossy().into_owned();
    config.logging_on.value = logging_on != fmi2False;

    let mut bundle = InstanceBundle::new(Context::from_config(config), name.to_owned(), logger);
    bundle.context.initialise();

    Box::into_raw(Box::new(bundle)) as fmi2Component
}

/// Releases the instance bound to the component.
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2FreeInstance(c: fmi2Component) {
    if c.is_null() {
        return;
    }
    let bundle = unsafe { Box::from_raw(c as *mut InstanceBundle) };
    log::debug!(target: targets::FMI, "Freed {}", bundle.context.config.instance_name);
}

/// Sets whether messages are sent to the logger of the host.
///
/// Categories are not distinguished.
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2SetDebugLogging(
    c: fmi2Component,
    logging_on: fmi2Boolean,
    _n_categories: usize,
    _categories: *const fmi2String,
) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };

    let result = bundle.context.set_logging(logging_on != fmi2False);
    bundle.status_of("fmi2SetDebugLogging", result)
}

/// Notes the start time of an experiment.
///
/// Tolerance and stop time are not used.
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2SetupExperiment(
    c: fmi2Component,
    _tolerance_defined: fmi2Boolean,
    _tolerance: fmi2Real,
    start_time: fmi2Real,
    _stop_time_defined: fmi2Boolean,
    _stop_time: fmi2Real,
) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };

    bundle.context.counters.communication_point = start_time;
    fmi2Status::fmi2OK
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2EnterInitializationMode(c: fmi2Component) -> fmi2Status {
    match unsafe { bundle_mut(c) } {
        Some(bundle) => bundle.status_of("fmi2EnterInitializationMode", bundle.context.ensure_ready()),
        None => fmi2Status::fmi2Error,
    }
}

/// Leaves initialisation, with outputs derived from any inputs set during initialisation.
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2ExitInitializationMode(c: fmi2Component) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };

    match bundle.context.ensure_ready() {
        Ok(()) => {
            bundle.context.update_outputs();
            fmi2Status::fmi2OK
        }
        Err(e) => bundle.error("fmi2ExitInitializationMode", e),
    }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2Terminate(c: fmi2Component) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };

    log::info!(target: targets::FMI, "Terminated {}", bundle.context.config.instance_name);
    bundle.terminated = true;
    fmi2Status::fmi2OK
}

/// Restores the instance to its state directly after instantiation.
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2Reset(c: fmi2Component) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };

    bundle.context.reset();
    bundle.terminated = false;
    fmi2Status::fmi2OK
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
/// Unless `nvr` is zero, `vr` and `value` must point to at least `nvr` elements.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetInteger(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *mut fmi2Integer,
) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };
    let (Some(references), Some(values)) =
        (unsafe { slice_from(vr, nvr) }, unsafe { slice_from_mut(value, nvr) })
    else {
        return bundle.error("fmi2GetInteger", FmiError::NullArgument);
    };

    match bundle.context.get_integers(references) {
        Ok(read) => {
            values.copy_from_slice(&read);
            fmi2Status::fmi2OK
        }
        Err(e) => bundle.error("fmi2GetInteger", e),
    }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
/// Unless `nvr` is zero, `vr` and `value` must point to at least `nvr` elements.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetBoolean(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *mut fmi2Boolean,
) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };
    let (Some(references), Some(values)) =
        (unsafe { slice_from(vr, nvr) }, unsafe { slice_from_mut(value, nvr) })
    else {
        return bundle.error("fmi2GetBoolean", FmiError::NullArgument);
    };

    match bundle.context.get_booleans(references) {
        Ok(read) => {
            for (value, read) in values.iter_mut().zip(read) {
                *value = match read {
                    true => fmi2True,
                    false => fmi2False,
                };
            }
            fmi2Status::fmi2OK
        }
        Err(e) => bundle.error("fmi2GetBoolean", e),
    }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
/// Unless `nvr` is zero, `vr` and `value` must point to at least `nvr` elements.
#[no_mangle]
pub unsafe extern "C" fn fmi2SetInteger(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *const fmi2Integer,
) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };
    let (Some(references), Some(values)) =
        (unsafe { slice_from(vr, nvr) }, unsafe { slice_from(value, nvr) })
    else {
        return bundle.error("fmi2SetInteger", FmiError::NullArgument);
    };

    let result = bundle.context.set_integers(references, values);
    bundle.status_of("fmi2SetInteger", result)
}

/// Any non-zero value is read as true.
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
/// Unless `nvr` is zero, `vr` and `value` must point to at least `nvr` elements.
#[no_mangle]
pub unsafe extern "C" fn fmi2SetBoolean(
    c: fmi2Component,
    vr: *const fmi2ValueReference,
    nvr: usize,
    value: *const fmi2Boolean,
) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };
    let (Some(references), Some(values)) =
        (unsafe { slice_from(vr, nvr) }, unsafe { slice_from(value, nvr) })
    else {
        return bundle.error("fmi2SetBoolean", FmiError::NullArgument);
    };

    let values = values.iter().map(|value| *value != fmi2False).collect::<Vec<_>>();
    let result = bundle.context.set_booleans(references, &values);
    bundle.status_of("fmi2SetBoolean", result)
}

/// Access to a kind of variable the model does not declare.
///
/// An empty batch is fine, and any reference is an error.
unsafe fn undeclared_access(c: fmi2Component, function: &str, nvr: usize) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };

    match nvr {
        0 => bundle.status_of(function, bundle.context.ensure_ready()),
        _ => bundle.error(function, FmiError::UnsupportedVariableType),
    }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetReal(
    c: fmi2Component,
    _vr: *const fmi2ValueReference,
    nvr: usize,
    _value: *mut fmi2Real,
) -> fmi2Status {
    unsafe { undeclared_access(c, "fmi2GetReal", nvr) }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2SetReal(
    c: fmi2Component,
    _vr: *const fmi2ValueReference,
    nvr: usize,
    _value: *const fmi2Real,
) -> fmi2Status {
    unsafe { undeclared_access(c, "fmi2SetReal", nvr) }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetString(
    c: fmi2Component,
    _vr: *const fmi2ValueReference,
    nvr: usize,
    _value: *mut fmi2String,
) -> fmi2Status {
    unsafe { undeclared_access(c, "fmi2GetString", nvr) }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2SetString(
    c: fmi2Component,
    _vr: *const fmi2ValueReference,
    nvr: usize,
    _value: *const fmi2String,
) -> fmi2Status {
    unsafe { undeclared_access(c, "fmi2SetString", nvr) }
}

/// Advances the instance, which has no effect on any variable.
///
/// An instance terminated by the host may not step until reset.
///
/// Steps complete before returning, so [fmi2Pending](fmi2Status::fmi2Pending) is never returned.
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2DoStep(
    c: fmi2Component,
    current_communication_point: fmi2Real,
    communication_step_size: fmi2Real,
    _no_set_fmu_state_prior_to_current_point: fmi2Boolean,
) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };

    if bundle.terminated {
        return bundle.error("fmi2DoStep", FmiError::Terminated);
    }

    let result = bundle
        .context
        .do_step(current_communication_point, communication_step_size);
    bundle.status_of("fmi2DoStep", result)
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2CancelStep(c: fmi2Component) -> fmi2Status {
    match unsafe { bundle_mut(c) } {
        Some(bundle) => bundle.error("fmi2CancelStep", FmiError::NoPendingStep),
        None => fmi2Status::fmi2Error,
    }
}

/// No status kind is reported with a status.
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetStatus(
    c: fmi2Component,
    _s: c_int,
    _value: *mut fmi2Status,
) -> fmi2Status {
    match unsafe { bundle_mut(c) } {
        Some(_) => fmi2Status::fmi2Discard,
        None => fmi2Status::fmi2Error,
    }
}

/// Reports the last communication point reached, for [fmi2LastSuccessfulTime](fmi2StatusKind::fmi2LastSuccessfulTime).
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed, and `value` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetRealStatus(
    c: fmi2Component,
    s: c_int,
    value: *mut fmi2Real,
) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };

    if s != fmi2StatusKind::fmi2LastSuccessfulTime as c_int {
        return fmi2Status::fmi2Discard;
    }

    match unsafe { value.as_mut() } {
        Some(value) => {
            *value = bundle.context.counters.communication_point;
            fmi2Status::fmi2OK
        }
        None => bundle.error("fmi2GetRealStatus", FmiError::NullArgument),
    }
}

/// No status kind is reported with an integer.
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetIntegerStatus(
    c: fmi2Component,
    _s: c_int,
    _value: *mut fmi2Integer,
) -> fmi2Status {
    match unsafe { bundle_mut(c) } {
        Some(_) => fmi2Status::fmi2Discard,
        None => fmi2Status::fmi2Error,
    }
}

/// Reports whether the slave requests termination, for [fmi2Terminated](fmi2StatusKind::fmi2Terminated).
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed, and `value` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetBooleanStatus(
    c: fmi2Component,
    s: c_int,
    value: *mut fmi2Boolean,
) -> fmi2Status {
    let Some(bundle) = (unsafe { bundle_mut(c) }) else {
        return fmi2Status::fmi2Error;
    };

    if s != fmi2StatusKind::fmi2Terminated as c_int {
        return fmi2Status::fmi2Discard;
    }

    match unsafe { value.as_mut() } {
        Some(value) => {
            *value = match bundle.context.terminate_requested() {
                true => fmi2True,
                false => fmi2False,
            };
            fmi2Status::fmi2OK
        }
        None => bundle.error("fmi2GetBooleanStatus", FmiError::NullArgument),
    }
}

/// No status kind is reported with a string.
///
/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetStringStatus(
    c: fmi2Component,
    _s: c_int,
    _value: *mut fmi2String,
) -> fmi2Status {
    match unsafe { bundle_mut(c) } {
        Some(_) => fmi2Status::fmi2Discard,
        None => fmi2Status::fmi2Error,
    }
}

/// A function the unit does not support.
unsafe fn unsupported(c: fmi2Component, function: &str) -> fmi2Status {
    match unsafe { bundle_mut(c) } {
        Some(bundle) => bundle.error(function, FmiError::Unsupported),
        None => fmi2Status::fmi2Error,
    }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetFMUstate(
    c: fmi2Component,
    _fmu_state: *mut fmi2FMUstate,
) -> fmi2Status {
    unsafe { unsupported(c, "fmi2GetFMUstate") }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2SetFMUstate(c: fmi2Component, _fmu_state: fmi2FMUstate) -> fmi2Status {
    unsafe { unsupported(c, "fmi2SetFMUstate") }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2FreeFMUstate(
    c: fmi2Component,
    _fmu_state: *mut fmi2FMUstate,
) -> fmi2Status {
    unsafe { unsupported(c, "fmi2FreeFMUstate") }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2SerializedFMUstateSize(
    c: fmi2Component,
    _fmu_state: fmi2FMUstate,
    _size: *mut usize,
) -> fmi2Status {
    unsafe { unsupported(c, "fmi2SerializedFMUstateSize") }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2SerializeFMUstate(
    c: fmi2Component,
    _fmu_state: fmi2FMUstate,
    _serialized_state: *mut fmi2Byte,
    _size: usize,
) -> fmi2Status {
    unsafe { unsupported(c, "fmi2SerializeFMUstate") }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2DeSerializeFMUstate(
    c: fmi2Component,
    _serialized_state: *const fmi2Byte,
    _size: usize,
    _fmu_state: *mut fmi2FMUstate,
) -> fmi2Status {
    unsafe { unsupported(c, "fmi2DeSerializeFMUstate") }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetDirectionalDerivative(
    c: fmi2Component,
    _v_unknown_ref: *const fmi2ValueReference,
    _n_unknown: usize,
    _v_known_ref: *const fmi2ValueReference,
    _n_known: usize,
    _dv_known: *const fmi2Real,
    _dv_unknown: *mut fmi2Real,
) -> fmi2Status {
    unsafe { unsupported(c, "fmi2GetDirectionalDerivative") }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2SetRealInputDerivatives(
    c: fmi2Component,
    _vr: *const fmi2ValueReference,
    _nvr: usize,
    _order: *const fmi2Integer,
    _value: *const fmi2Real,
) -> fmi2Status {
    unsafe { unsupported(c, "fmi2SetRealInputDerivatives") }
}

/// # Safety
/// The component must be null or returned by [fmi2Instantiate] and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn fmi2GetRealOutputDerivatives(
    c: fmi2Component,
    _vr: *const fmi2ValueReference,
    _nvr: usize,
    _order: *const fmi2Integer,
    _value: *mut fmi2Real,
) -> fmi2Status {
    unsafe { unsupported(c, "fmi2GetRealOutputDerivatives") }
}
