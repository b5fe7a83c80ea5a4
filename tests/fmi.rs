use std::ffi::c_int;

use vecu_cockpit::{
    fmi::{
        fmi2Boolean, fmi2Component, fmi2FMUstate, fmi2False, fmi2Integer, fmi2Real, fmi2Status,
        fmi2StatusKind, fmi2True, fmi2Type, fmi2ValueReference, fmi_two::*, MODEL_GUID,
    },
    structures::variable::references::{boolean, integer},
};

const GUID: &std::ffi::CStr = c"{f1e2d3c4-b5a6-7890-abcd-1234567890ef}";

fn instantiate(fmu_type: fmi2Type, guid: &std::ffi::CStr) -> fmi2Component {
    unsafe {
        fmi2Instantiate(
            c"cockpit".as_ptr(),
            fmu_type as c_int,
            guid.as_ptr(),
            std::ptr::null(),
            std::ptr::null(),
            fmi2False,
            fmi2False,
        )
    }
}

mod instantiation {
    use super::*;

    #[test]
    fn guid_constant() {
        assert_eq!(GUID.to_bytes(), MODEL_GUID.as_bytes());
    }

    #[test]
    fn matching_guid() {
        let c = instantiate(fmi2Type::fmi2CoSimulation, GUID);
        assert!(!c.is_null());
        unsafe { fmi2FreeInstance(c) };
    }

    #[test]
    fn mismatched_guid() {
        let c = instantiate(fmi2Type::fmi2CoSimulation, c"{00000000-0000-0000-0000-000000000000}");
        assert!(c.is_null());
    }

    #[test]
    fn model_exchange() {
        let c = instantiate(fmi2Type::fmi2ModelExchange, GUID);
        assert!(c.is_null());
    }

    #[test]
    fn null_name() {
        let c = unsafe {
            fmi2Instantiate(
                std::ptr::null(),
                fmi2Type::fmi2CoSimulation as c_int,
                GUID.as_ptr(),
                std::ptr::null(),
                std::ptr::null(),
                fmi2False,
                fmi2True,
            )
        };
        assert!(c.is_null());
    }

    #[test]
    fn null_component() {
        unsafe {
            assert_eq!(fmi2DoStep(std::ptr::null_mut(), 0.0, 0.1, fmi2True), fmi2Status::fmi2Error);
            fmi2FreeInstance(std::ptr::null_mut());
        }
    }
}

mod access {
    use super::*;

    #[test]
    fn lamp_override() {
        let c = instantiate(fmi2Type::fmi2CoSimulation, GUID);
        assert!(!c.is_null());

        let lamps: [fmi2ValueReference; 2] = [
            boolean::IN_PASSENGER_AIRBAG_DISABLE_LAMP,
            boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP,
        ];
        let output: [fmi2ValueReference; 1] = [boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP];
        let mut lit: [fmi2Boolean; 1] = [fmi2True];

        unsafe {
            assert_eq!(fmi2EnterInitializationMode(c), fmi2Status::fmi2OK);
            assert_eq!(fmi2ExitInitializationMode(c), fmi2Status::fmi2OK);

            assert_eq!(fmi2GetBoolean(c, output.as_ptr(), 1, lit.as_mut_ptr()), fmi2Status::fmi2OK);
            assert_eq!(lit, [fmi2False]);

            // Any non-zero value is true.
            let requests: [fmi2Boolean; 2] = [7, fmi2False];
            assert_eq!(fmi2SetBoolean(c, lamps.as_ptr(), 2, requests.as_ptr()), fmi2Status::fmi2OK);
            assert_eq!(fmi2GetBoolean(c, output.as_ptr(), 1, lit.as_mut_ptr()), fmi2Status::fmi2OK);
            assert_eq!(lit, [fmi2True]);

            fmi2FreeInstance(c);
        }
    }

    #[test]
    fn integer_forwarding() {
        let c = instantiate(fmi2Type::fmi2CoSimulation, GUID);
        assert!(!c.is_null());

        let inputs: [fmi2ValueReference; 2] = [
            integer::IN_USER_CONFIRM_AIRBAG_STATE,
            integer::IN_PASSENGER_AIRBAG_WARNING_STATE,
        ];
        let outputs: [fmi2ValueReference; 2] = [
            integer::OUT_USER_CONFIRM_AIRBAG_STATE,
            integer::OUT_PASSENGER_AIRBAG_WARNING_STATE,
        ];
        let written: [fmi2Integer; 2] = [1, -3];
        let mut read: [fmi2Integer; 2] = [0, 0];

        unsafe {
            assert_eq!(fmi2SetInteger(c, inputs.as_ptr(), 2, written.as_ptr()), fmi2Status::fmi2OK);
            assert_eq!(fmi2DoStep(c, 0.0, 0.01, fmi2True), fmi2Status::fmi2OK);
            assert_eq!(fmi2GetInteger(c, outputs.as_ptr(), 2, read.as_mut_ptr()), fmi2Status::fmi2OK);
            fmi2FreeInstance(c);
        }

        assert_eq!(read, written);
    }

    #[test]
    fn unknown_reference() {
        let c = instantiate(fmi2Type::fmi2CoSimulation, GUID);
        assert!(!c.is_null());

        let references: [fmi2ValueReference; 2] = [integer::IN_USER_CONFIRM_AIRBAG_STATE, 4];
        let values: [fmi2Integer; 2] = [9, 9];
        let confirmed: [fmi2ValueReference; 1] = [integer::OUT_USER_CONFIRM_AIRBAG_STATE];
        let mut read: [fmi2Integer; 1] = [-1];

        unsafe {
            assert_eq!(
                fmi2SetInteger(c, references.as_ptr(), 2, values.as_ptr()),
                fmi2Status::fmi2Error
            );
            assert_eq!(fmi2GetInteger(c, confirmed.as_ptr(), 1, read.as_mut_ptr()), fmi2Status::fmi2OK);
            fmi2FreeInstance(c);
        }

        assert_eq!(read, [0]);
    }

    #[test]
    fn null_arrays() {
        let c = instantiate(fmi2Type::fmi2CoSimulation, GUID);
        assert!(!c.is_null());

        let references: [fmi2ValueReference; 1] = [boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP];

        unsafe {
            assert_eq!(
                fmi2SetBoolean(c, references.as_ptr(), 1, std::ptr::null()),
                fmi2Status::fmi2Error
            );
            assert_eq!(
                fmi2GetInteger(c, std::ptr::null(), 1, std::ptr::null_mut()),
                fmi2Status::fmi2Error
            );
            assert_eq!(
                fmi2SetInteger(c, std::ptr::null(), 0, std::ptr::null()),
                fmi2Status::fmi2OK
            );
            fmi2FreeInstance(c);
        }
    }

    #[test]
    fn undeclared_kinds() {
        let c = instantiate(fmi2Type::fmi2CoSimulation, GUID);
        assert!(!c.is_null());

        let references: [fmi2ValueReference; 1] = [0];
        let values: [fmi2Real; 1] = [1.0];

        unsafe {
            assert_eq!(fmi2SetReal(c, references.as_ptr(), 0, values.as_ptr()), fmi2Status::fmi2OK);
            assert_eq!(
                fmi2SetReal(c, references.as_ptr(), 1, values.as_ptr()),
                fmi2Status::fmi2Error
            );
            assert_eq!(
                fmi2GetString(c, references.as_ptr(), 1, std::ptr::null_mut()),
                fmi2Status::fmi2Error
            );
            fmi2FreeInstance(c);
        }
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn statuses() {
        let c = instantiate(fmi2Type::fmi2CoSimulation, GUID);
        assert!(!c.is_null());

        let mut time: fmi2Real = 0.0;
        let mut terminated: fmi2Boolean = fmi2True;

        unsafe {
            assert_eq!(fmi2SetupExperiment(c, fmi2False, 0.0, 1.0, fmi2False, 0.0), fmi2Status::fmi2OK);
            assert_eq!(fmi2DoStep(c, 1.0, 0.5, fmi2True), fmi2Status::fmi2OK);

            assert_eq!(
                fmi2GetRealStatus(c, fmi2StatusKind::fmi2LastSuccessfulTime as c_int, &mut time),
                fmi2Status::fmi2OK
            );
            assert_eq!(
                fmi2GetBooleanStatus(c, fmi2StatusKind::fmi2Terminated as c_int, &mut terminated),
                fmi2Status::fmi2OK
            );
            assert_eq!(
                fmi2GetBooleanStatus(c, fmi2StatusKind::fmi2DoStepStatus as c_int, &mut terminated),
                fmi2Status::fmi2Discard
            );
            assert_eq!(fmi2CancelStep(c), fmi2Status::fmi2Error);

            fmi2FreeInstance(c);
        }

        assert_eq!(time, 1.5);
        assert_eq!(terminated, fmi2False);
    }

    #[test]
    fn terminate_and_reset() {
        let c = instantiate(fmi2Type::fmi2CoSimulation, GUID);
        assert!(!c.is_null());

        let warning: [fmi2ValueReference; 1] = [integer::IN_PASSENGER_AIRBAG_WARNING_STATE];
        let forwarded: [fmi2ValueReference; 1] = [integer::OUT_PASSENGER_AIRBAG_WARNING_STATE];
        let mut read: [fmi2Integer; 1] = [-1];

        unsafe {
            assert_eq!(fmi2SetInteger(c, warning.as_ptr(), 1, [6].as_ptr()), fmi2Status::fmi2OK);
            assert_eq!(fmi2Terminate(c), fmi2Status::fmi2OK);
            assert_eq!(fmi2DoStep(c, 0.0, 0.1, fmi2True), fmi2Status::fmi2Error);

            assert_eq!(fmi2Reset(c), fmi2Status::fmi2OK);
            assert_eq!(fmi2DoStep(c, 0.0, 0.1, fmi2True), fmi2Status::fmi2OK);

            assert_eq!(fmi2GetInteger(c, forwarded.as_ptr(), 1, read.as_mut_ptr()), fmi2Status::fmi2OK);
            fmi2FreeInstance(c);
        }

        assert_eq!(read, [0]);
    }

    #[test]
    fn versions() {
        let platform = unsafe { std::ffi::CStr::from_ptr(fmi2GetTypesPlatform()) };
        let version = unsafe { std::ffi::CStr::from_ptr(fmi2GetVersion()) };

        assert_eq!(platform.to_bytes(), b"default");
        assert_eq!(version.to_bytes(), b"2.0");
    }
}

mod unsupported {
    use super::*;

    #[test]
    fn state_and_derivatives() {
        let c = instantiate(fmi2Type::fmi2CoSimulation, GUID);
        assert!(!c.is_null());

        let mut state: fmi2FMUstate = std::ptr::null_mut();
        let mut size: usize = 0;
        let mut bytes = [0; 8];
        let references: [fmi2ValueReference; 1] = [0];
        let orders: [fmi2Integer; 1] = [1];
        let mut reals: [fmi2Real; 1] = [0.0];

        for component in [c, std::ptr::null_mut()] {
            unsafe {
                let statuses = [
                    fmi2GetFMUstate(component, &mut state),
                    fmi2SetFMUstate(component, state),
                    fmi2FreeFMUstate(component, &mut state),
                    fmi2SerializedFMUstateSize(component, state, &mut size),
                    fmi2SerializeFMUstate(component, state, bytes.as_mut_ptr(), bytes.len()),
                    fmi2DeSerializeFMUstate(component, bytes.as_ptr(), bytes.len(), &mut state),
                    fmi2GetDirectionalDerivative(
                        component,
                        references.as_ptr(),
                        1,
                        references.as_ptr(),
                        1,
                        reals.as_ptr(),
                        reals.as_mut_ptr(),
                    ),
                    fmi2SetRealInputDerivatives(
                        component,
                        references.as_ptr(),
                        1,
                        orders.as_ptr(),
                        reals.as_ptr(),
                    ),
                    fmi2GetRealOutputDerivatives(
                        component,
                        references.as_ptr(),
                        1,
                        orders.as_ptr(),
                        reals.as_mut_ptr(),
                    ),
                ];
                assert!(statuses.iter().all(|status| *status == fmi2Status::fmi2Error));
            }
        }

        // The instance is still usable.
        let lamp: [fmi2ValueReference; 1] = [boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP];
        let mut lit: [fmi2Boolean; 1] = [fmi2True];
        unsafe {
            assert_eq!(fmi2GetBoolean(c, lamp.as_ptr(), 1, lit.as_mut_ptr()), fmi2Status::fmi2OK);
            fmi2FreeInstance(c);
        }
        assert_eq!(lit, [fmi2False]);
        assert!(state.is_null());
    }
}

// The recording logger takes the single argument the library passes after its "%s" format in place of the variadic tail.
// This matches the variadic calling convention on these targets only.
#[cfg(all(target_os = "linux", any(target_arch = "x86_64", target_arch = "aarch64")))]
mod host_logger {
    use std::ffi::{c_char, CStr};

    use vecu_cockpit::fmi::{fmi2CallbackFunctions, fmi2ComponentEnvironment, fmi2String};

    use super::*;

    #[derive(Default)]
    struct Record {
        calls: Vec<(fmi2Status, String, String)>,
    }

    type RecordingLogger = unsafe extern "C" fn(
        fmi2ComponentEnvironment,
        fmi2String,
        fmi2Status,
        fmi2String,
        fmi2String,
        *const c_char,
    );

    type VariadicLogger = unsafe extern "C" fn(
        fmi2ComponentEnvironment,
        fmi2String,
        fmi2Status,
        fmi2String,
        fmi2String,
        ...
    );

    unsafe extern "C" fn record_message(
        environment: fmi2ComponentEnvironment,
        _instance_name: fmi2String,
        status: fmi2Status,
        category: fmi2String,
        _format: fmi2String,
        message: *const c_char,
    ) {
        let record = unsafe { &mut *(environment as *mut Record) };
        let category = unsafe { CStr::from_ptr(category) }.to_string_lossy().into_owned();
        let message = unsafe { CStr::from_ptr(message) }.to_string_lossy().into_owned();
        record.calls.push((status, category, message));
    }

    /// Instantiates with a recording logger, applies `f`, frees the instance, and returns the recorded calls.
    fn recorded(logging_on: fmi2Boolean, f: impl FnOnce(fmi2Component)) -> Vec<(fmi2Status, String, String)> {
        let record = Box::into_raw(Box::new(Record::default()));

        let logger = unsafe { std::mem::transmute::<RecordingLogger, VariadicLogger>(record_message) };
        let functions = fmi2CallbackFunctions {
            logger: Some(logger),
            allocateMemory: None,
            freeMemory: None,
            stepFinished: None,
            componentEnvironment: record as fmi2ComponentEnvironment,
        };

        let c = unsafe {
            fmi2Instantiate(
                c"cockpit".as_ptr(),
                fmi2Type::fmi2CoSimulation as c_int,
                GUID.as_ptr(),
                std::ptr::null(),
                &functions,
                fmi2False,
                logging_on,
            )
        };
        assert!(!c.is_null());

        f(c);
        unsafe { fmi2FreeInstance(c) };

        unsafe { Box::from_raw(record) }.calls
    }

    fn set_unknown_integer(c: fmi2Component) {
        let references: [fmi2ValueReference; 1] = [9];
        let values: [fmi2Integer; 1] = [1];
        let status = unsafe { fmi2SetInteger(c, references.as_ptr(), 1, values.as_ptr()) };
        assert_eq!(status, fmi2Status::fmi2Error);
    }

    #[test]
    fn errors_reach_the_host() {
        let calls = recorded(fmi2True, set_unknown_integer);

        assert_eq!(calls.len(), 1);
        let (status, category, message) = &calls[0];
        assert_eq!(*status, fmi2Status::fmi2Error);
        assert_eq!(category, "logStatusError");
        assert!(message.starts_with("fmi2SetInteger"));
    }

    #[test]
    fn silent_when_logging_off() {
        let calls = recorded(fmi2False, set_unknown_integer);
        assert!(calls.is_empty());
    }

    #[test]
    fn logging_switched_on() {
        let calls = recorded(fmi2False, |c| {
            set_unknown_integer(c);
            let status = unsafe { fmi2SetDebugLogging(c, fmi2True, 0, std::ptr::null()) };
            assert_eq!(status, fmi2Status::fmi2OK);
            unsafe { assert_eq!(fmi2CancelStep(c), fmi2Status::fmi2Error) };
        });

        assert_eq!(calls.len(), 1);
        assert!(calls[0].2.starts_with("fmi2CancelStep"));
    }
}
