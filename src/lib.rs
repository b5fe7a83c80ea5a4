//! A cockpit vECU --- a simulated passenger airbag indicator, for use as a unit of a co-simulation.
//!
//! vecu_cockpit is a library exposing a single unit with a fixed causal interface.
//! An orchestrator writes inputs and reads outputs, and outputs are a function of current inputs only.
//!
//! The unit declares:
//! - Four integers: a user confirmation and a warning state as inputs, a confirmed state and a forwarded warning state as outputs.
//! - Three booleans: requests to light the disable lamp and the enable lamp as inputs, and the effective disable lamp as output.
//!
//! The integer outputs forward the integer inputs.
//! The disable lamp output is lit only when disabling is requested, and enabling is not.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), and are driven through an [access surface](crate::procedures::access) of typed, batched, reads and writes.
//!
//! Internally, a context holds a [variable database](crate::db::variable), and after every accepted batch of writes applies the [update rule](crate::procedures::update) to derive outputs from inputs.
//!
//! Useful starting points, then, may be:
//! - The [declarations](crate::structures::variable) of the model variables and their references.
//! - The [update rule](crate::procedures::update), which is the only logic of the unit.
//! - The [FMI bindings](crate::fmi), to load the unit as a co-simulation slave.
//!
//! # Examples
//!
//! + Drive the unit through the host loop of a co-simulation: set inputs, step, get outputs.
//!
//! ```rust
//! # use vecu_cockpit::config::Config;
//! # use vecu_cockpit::context::Context;
//! use vecu_cockpit::structures::variable::references::{boolean, integer};
//!
//! let mut the_context = Context::from_config(Config::default());
//! the_context.initialise();
//!
//! let step_size = 0.01;
//! for (step, warning) in [0, 1, 2, 1].into_iter().enumerate() {
//!     let inputs = [integer::IN_PASSENGER_AIRBAG_WARNING_STATE, integer::IN_USER_CONFIRM_AIRBAG_STATE];
//!     assert!(the_context.set_integers(&inputs, &[warning, 1]).is_ok());
//!
//!     let lamps = [boolean::IN_PASSENGER_AIRBAG_DISABLE_LAMP, boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP];
//!     assert!(the_context.set_booleans(&lamps, &[warning > 0, false]).is_ok());
//!
//!     assert!(the_context.do_step(step as f64 * step_size, step_size).is_ok());
//!
//!     assert_eq!(the_context.get_integer(integer::OUT_PASSENGER_AIRBAG_WARNING_STATE), Ok(warning));
//!     assert_eq!(the_context.get_boolean(boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP), Ok(warning > 0));
//! }
//! ```
//!
//! + Look up references by name, as an orchestrator reading a model description would.
//!
//! ```rust
//! # use vecu_cockpit::context::Context;
//! # use vecu_cockpit::structures::variable::{declaration_by_name, VariableKind};
//! let mut the_context = Context::default();
//! the_context.initialise();
//!
//! let confirm = declaration_by_name("In_UserConfirmAirbagState").unwrap();
//! let confirmed = declaration_by_name("Out_UserConfirmAirbagState_se").unwrap();
//! assert_eq!(confirm.kind, VariableKind::Integer);
//!
//! assert!(the_context.set_integers(&[confirm.reference], &[2]).is_ok());
//! assert_eq!(the_context.get_integer(confirmed.reference), Ok(2));
//! ```
//!
//! # Logging
//!
//! Calls to the [log] macros are made throughout the library, with targets listed in [misc::log::targets].
//! No log implementation is provided.

pub mod config;
pub mod context;
pub mod db;
pub mod fmi;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
