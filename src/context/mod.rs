/*!
The context --- which holds the variables of a unit and through which the unit is driven.

Strictly, a [Context] and a [SharedContext].

A context is created from a [Config], and is [uninitialised](ContextState::Uninitialized) until [initialise](Context::initialise) is called.
After initialisation all [access](crate::procedures::access) is valid, and the context remains [ready](ContextState::Ready).

Each context is independent of every other context, and no state is shared between instances.

# Example
```rust
# use vecu_cockpit::config::Config;
# use vecu_cockpit::context::Context;
# use vecu_cockpit::structures::variable::references::boolean;
let mut the_context = Context::from_config(Config::default());
the_context.initialise();

let requests = [
    boolean::IN_PASSENGER_AIRBAG_DISABLE_LAMP,
    boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP,
];
assert!(the_context.set_booleans(&requests, &[true, false]).is_ok());

assert_eq!(
    the_context.get_boolean(boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP),
    Ok(true)
);
```
*/

mod counters;
pub use counters::Counters;

mod shared;
pub use shared::SharedContext;

use crate::{
    config::{BatchApplication, Config},
    db::variable::VariableDB,
    misc::log::targets::{self},
    types::err::{ErrorKind, StateError},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContextState {
    /// The context has been created, though start values have not been set.
    /// No access is valid.
    Uninitialized,

    /// Start values have been set, and all access is valid.
    Ready,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::Ready => write!(f, "Ready"),
        }
    }
}

/// A context.
#[derive(Clone, Debug)]
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context.
    pub counters: Counters,

    /// The variable database.
    /// See [db::variable](crate::db::variable) for details.
    pub variable_db: VariableDB,

    /// The status of the context.
    pub state: ContextState,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            variable_db: VariableDB::default(),
            state: ContextState::Uninitialized,
        }
    }

    /// Ok if the context is ready for access.
    pub fn ensure_ready(&self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Ready => Ok(()),
            ContextState::Uninitialized => {
                log::warn!(target: targets::ACCESS, "Access to uninitialised instance {}", self.config.instance_name);
                Err(StateError::UninitializedAccess.into())
            }
        }
    }

    /// Sets how batches containing some unknown reference are applied.
    ///
    /// The policy may only be set before the context is initialised.
    pub fn set_batch_application(&mut self, value: BatchApplication) -> Result<(), ErrorKind> {
        if !self.config.batch_application.open_in(self.state) {
            return Err(StateError::ConfigurationClosed.into());
        }
        self.config.batch_application.value = value;
        Ok(())
    }

    /// Sets whether messages are forwarded to the logger of a host.
    pub fn set_logging(&mut self, on: bool) -> Result<(), ErrorKind> {
        if !self.config.logging_on.open_in(self.state) {
            return Err(StateError::ConfigurationClosed.into());
        }
        self.config.logging_on.value = on;
        Ok(())
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
