/*!
Configuration of a context.

All configuration for a context is contained within a [Config], owned by the context.

Options which may be changed after a context is created are [ConfigOption]s, and note the latest [state](crate::context::ContextState) in which a change is permitted.
*/

mod batch_application;
pub use batch_application::BatchApplication;

mod config_option;
pub use config_option::ConfigOption;

mod start_values;
pub use start_values::StartValues;

use crate::context::ContextState;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// A name for the instance, used when reporting to a host.
    pub instance_name: String,

    /// How to apply a batch of writes containing some unknown reference.
    ///
    /// Fixed once the context is initialised.
    pub batch_application: ConfigOption<BatchApplication>,

    /// Forward messages to the logger of a host, if one is present.
    pub logging_on: ConfigOption<bool>,

    /// Values given to each input on initialisation.
    pub start_values: StartValues,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            instance_name: String::from("cockpit"),

            batch_application: ConfigOption {
                name: "batch_application",
                min: BatchApplication::MIN,
                max: BatchApplication::MAX,
                max_state: ContextState::Uninitialized,
                value: BatchApplication::AllOrNothing,
            },

            logging_on: ConfigOption {
                name: "logging_on",
                min: false,
                max: true,
                max_state: ContextState::Ready,
                value: false,
            },

            start_values: StartValues::default(),
        }
    }
}
