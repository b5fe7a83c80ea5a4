use crate::{
    procedures::update::Inputs,
    structures::variable::{Boolean, Integer},
};

/// Values given to each input when a context is initialised.
///
/// Outputs have no start values of their own, as on initialisation outputs are derived from the inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartValues {
    pub user_confirm_airbag_state: Integer,
    pub passenger_airbag_warning_state: Integer,
    pub passenger_airbag_disable_lamp: Boolean,
    pub passenger_airbag_enable_lamp: Boolean,
}

impl Default for StartValues {
    fn default() -> Self {
        StartValues {
            user_confirm_airbag_state: 0,
            passenger_airbag_warning_state: 0,
            passenger_airbag_disable_lamp: true,
            passenger_airbag_enable_lamp: true,
        }
    }
}

impl From<StartValues> for Inputs {
    fn from(start: StartValues) -> Self {
        Inputs {
            user_confirm_airbag_state: start.user_confirm_airbag_state,
            passenger_airbag_warning_state: start.passenger_airbag_warning_state,
            passenger_airbag_disable_lamp: start.passenger_airbag_disable_lamp,
            passenger_airbag_enable_lamp: start.passenger_airbag_enable_lamp,
        }
    }
}
