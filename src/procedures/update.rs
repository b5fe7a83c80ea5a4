/*!
The update rule --- which derives every output from the current inputs.

The rule is combinational:
- The confirmed state is the user confirmation, as given.
- The forwarded warning state is the warning state, as given.
- The effective disable lamp is lit when disabling is requested and enabling is not.

In other words, a request to disable wins unless a request to enable is made at the same time.

```rust
# use vecu_cockpit::procedures::update::{derive_outputs, Inputs};
let inputs = Inputs {
    user_confirm_airbag_state: 1,
    passenger_airbag_warning_state: 2,
    passenger_airbag_disable_lamp: true,
    passenger_airbag_enable_lamp: true,
};

let outputs = derive_outputs(&inputs);
assert_eq!(outputs.user_confirm_airbag_state, 1);
assert_eq!(outputs.passenger_airbag_warning_state, 2);
assert!(!outputs.passenger_airbag_disable_lamp);
```

The rule is applied to a context through [update_outputs](Context::update_outputs).
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::variable::{Boolean, Integer},
};

/// The value of each input variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inputs {
    pub user_confirm_airbag_state: Integer,
    pub passenger_airbag_warning_state: Integer,
    pub passenger_airbag_disable_lamp: Boolean,
    pub passenger_airbag_enable_lamp: Boolean,
}

/// The value of each output variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outputs {
    pub user_confirm_airbag_state: Integer,
    pub passenger_airbag_warning_state: Integer,
    pub passenger_airbag_disable_lamp: Boolean,
}

/// The outputs of the unit, given `inputs`.
pub fn derive_outputs(inputs: &Inputs) -> Outputs {
    Outputs {
        user_confirm_airbag_state: inputs.user_confirm_airbag_state,
        passenger_airbag_warning_state: inputs.passenger_airbag_warning_state,
        passenger_airbag_disable_lamp: inputs.passenger_airbag_disable_lamp
            && !inputs.passenger_airbag_enable_lamp,
    }
}

impl Context {
    /// Overwrites every output with the value derived from the current inputs.
    pub fn update_outputs(&mut self) {
        let previous = self.variable_db.outputs();
        let outputs = derive_outputs(&self.variable_db.inputs());
        self.variable_db.write_outputs(&outputs);
        self.counters.updates += 1;

        if previous != outputs {
            log::trace!(target: targets::UPDATE, "Outputs: {previous:?} -> {outputs:?}");
        }
    }
}
