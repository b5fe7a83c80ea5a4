/*!
Initialisation of a context.

Initialisation writes the configured [start values](crate::config::StartValues) to the inputs and then applies the [update rule](crate::procedures::update), so outputs are consistent with inputs from the first read.

With the default start values both lamp requests are made, and so the effective disable lamp is unlit:

```rust
# use vecu_cockpit::context::{Context, ContextState};
# use vecu_cockpit::structures::variable::references::{boolean, integer};
let mut the_context = Context::default();
assert_eq!(the_context.state, ContextState::Uninitialized);

the_context.initialise();
assert_eq!(the_context.state, ContextState::Ready);

assert_eq!(the_context.get_integer(integer::OUT_USER_CONFIRM_AIRBAG_STATE), Ok(0));
assert_eq!(the_context.get_integer(integer::OUT_PASSENGER_AIRBAG_WARNING_STATE), Ok(0));
assert_eq!(the_context.get_boolean(boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP), Ok(true));
assert_eq!(the_context.get_boolean(boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP), Ok(false));
```
*/

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    procedures::update::Inputs,
};

impl Context {
    /// Sets start values and readies the context for access.
    ///
    /// Initialising a ready context restores start values.
    pub fn initialise(&mut self) {
        let start = Inputs::from(self.config.start_values);
        self.variable_db.write_inputs(&start);
        self.update_outputs();

        log::info!(target: targets::LIFECYCLE, "{} {} -> {}", self.config.instance_name, self.state, ContextState::Ready);
        self.state = ContextState::Ready;
    }

    /// Restores start values, as though the context had just been initialised.
    ///
    /// Counters are kept.
    pub fn reset(&mut self) {
        log::debug!(target: targets::LIFECYCLE, "Reset {}", self.config.instance_name);
        self.initialise();
    }
}
