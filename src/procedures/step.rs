/*!
Steps and event queries.

The unit is combinational, and has no continuous states, discrete states, or event indicators.
So, a step is accepted though has no effect on any variable, and an event query always reports that nothing changed and no event is due.

```rust
# use vecu_cockpit::context::Context;
# use vecu_cockpit::reports::EventInfo;
let mut the_context = Context::default();
the_context.initialise();

let before = the_context.variable_db.clone();
assert!(the_context.do_step(0.0, 0.01).is_ok());
assert_eq!(the_context.variable_db, before);

assert_eq!(the_context.event_info(), Ok(EventInfo::default()));
```
*/

use crate::{context::Context, misc::log::targets::{self}, reports::EventInfo, types::err::ErrorKind};

impl Context {
    /// Advances the unit from `communication_point` by `step_size`.
    ///
    /// No variable changes, though the step is noted in the [counters](crate::context::Counters).
    pub fn do_step(&mut self, communication_point: f64, step_size: f64) -> Result<(), ErrorKind> {
        self.ensure_ready()?;

        self.counters.steps += 1;
        self.counters.communication_point = communication_point + step_size;

        log::trace!(target: targets::LIFECYCLE, "Step {} to {}", self.counters.steps, self.counters.communication_point);
        Ok(())
    }

    /// Information on events, which is always that nothing has changed and no event is due.
    pub fn event_info(&self) -> Result<EventInfo, ErrorKind> {
        self.ensure_ready()?;
        Ok(EventInfo::default())
    }

    /// Whether the unit requests the simulation terminates, which it never does.
    pub fn terminate_requested(&self) -> bool {
        false
    }
}
