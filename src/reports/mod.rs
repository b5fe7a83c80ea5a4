/*!
Reports from a context.
*/

/// Information regarding events, in the manner of an FMI event query.
///
/// As the unit declares no states and no event indicators, the default is the only report made.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EventInfo {
    /// Whether another event iteration is required.
    pub new_discrete_states_needed: bool,

    /// Whether the unit requests the simulation terminates.
    pub terminate_simulation: bool,

    /// Whether the nominal values of continuous states changed.
    pub nominals_of_continuous_states_changed: bool,

    /// Whether the values of continuous states changed.
    pub values_of_continuous_states_changed: bool,

    /// The time of the next event, if some event is due.
    pub next_event_time: Option<f64>,
}

impl EventInfo {
    /// Whether anything is reported to have changed, or some event is due.
    pub fn is_quiet(&self) -> bool {
        !(self.new_discrete_states_needed
            || self.terminate_simulation
            || self.nominals_of_continuous_states_changed
            || self.values_of_continuous_states_changed
            || self.next_event_time.is_some())
    }
}
