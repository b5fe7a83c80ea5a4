use crate::context::ContextState;

/// A configuration option, bounded by a minimum and maximum value.
///
/// An option may be changed so long as the state of the context is no later than `max_state`.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub max_state: ContextState,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Whether the option may be changed in `state`.
    pub fn open_in(&self, state: ContextState) -> bool {
        state <= self.max_state
    }
}
