use crate::structures::variable::Causality;

/// A tagged slot of the variable database.
///
/// The causality of a slot is fixed when the database is built, while the value is freely overwritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot<T: Copy> {
    causality: Causality,
    value: T,
}

impl<T: Copy> Slot<T> {
    pub const fn new(causality: Causality, value: T) -> Self {
        Slot { causality, value }
    }

    pub fn causality(&self) -> Causality {
        self.causality
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value
    }
}
