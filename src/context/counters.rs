/// Counts for various things which count.
///
/// Counters are diagnostic, and no value of a variable depends on a counter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Counters {
    /// A count of every application of the update rule.
    pub updates: usize,

    /// A count of batches of writes applied in full.
    pub accepted_batches: usize,

    /// A count of batches of writes rejected, in part or in full.
    pub rejected_batches: usize,

    /// A count of writes to outputs made through the access surface.
    pub forced_outputs: usize,

    /// A count of steps taken.
    pub steps: usize,

    /// The communication point reached by the most recent step.
    pub communication_point: f64,
}
