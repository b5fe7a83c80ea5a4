use std::str::FromStr;

/// Variant ways of applying a batch of writes which contains an unknown reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BatchApplication {
    /// Check every reference of a batch before writing any value.
    ///
    /// In other words, a batch with some unknown reference leaves the variable database untouched.
    AllOrNothing = 0,

    /// Write values in order, and stop at the first unknown reference.
    ///
    /// Writes before the unknown reference remain, and outputs are updated to reflect them.
    FailFast,
}

impl std::fmt::Display for BatchApplication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllOrNothing => write!(f, "AllOrNothing"),
            Self::FailFast => write!(f, "FailFast"),
        }
    }
}

impl BatchApplication {
    /// The minimum BatchApplication type.
    pub const MIN: BatchApplication = BatchApplication::AllOrNothing;

    /// The maximum BatchApplication type.
    pub const MAX: BatchApplication = BatchApplication::FailFast;
}

impl FromStr for BatchApplication {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AllOrNothing" | "all-or-nothing" => Ok(Self::AllOrNothing),

            "FailFast" | "fail-fast" => Ok(Self::FailFast),

            _ => Err(()),
        }
    }
}
