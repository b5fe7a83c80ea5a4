/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to note the lifecycle of a unit, and rejected requests from an orchestrator.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [variable database](crate::db::variable)
    pub const VARIABLE_DB: &str = "variable_db";

    /// Logs related to the [update rule](crate::procedures::update)
    pub const UPDATE: &str = "update";

    /// Logs related to the [access surface](crate::procedures::access)
    pub const ACCESS: &str = "access";

    /// Logs related to initialisation, steps, and other lifecycle calls
    pub const LIFECYCLE: &str = "lifecycle";

    /// Logs related to the [FMI bindings](crate::fmi)
    pub const FMI: &str = "fmi";
}
