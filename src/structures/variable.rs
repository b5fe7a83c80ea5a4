/*!
The declared variables of the model.

Each variable has:
- A [kind](VariableKind), either integer or boolean.
- A [causality](Causality), either input or output.
- A [value reference](ValueReference), unique among variables of the same kind.
- A name, as used by an orchestrator to look up references, e.g. `In_PassengerAirbagEnableLamp_bo`.

The declarations are fixed, and so are given as a static table [MODEL_VARIABLES].

References of integers and booleans are numbered independently.
For each kind, inputs occupy the low references and outputs the references above them.

```rust
# use vecu_cockpit::structures::variable::{declaration_by_name, references, Causality, VariableKind};
let enable = declaration_by_name("In_PassengerAirbagEnableLamp_bo").unwrap();

assert_eq!(enable.kind, VariableKind::Boolean);
assert_eq!(enable.causality, Causality::Input);
assert_eq!(enable.reference, references::boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP);
```
*/

/// A value reference, aka. a 'variable identifier'.
pub type ValueReference = u32;

/// The value of an integer variable.
pub type Integer = i32;

/// The value of a boolean variable.
pub type Boolean = bool;

/// The count of declared integer variables.
pub const INTEGER_COUNT: usize = 4;

/// The count of declared boolean variables.
pub const BOOLEAN_COUNT: usize = 3;

/// The count of declared real variables.
pub const REAL_COUNT: usize = 0;

/// The count of declared string variables.
pub const STRING_COUNT: usize = 0;

/// The type of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Integer,
    Boolean,
}

impl std::fmt::Display for VariableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "Integer"),
            Self::Boolean => write!(f, "Boolean"),
        }
    }
}

/// Whether a variable is supplied by the orchestrator or produced by the unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Causality {
    Input,
    Output,
}

impl std::fmt::Display for Causality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// Value references of the declared variables, by kind.
pub mod references {
    pub mod integer {
        use crate::structures::variable::ValueReference;

        /// User confirmation of the airbag state.
        pub const IN_USER_CONFIRM_AIRBAG_STATE: ValueReference = 0;

        /// Passenger airbag warning state.
        pub const IN_PASSENGER_AIRBAG_WARNING_STATE: ValueReference = 1;

        /// Confirmed airbag state.
        pub const OUT_USER_CONFIRM_AIRBAG_STATE: ValueReference = 2;

        /// Forwarded passenger airbag warning state.
        pub const OUT_PASSENGER_AIRBAG_WARNING_STATE: ValueReference = 3;
    }

    pub mod boolean {
        use crate::structures::variable::ValueReference;

        /// Request to light the passenger airbag disable lamp.
        pub const IN_PASSENGER_AIRBAG_DISABLE_LAMP: ValueReference = 0;

        /// Request to light the passenger airbag enable lamp.
        pub const IN_PASSENGER_AIRBAG_ENABLE_LAMP: ValueReference = 1;

        /// Effective passenger airbag disable lamp.
        pub const OUT_PASSENGER_AIRBAG_DISABLE_LAMP: ValueReference = 2;
    }
}

/// The declaration of a model variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: VariableKind,
    pub causality: Causality,
    pub reference: ValueReference,
}

/// Every variable of the model, inputs first.
pub static MODEL_VARIABLES: [Declaration; INTEGER_COUNT + BOOLEAN_COUNT] = [
    Declaration {
        name: "In_UserConfirmAirbagState",
        description: "User confirmation of airbag state",
        kind: VariableKind::Integer,
        causality: Causality::Input,
        reference: references::integer::IN_USER_CONFIRM_AIRBAG_STATE,
    },
    Declaration {
        name: "In_PassengerAirbagDisableLamp_bo",
        description: "Disable lamp input",
        kind: VariableKind::Boolean,
        causality: Causality::Input,
        reference: references::boolean::IN_PASSENGER_AIRBAG_DISABLE_LAMP,
    },
    Declaration {
        name: "In_PassengerAirbagEnableLamp_bo",
        description: "Enable lamp input",
        kind: VariableKind::Boolean,
        causality: Causality::Input,
        reference: references::boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP,
    },
    Declaration {
        name: "In_PassengerAirbagWarningState_se",
        description: "Warning state input",
        kind: VariableKind::Integer,
        causality: Causality::Input,
        reference: references::integer::IN_PASSENGER_AIRBAG_WARNING_STATE,
    },
    Declaration {
        name: "Out_UserConfirmAirbagState_se",
        description: "Confirmed airbag state",
        kind: VariableKind::Integer,
        causality: Causality::Output,
        reference: references::integer::OUT_USER_CONFIRM_AIRBAG_STATE,
    },
    Declaration {
        name: "Out_PassengerAirbagWarningState_se",
        description: "Warning state output",
        kind: VariableKind::Integer,
        causality: Causality::Output,
        reference: references::integer::OUT_PASSENGER_AIRBAG_WARNING_STATE,
    },
    Declaration {
        name: "Out_PassengerAirbagDisableLamp_bo",
        description: "Disable lamp output",
        kind: VariableKind::Boolean,
        causality: Causality::Output,
        reference: references::boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP,
    },
];

/// The declaration of the variable with the given name, if one exists.
pub fn declaration_by_name(name: &str) -> Option<&'static Declaration> {
    MODEL_VARIABLES.iter().find(|declaration| declaration.name == name)
}

/// The declaration of the variable of the given kind with the given reference, if one exists.
pub fn declaration_of(kind: VariableKind, reference: ValueReference) -> Option<&'static Declaration> {
    MODEL_VARIABLES
        .iter()
        .find(|declaration| declaration.kind == kind && declaration.reference == reference)
}
