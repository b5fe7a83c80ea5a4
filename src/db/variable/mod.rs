/*!
A database of the values of each declared variable, accessed via methods on a [VariableDB] struct.

The database is a pair of fixed-size tables, one of integer [Slot]s and one of boolean [Slot]s.
Each table is indexed directly by [value reference](ValueReference), and so checking a reference is a single bounds check on the table of the relevant kind.

Reads and writes here are raw:
- Any value may be written to any declared variable, including an output.
- No update of outputs follows a write.

Keeping outputs consistent with inputs is the responsibility of the [access surface](crate::procedures::access).

```rust
# use vecu_cockpit::db::variable::VariableDB;
# use vecu_cockpit::structures::variable::references;
let mut db = VariableDB::default();

let warning = references::integer::IN_PASSENGER_AIRBAG_WARNING_STATE;
assert!(db.write_integer(warning, -7).is_ok());
assert_eq!(db.read_integer(warning), Ok(-7));

assert!(db.read_boolean(3).is_err());
```
*/

mod slot;
pub use slot::Slot;

use crate::{
    misc::log::targets::{self},
    procedures::update::{Inputs, Outputs},
    structures::variable::{
        references, Boolean, Causality, Integer, ValueReference, VariableKind, BOOLEAN_COUNT,
        INTEGER_COUNT,
    },
    types::err::VariableDBError,
};

/// The variable database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDB {
    /// Integer slots, indexed by reference.
    integers: [Slot<Integer>; INTEGER_COUNT],

    /// Boolean slots, indexed by reference.
    booleans: [Slot<Boolean>; BOOLEAN_COUNT],
}

impl Default for VariableDB {
    /// A database with every integer zero and every boolean false.
    fn default() -> Self {
        VariableDB {
            integers: [
                Slot::new(Causality::Input, 0),
                Slot::new(Causality::Input, 0),
                Slot::new(Causality::Output, 0),
                Slot::new(Causality::Output, 0),
            ],
            booleans: [
                Slot::new(Causality::Input, false),
                Slot::new(Causality::Input, false),
                Slot::new(Causality::Output, false),
            ],
        }
    }
}

impl VariableDB {
    /// Ok if `reference` names a declared integer, of either causality.
    pub fn check_integer(&self, reference: ValueReference) -> Result<(), VariableDBError> {
        self.integer_slot(reference).map(|_| ())
    }

    /// Ok if `reference` names a declared boolean, of either causality.
    pub fn check_boolean(&self, reference: ValueReference) -> Result<(), VariableDBError> {
        self.boolean_slot(reference).map(|_| ())
    }

    /// The causality of the variable of the given kind and reference.
    pub fn causality_of(
        &self,
        kind: VariableKind,
        reference: ValueReference,
    ) -> Result<Causality, VariableDBError> {
        match kind {
            VariableKind::Integer => self.integer_slot(reference).map(Slot::causality),
            VariableKind::Boolean => self.boolean_slot(reference).map(Slot::causality),
        }
    }

    /// The current value of the integer with the given reference.
    pub fn read_integer(&self, reference: ValueReference) -> Result<Integer, VariableDBError> {
        self.integer_slot(reference).map(Slot::value)
    }

    /// The current value of the boolean with the given reference.
    pub fn read_boolean(&self, reference: ValueReference) -> Result<Boolean, VariableDBError> {
        self.boolean_slot(reference).map(Slot::value)
    }

    /// Overwrites the value of the integer with the given reference.
    ///
    /// The value is not interpreted, so any integer is accepted.
    pub fn write_integer(
        &mut self,
        reference: ValueReference,
        value: Integer,
    ) -> Result<(), VariableDBError> {
        let slot = self.integer_slot_mut(reference)?;
        slot.set(value);
        log::trace!(target: targets::VARIABLE_DB, "Integer {reference} := {value}");
        Ok(())
    }

    /// Overwrites the value of the boolean with the given reference.
    pub fn write_boolean(
        &mut self,
        reference: ValueReference,
        value: Boolean,
    ) -> Result<(), VariableDBError> {
        let slot = self.boolean_slot_mut(reference)?;
        slot.set(value);
        log::trace!(target: targets::VARIABLE_DB, "Boolean {reference} := {value}");
        Ok(())
    }

    /// A snapshot of the current value of each input.
    pub fn inputs(&self) -> Inputs {
        Inputs {
            user_confirm_airbag_state: self.integers
                [references::integer::IN_USER_CONFIRM_AIRBAG_STATE as usize]
                .value(),
            passenger_airbag_warning_state: self.integers
                [references::integer::IN_PASSENGER_AIRBAG_WARNING_STATE as usize]
                .value(),
            passenger_airbag_disable_lamp: self.booleans
                [references::boolean::IN_PASSENGER_AIRBAG_DISABLE_LAMP as usize]
                .value(),
            passenger_airbag_enable_lamp: self.booleans
                [references::boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP as usize]
                .value(),
        }
    }

    /// The current value of each output.
    pub fn outputs(&self) -> Outputs {
        Outputs {
            user_confirm_airbag_state: self.integers
                [references::integer::OUT_USER_CONFIRM_AIRBAG_STATE as usize]
                .value(),
            passenger_airbag_warning_state: self.integers
                [references::integer::OUT_PASSENGER_AIRBAG_WARNING_STATE as usize]
                .value(),
            passenger_airbag_disable_lamp: self.booleans
                [references::boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP as usize]
                .value(),
        }
    }

    /// Writes each input of `inputs` to its slot.
    pub fn write_inputs(&mut self, inputs: &Inputs) {
        self.integers[references::integer::IN_USER_CONFIRM_AIRBAG_STATE as usize]
            .set(inputs.user_confirm_airbag_state);
        self.integers[references::integer::IN_PASSENGER_AIRBAG_WARNING_STATE as usize]
            .set(inputs.passenger_airbag_warning_state);
        self.booleans[references::boolean::IN_PASSENGER_AIRBAG_DISABLE_LAMP as usize]
            .set(inputs.passenger_airbag_disable_lamp);
        self.booleans[references::boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP as usize]
            .set(inputs.passenger_airbag_enable_lamp);
    }

    /// Writes each output of `outputs` to its slot.
    pub fn write_outputs(&mut self, outputs: &Outputs) {
        self.integers[references::integer::OUT_USER_CONFIRM_AIRBAG_STATE as usize]
            .set(outputs.user_confirm_airbag_state);
        self.integers[references::integer::OUT_PASSENGER_AIRBAG_WARNING_STATE as usize]
            .set(outputs.passenger_airbag_warning_state);
        self.booleans[references::boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP as usize]
            .set(outputs.passenger_airbag_disable_lamp);
    }

    fn integer_slot(&self, reference: ValueReference) -> Result<&Slot<Integer>, VariableDBError> {
        self.integers
            .get(reference as usize)
            .ok_or(VariableDBError::InvalidIdentifier(VariableKind::Integer, reference))
    }

    fn integer_slot_mut(
        &mut self,
        reference: ValueReference,
    ) -> Result<&mut Slot<Integer>, VariableDBError> {
        self.integers
            .get_mut(reference as usize)
            .ok_or(VariableDBError::InvalidIdentifier(VariableKind::Integer, reference))
    }

    fn boolean_slot(&self, reference: ValueReference) -> Result<&Slot<Boolean>, VariableDBError> {
        self.booleans
            .get(reference as usize)
            .ok_or(VariableDBError::InvalidIdentifier(VariableKind::Boolean, reference))
    }

    fn boolean_slot_mut(
        &mut self,
        reference: ValueReference,
    ) -> Result<&mut Slot<Boolean>, VariableDBError> {
        self.booleans
            .get_mut(reference as usize)
            .ok_or(VariableDBError::InvalidIdentifier(VariableKind::Boolean, reference))
    }
}
