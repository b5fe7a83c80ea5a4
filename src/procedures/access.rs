/*!
The access surface --- the only entry point an orchestrator uses to drive inputs and observe outputs.

# Reads

Reads are by reference, for a single variable or a batch of variables.
As every accepted write is followed by an update, a read always reflects the update rule applied to the most recent inputs.

# Writes

Writes are made in batches of (reference, value) pairs, given as a slice of references and a slice of values.
After the values of a batch are written the [update rule](crate::procedures::update) is applied once.

If some reference of a batch is unknown the batch is rejected.
How much of a rejected batch is applied depends on the [BatchApplication] of the context:
- [AllOrNothing](BatchApplication::AllOrNothing) checks every reference before any write, and so nothing is applied.
- [FailFast](BatchApplication::FailFast) writes until the unknown reference, and then applies the update rule if anything was written.

A batch whose slices differ in length is rejected before anything is written, regardless of the policy.

Writes to outputs are accepted, though as the update rule follows every batch a written output is immediately overwritten.
Such writes are noted in the [counters](crate::context::Counters).

# Example

```rust
# use vecu_cockpit::context::Context;
# use vecu_cockpit::structures::variable::references::integer;
let mut the_context = Context::default();
the_context.initialise();

let warning = integer::IN_PASSENGER_AIRBAG_WARNING_STATE;
assert!(the_context.set_integers(&[warning, 9], &[5, 5]).is_err());
assert_eq!(the_context.get_integer(warning), Ok(0));

assert!(the_context.set_integers(&[warning], &[5]).is_ok());
assert_eq!(
    the_context.get_integers(&[integer::OUT_PASSENGER_AIRBAG_WARNING_STATE]),
    Ok(vec![5])
);
```
*/

use crate::{
    config::BatchApplication,
    context::Context,
    db::variable::VariableDB,
    misc::log::targets::{self},
    structures::variable::{
        declaration_of, Boolean, Causality, Integer, ValueReference, VariableKind,
    },
    types::err::{AccessError, ErrorKind, VariableDBError},
};

impl Context {
    /// The current value of the integer with the given reference.
    pub fn get_integer(&self, reference: ValueReference) -> Result<Integer, ErrorKind> {
        self.ensure_ready()?;
        Ok(self.variable_db.read_integer(reference)?)
    }

    /// The current value of the boolean with the given reference.
    pub fn get_boolean(&self, reference: ValueReference) -> Result<Boolean, ErrorKind> {
        self.ensure_ready()?;
        Ok(self.variable_db.read_boolean(reference)?)
    }

    /// The current values of the integers with the given references, in order.
    pub fn get_integers(&self, references: &[ValueReference]) -> Result<Vec<Integer>, ErrorKind> {
        self.ensure_ready()?;
        references
            .iter()
            .map(|reference| self.variable_db.read_integer(*reference).map_err(ErrorKind::from))
            .collect()
    }

    /// The current values of the booleans with the given references, in order.
    pub fn get_booleans(&self, references: &[ValueReference]) -> Result<Vec<Boolean>, ErrorKind> {
        self.ensure_ready()?;
        references
            .iter()
            .map(|reference| self.variable_db.read_boolean(*reference).map_err(ErrorKind::from))
            .collect()
    }

    /// Writes `values[i]` to the integer `references[i]`, for each i, and then updates outputs.
    pub fn set_integers(
        &mut self,
        references: &[ValueReference],
        values: &[Integer],
    ) -> Result<(), ErrorKind> {
        self.apply_batch(
            VariableKind::Integer,
            references,
            values,
            VariableDB::check_integer,
            VariableDB::write_integer,
        )
    }

    /// Writes `values[i]` to the boolean `references[i]`, for each i, and then updates outputs.
    pub fn set_booleans(
        &mut self,
        references: &[ValueReference],
        values: &[Boolean],
    ) -> Result<(), ErrorKind> {
        self.apply_batch(
            VariableKind::Boolean,
            references,
            values,
            VariableDB::check_boolean,
            VariableDB::write_boolean,
        )
    }

    fn apply_batch<T: Copy>(
        &mut self,
        kind: VariableKind,
        references: &[ValueReference],
        values: &[T],
        check: fn(&VariableDB, ValueReference) -> Result<(), VariableDBError>,
        write: fn(&mut VariableDB, ValueReference, T) -> Result<(), VariableDBError>,
    ) -> Result<(), ErrorKind> {
        self.ensure_ready()?;

        if references.len() != values.len() {
            log::warn!(target: targets::ACCESS, "{kind} batch of {} references and {} values", references.len(), values.len());
            self.counters.rejected_batches += 1;
            return Err(AccessError::LengthMismatch {
                references: references.len(),
                values: values.len(),
            }
            .into());
        }

        match self.config.batch_application.value {
            BatchApplication::AllOrNothing => {
                if let Some(e) = references
                    .iter()
                    .find_map(|reference| check(&self.variable_db, *reference).err())
                {
                    log::warn!(target: targets::ACCESS, "Rejected {kind} batch: {e:?}");
                    self.counters.rejected_batches += 1;
                    return Err(e.into());
                }

                for (reference, value) in references.iter().zip(values) {
                    write(&mut self.variable_db, *reference, *value)?;
                    self.note_forced_output(kind, *reference);
                }
            }

            BatchApplication::FailFast => {
                for (index, (reference, value)) in references.iter().zip(values).enumerate() {
                    if let Err(e) = write(&mut self.variable_db, *reference, *value) {
                        log::warn!(target: targets::ACCESS, "Rejected {kind} batch after {index} writes: {e:?}");
                        if index > 0 {
                            self.update_outputs();
                        }
                        self.counters.rejected_batches += 1;
                        return Err(e.into());
                    }
                    self.note_forced_output(kind, *reference);
                }
            }
        }

        self.update_outputs();
        self.counters.accepted_batches += 1;
        Ok(())
    }

    /// Counts a write to an output, which the update following the batch overwrites.
    fn note_forced_output(&mut self, kind: VariableKind, reference: ValueReference) {
        if let Ok(Causality::Output) = self.variable_db.causality_of(kind, reference) {
            self.counters.forced_outputs += 1;

            let name = declaration_of(kind, reference).map_or("?", |declaration| declaration.name);
            log::debug!(target: targets::ACCESS, "Write to output {name} is overwritten by the update");
        }
    }
}
