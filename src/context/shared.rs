/*!
A context shared between threads.

Every method takes the lock of the context once, and holds it for the whole of the call.
So, the writes of a batch and the update which follows are observed together, or not at all.

```rust
# use vecu_cockpit::context::{Context, SharedContext};
# use vecu_cockpit::structures::variable::references::integer;
let shared = SharedContext::new(Context::default());
assert!(shared.initialise().is_ok());

let writer = shared.clone();
std::thread::spawn(move || {
    writer.set_integers(&[integer::IN_PASSENGER_AIRBAG_WARNING_STATE], &[3])
})
.join()
.unwrap()
.unwrap();

assert_eq!(shared.get_integer(integer::OUT_PASSENGER_AIRBAG_WARNING_STATE), Ok(3));
```
*/

use std::sync::{Arc, Mutex};

use crate::{
    reports::EventInfo,
    structures::variable::{Boolean, Integer, ValueReference},
    types::err::{ErrorKind, StateError},
};

use super::Context;

/// A handle to a context guarded by a single lock.
///
/// Clones of a handle refer to the same context.
#[derive(Clone, Debug)]
pub struct SharedContext {
    inner: Arc<Mutex<Context>>,
}

impl SharedContext {
    pub fn new(context: Context) -> Self {
        SharedContext {
            inner: Arc::new(Mutex::new(context)),
        }
    }

    /// Applies `f` to the context while holding the lock.
    pub fn with<T>(&self, f: impl FnOnce(&mut Context) -> T) -> Result<T, ErrorKind> {
        let mut guard = self.inner.lock().map_err(|_| StateError::Poisoned)?;
        Ok(f(&mut guard))
    }

    pub fn initialise(&self) -> Result<(), ErrorKind> {
        self.with(|context| context.initialise())
    }

    pub fn get_integer(&self, reference: ValueReference) -> Result<Integer, ErrorKind> {
        self.with(|context| context.get_integer(reference))?
    }

    pub fn get_boolean(&self, reference: ValueReference) -> Result<Boolean, ErrorKind> {
        self.with(|context| context.get_boolean(reference))?
    }

    pub fn get_integers(&self, references: &[ValueReference]) -> Result<Vec<Integer>, ErrorKind> {
        self.with(|context| context.get_integers(references))?
    }

    pub fn get_booleans(&self, references: &[ValueReference]) -> Result<Vec<Boolean>, ErrorKind> {
        self.with(|context| context.get_booleans(references))?
    }

    pub fn set_integers(
        &self,
        references: &[ValueReference],
        values: &[Integer],
    ) -> Result<(), ErrorKind> {
        self.with(|context| context.set_integers(references, values))?
    }

    pub fn set_booleans(
        &self,
        references: &[ValueReference],
        values: &[Boolean],
    ) -> Result<(), ErrorKind> {
        self.with(|context| context.set_booleans(references, values))?
    }

    pub fn do_step(&self, communication_point: f64, step_size: f64) -> Result<(), ErrorKind> {
        self.with(|context| context.do_step(communication_point, step_size))?
    }

    pub fn event_info(&self) -> Result<EventInfo, ErrorKind> {
        self.with(|context| context.event_info())?
    }
}
