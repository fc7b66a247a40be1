use std::any::{Any, type_name};

use log::warn;

/// Produces a `Send` copy of a value for command snapshots.
///
/// Commands run off the UI borrow, so anything they read must be cloned into
/// the snapshot up front. Types that never need to be read by a command can
/// keep the default, which leaves them out of the snapshot.
pub trait SnapshotClone {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// UI-owned value stored in `StateCtx`.
///
/// States are mutated synchronously on the UI thread via `StateCtx::update` or
/// `StateCtx::state_mut`.
pub trait State: Any + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replace `state` with the boxed value if it has the same concrete type.
pub fn state_assign_impl<T: State>(state: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_state) => *state = *new_state,
        Err(_) => warn!("Ignoring assignment of mismatched type to {}", type_name::<T>()),
    }
}
