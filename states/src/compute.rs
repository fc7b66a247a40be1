use std::any::{Any, type_name};

use log::warn;

use crate::SnapshotClone;

/// Compute-shaped cache stored in `StateCtx`.
///
/// A compute is never written by UI code directly. Commands publish new values
/// through an `Updater`, and `StateCtx::sync_computes` applies them at the start
/// of the next frame.
pub trait Compute: Any + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replace `compute` with the boxed value if it has the same concrete type.
pub fn assign_impl<T: Compute>(compute: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_compute) => *compute = *new_compute,
        Err(_) => warn!("Ignoring assignment of mismatched type to {}", type_name::<T>()),
    }
}
