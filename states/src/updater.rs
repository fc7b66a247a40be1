use std::any::{Any, TypeId};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::Sender;
use log::{debug, warn};

use crate::Compute;

/// A compute value sent from a command back to the UI thread.
pub struct Update {
    pub(crate) compute: TypeId,
    pub(crate) value: Box<dyn Any + Send>,
    /// Command type and generation that produced this update, if fenced.
    pub(crate) fence: Option<(TypeId, u64)>,
}

/// Publishes compute values to `StateCtx`.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    pub fn set<T: Compute + Send>(&self, value: T) {
        self.send_update(Update {
            compute: TypeId::of::<T>(),
            value: Box::new(value),
            fence: None,
        });
    }

    fn send_update(&self, update: Update) {
        if self.send.send(update).is_err() {
            warn!("StateCtx dropped before update could be delivered");
        }
    }
}

/// Updater handed to a command run that only delivers while the run is the
/// newest one for its command type.
///
/// Each flush bumps the command's generation. Once a newer run exists, `set`
/// drops values from older runs, and `StateCtx::sync_computes` re-checks the
/// generation for values that were already queued.
#[derive(Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    command: TypeId,
    command_name: &'static str,
    generation: u64,
    current: Arc<AtomicU64>,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(
        inner: Updater,
        command: TypeId,
        command_name: &'static str,
        generation: u64,
        current: Arc<AtomicU64>,
    ) -> Self {
        Self {
            inner,
            command,
            command_name,
            generation,
            current,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.generation
    }

    pub fn set<T: Compute + Send>(&self, value: T) {
        if !self.is_current() {
            debug!(
                "Dropping stale update from {} generation {}",
                self.command_name, self.generation
            );
            return;
        }
        self.inner.send_update(Update {
            compute: TypeId::of::<T>(),
            value: Box::new(value),
            fence: Some((self.command, self.generation)),
        });
    }
}
