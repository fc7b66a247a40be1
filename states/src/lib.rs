//! Frame-synchronous state context used by the roster UI.
//!
//! `State` values are owned and mutated by the UI thread, `Compute` values are
//! caches published by `Command`s through an `Updater`, and each command run
//! is fenced by a generation counter so only the latest run can publish.

mod command;
mod compute;
mod ctx;
mod error;
mod snapshot;
mod state;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, assign_impl};
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{SnapshotClone, State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use updater::{LatestOnlyUpdater, Updater};
