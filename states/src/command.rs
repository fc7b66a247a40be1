use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Manual-only side effect (network IO, timers).
///
/// Commands are recorded once with `StateCtx::record_command` and executed
/// only when explicitly dispatched. `run` is called on the UI thread and must
/// copy everything it needs out of `snap` before returning the future.
pub trait Command: Any {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
