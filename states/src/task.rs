//! Identity and cancellation for spawned command tasks.
//!
//! Every flush of a command produces a new `TaskId` whose generation is one
//! higher than the previous flush of the same command. The matching
//! `TaskHandle` owns the `CancellationToken` handed to `Command::run`, so the
//! context can cancel the previous run when a newer one starts.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Command type plus dispatch generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher values were dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to the most recent run of a command.
///
/// Cancellation is cooperative: the command must observe the token.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstCommand;
    struct SecondCommand;

    #[test]
    fn task_ids_differ_by_generation_and_command() {
        let first = TypeId::of::<FirstCommand>();

        let id1 = TaskId::new(first, 1);
        let id2 = TaskId::new(first, 2);
        let other = TaskId::new(TypeId::of::<SecondCommand>(), 1);

        assert_eq!(id1, TaskId::new(first, 1));
        assert_ne!(id1, id2);
        assert_ne!(id1, other);
        assert!(id2.generation() > id1.generation());
        assert_eq!(id2.type_id(), first);
    }

    #[test]
    fn cancelling_handle_cancels_every_token_clone() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<FirstCommand>(), 7),
            CancellationToken::new(),
        );
        let token = handle.cancellation_token();
        let cloned = handle.clone();

        assert!(!token.is_cancelled());
        cloned.cancel();

        assert!(handle.is_cancelled());
        assert!(token.is_cancelled());
        assert_eq!(handle.id().generation(), 7);
    }
}
