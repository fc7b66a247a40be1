use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::{Receiver, Sender};
use log::{debug, error, warn};
use tokio_util::sync::CancellationToken;

use crate::updater::Update;
use crate::{
    Command, CommandSnapshot, Compute, Error, LatestOnlyUpdater, State, TaskHandle, TaskId,
    Updater,
};

struct CommandEntry {
    command: Box<dyn Command>,
    name: &'static str,
    generation: Arc<AtomicU64>,
    current: Option<TaskHandle>,
}

/// Single-threaded owner of every state, compute and command.
///
/// Frame loop contract:
/// 1. `sync_computes()` applies updates published by finished or running commands.
/// 2. UI reads states/computes and enqueues commands.
/// 3. `flush_commands()` snapshots the context and spawns the queued commands.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, CommandEntry>,
    queue: Vec<TypeId>,

    send: Sender<Update>,
    recv: Receiver<Update>,

    #[cfg(not(target_arch = "wasm32"))]
    tasks: tokio::task::JoinSet<()>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue: Vec::new(),
            send,
            recv,
            #[cfg(not(target_arch = "wasm32"))]
            tasks: tokio::task::JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(
            TypeId::of::<C>(),
            CommandEntry {
                command: Box::new(command),
                name: type_name::<C>(),
                generation: Arc::new(AtomicU64::new(0)),
                current: None,
            },
        );
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found::<T>("StateCtx::state"))
    }

    /// # Panics
    /// Panics if `T` was never added with `add_state`.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    /// Panics if `T` was never added with `add_state`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", Error::state_not_found::<T>("StateCtx::state_mut")))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Latest applied value of a compute, `None` when it was never recorded.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never recorded with `record_compute`.
    pub fn compute<T: Compute>(&self) -> &T {
        self.cached::<T>()
            .unwrap_or_else(|| panic!("{}", Error::compute_not_found::<T>("StateCtx::compute")))
    }

    /// Unfenced updater, for seeding computes outside of a command.
    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Number of dispatches of `C` so far.
    pub fn generation<C: Command>(&self) -> u64 {
        self.commands
            .get(&TypeId::of::<C>())
            .map_or(0, |entry| entry.generation.load(Ordering::Acquire))
    }

    /// Queue `C` to run on the next `flush_commands`.
    pub fn enqueue_command<C: Command>(&mut self) {
        self.queue.push(TypeId::of::<C>());
    }

    /// Queue and immediately flush `C`.
    pub fn dispatch<C: Command>(&mut self) {
        if !self.commands.contains_key(&TypeId::of::<C>()) {
            warn!("{}", Error::command_not_found::<C>());
            return;
        }
        self.enqueue_command::<C>();
        self.flush_commands();
    }

    pub fn flush_commands(&mut self) {
        let queued = std::mem::take(&mut self.queue);
        for id in queued {
            self.spawn_command(id);
        }
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.clone_boxed() {
                snap.insert_state(*id, value);
            }
        }
        for (id, compute) in &self.computes {
            if let Some(value) = compute.clone_boxed() {
                snap.insert_compute(*id, value);
            }
        }
        snap
    }

    fn spawn_command(&mut self, id: TypeId) {
        let snap = self.snapshot();
        let updater = self.updater();

        let Some(entry) = self.commands.get_mut(&id) else {
            warn!("Skipping queued command {id:?}: not recorded");
            return;
        };

        let generation = entry.generation.fetch_add(1, Ordering::AcqRel) + 1;
        if let Some(previous) = entry.current.take() {
            debug!(
                "Cancelling {} generation {} in favour of {generation}",
                entry.name,
                previous.id().generation()
            );
            previous.cancel();
        }

        let token = CancellationToken::new();
        entry.current = Some(TaskHandle::new(TaskId::new(id, generation), token.clone()));

        let updater = LatestOnlyUpdater::new(
            updater,
            id,
            entry.name,
            generation,
            Arc::clone(&entry.generation),
        );
        let future = entry.command.run(snap, updater, token);

        #[cfg(not(target_arch = "wasm32"))]
        self.tasks.spawn(future);

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(future);
    }

    /// Apply every pending update. Fenced updates from superseded runs are dropped.
    pub fn sync_computes(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        while let Some(result) = self.tasks.try_join_next() {
            if let Err(err) = result
                && err.is_panic()
            {
                error!("Command task panicked: {err}");
            }
        }

        while let Ok(update) = self.recv.try_recv() {
            self.apply(update);
        }
    }

    fn apply(&mut self, update: Update) {
        if let Some((command, generation)) = update.fence {
            let current = self
                .commands
                .get(&command)
                .map(|entry| entry.generation.load(Ordering::Acquire));
            if current != Some(generation) {
                debug!("Discarding update from superseded generation {generation}");
                return;
            }
        }

        match self.computes.get_mut(&update.compute) {
            Some(compute) => compute.assign_box(update.value),
            None => warn!("Received update for unrecorded compute {:?}", update.compute),
        }
    }

    /// Tasks spawned and not yet joined.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_set_mut(&mut self) -> &mut tokio::task::JoinSet<()> {
        &mut self.tasks
    }

    /// Cancel every command run and wait for spawned tasks to finish.
    pub async fn shutdown(&mut self) {
        for entry in self.commands.values_mut() {
            if let Some(handle) = entry.current.take() {
                handle.cancel();
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        self.tasks.shutdown().await;
    }
}
