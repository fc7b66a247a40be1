use roster_business::{BusinessConfig, ControlsConfig, PeopleTableState, TableSeed, build_state_ctx};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            BusinessConfig::default(),
            TableSeed::default(),
            ControlsConfig::default(),
        )
    }
}

impl State {
    pub fn new(config: BusinessConfig, seed: TableSeed, controls: ControlsConfig) -> Self {
        let table = PeopleTableState::new(seed, controls);
        Self {
            ctx: build_state_ctx(config, table),
        }
    }

    pub fn test(base_url: String, seed: TableSeed) -> Self {
        Self::new(BusinessConfig::new(base_url), seed, ControlsConfig::default())
    }
}
