//! Domain layer of the roster page: the people table with its live filter and
//! sorter, and the profile panel fed by `/profile/{kind}/{id}`.
//!
//! Everything here is UI-agnostic. The front end owns a [`StateCtx`] built by
//! [`build_state_ctx`], mutates [`PeopleTableState`] directly and opens
//! profiles through [`open_profile`].

mod config;
pub mod http;
pub mod profile;
pub mod table;

#[cfg(test)]
mod test_utils;

use roster_states::StateCtx;

pub use config::{BusinessConfig, ControlsConfig, DEFAULT_NATIVE_BASE_URL, RosterSettings};
pub use profile::{
    EntityKind, OpenProfileCommand, PanelItem, PanelPhase, PanelRequestContext, PanelSlot,
    PanelTarget, PanelView, ProfileError, ProfilePanelCompute, ProfilePanelInput, close_profile,
    open_profile,
};
pub use table::{PeopleTableState, Row, RowTrigger, SearchBox, SortKey, TableSeed};

/// Context with every state, compute and command the page uses.
pub fn build_state_ctx(config: BusinessConfig, table: PeopleTableState) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(config);
    ctx.add_state(table);

    ctx.add_state(ProfilePanelInput::default());
    ctx.record_compute(ProfilePanelCompute::default());
    ctx.record_command(OpenProfileCommand);

    ctx
}
