//! On-demand profile panel for students and lecturers.

mod api;
mod kind;
mod panel;
mod record;
mod render;
mod slots;

pub use api::{ProfileError, fetch_profile};
pub use kind::{EntityKind, PanelRequestContext};
pub use panel::{
    OpenProfileCommand, PanelPhase, ProfilePanelCompute, ProfilePanelInput, close_profile,
    open_profile,
};
pub use record::{
    CommonFields, FieldText, MiniTask, Profile, ProfileKind, RawProfile, ScheduleEntry,
    StudentFields, UsageEntry,
};
pub use render::{
    RECORD_LINK_LABEL, mini_task_item, record_link_path, render_profile, schedule_line, usage_line,
};
pub use slots::{PanelItem, PanelLink, PanelSlot, PanelTarget, PanelView};
