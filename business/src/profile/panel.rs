//! Profile panel: open state, fetch command and rendered view.

use std::any::Any;

use log::{debug, error};
use roster_states::{
    Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, SnapshotClone, State,
    StateCtx, assign_impl, state_assign_impl,
};
use tokio_util::sync::CancellationToken;

use super::{EntityKind, PanelRequestContext, PanelView, Profile, fetch_profile, render_profile};
use crate::BusinessConfig;

/// Trigger data of the latest open, plus whether the panel is shown.
#[derive(Debug, Clone, Default)]
pub struct ProfilePanelInput {
    pub request: Option<PanelRequestContext>,
    pub open: bool,
}

impl SnapshotClone for ProfilePanelInput {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for ProfilePanelInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Fetch lifecycle of the panel.
///
/// `Loading` and `Stalled` both show the previous content unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Closed,
    Loading,
    Populated(EntityKind),
    Stalled,
}

#[derive(Debug, Clone, Default)]
pub struct ProfilePanelCompute {
    pub phase: PanelPhase,
    pub view: PanelView,
    /// Open that produced this value, `0` before the first open.
    pub generation: u64,
}

impl ProfilePanelCompute {
    /// `true` while the latest open has not reached `Populated` or `Stalled`.
    pub fn is_pending(&self, latest_generation: u64) -> bool {
        self.generation != latest_generation || self.phase == PanelPhase::Loading
    }
}

impl SnapshotClone for ProfilePanelCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for ProfilePanelCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Fetch the profile named by `ProfilePanelInput::request` and render it.
#[derive(Default, Debug)]
pub struct OpenProfileCommand;

impl Command for OpenProfileCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let config: BusinessConfig = snap.state::<BusinessConfig>().clone();
        let input: ProfilePanelInput = snap.state::<ProfilePanelInput>().clone();
        let previous: ProfilePanelCompute = snap.compute::<ProfilePanelCompute>().clone();

        Box::pin(async move {
            let Some(request) = input.request else {
                debug!("OpenProfileCommand ran without a request");
                return;
            };

            updater.set(ProfilePanelCompute {
                phase: PanelPhase::Loading,
                view: previous.view.clone(),
                generation: updater.generation(),
            });

            let url = config.url_for(&request.profile_path());
            debug!("Fetching {} profile from {url}", request.entity_kind);

            let result = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    debug!("Profile fetch for {} superseded", request.profile_path());
                    return;
                }
                result = fetch_profile(url) => result,
            };

            match result {
                Ok(raw) => {
                    let profile = Profile::from_raw(request.entity_kind, raw);
                    let mut view = previous.view;
                    render_profile(&profile, &mut view);
                    updater.set(ProfilePanelCompute {
                        phase: PanelPhase::Populated(request.entity_kind),
                        view,
                        generation: updater.generation(),
                    });
                }
                Err(err) => {
                    error!(
                        target: "roster_business::profile",
                        "Failed to load {} profile {}: {err}",
                        request.entity_kind,
                        request.entity_id
                    );
                    updater.set(ProfilePanelCompute {
                        phase: PanelPhase::Stalled,
                        view: previous.view,
                        generation: updater.generation(),
                    });
                }
            }
        })
    }
}

/// Open the panel for one row trigger.
///
/// Returns `false` without touching any state when the kind has no profile
/// endpoint.
pub fn open_profile(ctx: &mut StateCtx, entity_kind: &str, entity_id: &str) -> bool {
    let Some(request) = PanelRequestContext::from_trigger(entity_kind, entity_id) else {
        debug!("No profile endpoint for entity kind {entity_kind:?}");
        return false;
    };

    ctx.update::<ProfilePanelInput>(|input| {
        input.request = Some(request);
        input.open = true;
    });
    ctx.dispatch::<OpenProfileCommand>();
    true
}

/// Hide the panel. A fetch still in flight keeps running.
pub fn close_profile(ctx: &mut StateCtx) {
    ctx.update::<ProfilePanelInput>(|input| input.open = false);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::profile::{PanelItem, PanelSlot};
    use crate::test_utils::{TestContext, sample_lecturer, sample_student};

    #[tokio::test]
    async fn student_payload_fills_every_region() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_profile("student", "7", sample_student()).await;

        assert!(open_profile(&mut test_ctx.ctx, "student", "7"));
        test_ctx.flush_and_wait().await;

        let panel = test_ctx.ctx.compute::<ProfilePanelCompute>();
        assert_eq!(panel.phase, PanelPhase::Populated(EntityKind::Student));
        let view = &panel.view;
        assert_eq!(view.text(PanelSlot::Name), "Ann");
        assert_eq!(view.text(PanelSlot::Phone), "555");
        assert_eq!(view.text(PanelSlot::Email), "a@x.com");
        assert_eq!(view.text(PanelSlot::Notes), "n");
        assert_eq!(view.text(PanelSlot::Group), "G1");
        assert_eq!(view.text(PanelSlot::Level), "L2");
        assert_eq!(view.text(PanelSlot::Mark), "88");
        assert_eq!(view.text(PanelSlot::CurrentModule), "M1");
        assert_eq!(
            view.items(PanelSlot::InventoryUsage),
            [PanelItem::text("2024-01-01: Used 2 of Wire")]
        );

        let tasks = view.items(PanelSlot::MiniTasks);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "T1 (Attempt1=1, Attempt2=0, Attempt3=0)");
        assert_eq!(
            tasks[0].link.as_ref().map(|link| link.href.as_str()),
            Some("/student_module_form/3/7")
        );
        assert_eq!(
            view.items(PanelSlot::Schedule),
            [PanelItem::text("09:00 to 10:00 on M-1")]
        );
        assert!(test_ctx.ctx.state::<ProfilePanelInput>().open);
    }

    #[tokio::test]
    async fn record_link_uses_payload_id() {
        let mut test_ctx = TestContext::new().await;
        let mut payload = sample_student();
        payload["id"] = serde_json::json!(42);
        test_ctx.mock_profile("student", "S-0007", payload).await;

        open_profile(&mut test_ctx.ctx, "student", "S-0007");
        test_ctx.flush_and_wait().await;

        let view = &test_ctx.ctx.compute::<ProfilePanelCompute>().view;
        assert_eq!(
            view.items(PanelSlot::MiniTasks)[0]
                .link
                .as_ref()
                .map(|link| link.href.as_str()),
            Some("/student_module_form/3/42")
        );
    }

    #[tokio::test]
    async fn lecturer_after_student_clears_student_regions() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_profile("student", "7", sample_student()).await;
        test_ctx.mock_profile("lecturer", "2", sample_lecturer()).await;

        open_profile(&mut test_ctx.ctx, "student", "7");
        test_ctx.flush_and_wait().await;
        open_profile(&mut test_ctx.ctx, "lecturer", "2");
        test_ctx.flush_and_wait().await;

        let panel = test_ctx.ctx.compute::<ProfilePanelCompute>();
        assert_eq!(panel.phase, PanelPhase::Populated(EntityKind::Lecturer));
        assert_eq!(panel.view.text(PanelSlot::Name), "Dr. Lee");
        assert_eq!(panel.view.text(PanelSlot::Phone), "222");
        assert_eq!(panel.view.text(PanelSlot::Email), "l@x.com");
        for slot in PanelSlot::STUDENT {
            assert!(panel.view.is_slot_empty(slot), "{}", slot.region_id());
        }
    }

    #[tokio::test]
    async fn unknown_kind_issues_no_request() {
        let mut test_ctx = TestContext::new().await;

        assert!(!open_profile(&mut test_ctx.ctx, "guest", "7"));
        test_ctx.flush_and_wait().await;

        assert_eq!(test_ctx.ctx.generation::<OpenProfileCommand>(), 0);
        assert!(test_ctx.ctx.state::<ProfilePanelInput>().request.is_none());
        assert!(!test_ctx.ctx.state::<ProfilePanelInput>().open);
        assert_eq!(
            test_ctx.ctx.compute::<ProfilePanelCompute>().phase,
            PanelPhase::Closed
        );
        assert_eq!(test_ctx.received_requests().await, 0);
    }

    #[tokio::test]
    async fn failure_keeps_previous_content() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_profile("student", "7", sample_student()).await;
        test_ctx.mock_profile_status("student", "8", 500).await;

        open_profile(&mut test_ctx.ctx, "student", "7");
        test_ctx.flush_and_wait().await;
        let before = test_ctx.ctx.compute::<ProfilePanelCompute>().view.clone();

        open_profile(&mut test_ctx.ctx, "student", "8");
        test_ctx.flush_and_wait().await;

        let panel = test_ctx.ctx.compute::<ProfilePanelCompute>();
        assert_eq!(panel.phase, PanelPhase::Stalled);
        assert_eq!(panel.view, before);
    }

    #[tokio::test]
    async fn closing_hides_without_cancelling() {
        let mut test_ctx = TestContext::new().await;
        test_ctx
            .mock_profile_delayed("student", "7", sample_student(), Duration::from_millis(100))
            .await;

        open_profile(&mut test_ctx.ctx, "student", "7");
        close_profile(&mut test_ctx.ctx);
        test_ctx.flush_and_wait().await;

        assert!(!test_ctx.ctx.state::<ProfilePanelInput>().open);
        let panel = test_ctx.ctx.compute::<ProfilePanelCompute>();
        assert_eq!(panel.phase, PanelPhase::Populated(EntityKind::Student));
        assert_eq!(panel.view.text(PanelSlot::Name), "Ann");
    }

    #[tokio::test]
    async fn slow_earlier_response_never_overwrites_later_open() {
        let mut test_ctx = TestContext::new().await;
        test_ctx
            .mock_profile_delayed("student", "7", sample_student(), Duration::from_millis(300))
            .await;
        test_ctx.mock_profile("lecturer", "2", sample_lecturer()).await;

        open_profile(&mut test_ctx.ctx, "student", "7");
        open_profile(&mut test_ctx.ctx, "lecturer", "2");
        test_ctx.flush_and_wait().await;

        assert_eq!(test_ctx.ctx.generation::<OpenProfileCommand>(), 2);
        let panel = test_ctx.ctx.compute::<ProfilePanelCompute>();
        assert_eq!(panel.phase, PanelPhase::Populated(EntityKind::Lecturer));
        assert_eq!(panel.generation, 2);
        assert!(!panel.is_pending(2));
        assert_eq!(panel.view.text(PanelSlot::Name), "Dr. Lee");
        assert!(panel.view.is_slot_empty(PanelSlot::MiniTasks));
    }
}
