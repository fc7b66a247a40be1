use std::time::Duration;

use roster_business::{OpenProfileCommand, ProfilePanelCompute, ProfilePanelInput, SearchBox};

use crate::{state::State, widgets};

/// Keeps frames coming while a profile fetch may still deliver.
const FETCH_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub struct RosterApp {
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("People");
                ui.separator();
                widgets::search_box(&mut self.state.ctx, ui, SearchBox::Primary);
                widgets::sort_select(&mut self.state.ctx, ui);
            });
        });

        if self.state.ctx.state::<ProfilePanelInput>().open {
            egui::SidePanel::right("profile_panel")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| widgets::profile_panel(&mut self.state.ctx, ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::search_box(&mut self.state.ctx, ui, SearchBox::Secondary);
            ui.add_space(4.0);
            widgets::people_table(&mut self.state.ctx, ui);
        });

        // Run commands queued by this frame
        self.state.ctx.flush_commands();

        if self.fetch_pending() {
            ctx.request_repaint_after(FETCH_REPAINT_INTERVAL);
        }
    }
}

impl RosterApp {
    fn fetch_pending(&self) -> bool {
        let latest = self.state.ctx.generation::<OpenProfileCommand>();
        self.state
            .ctx
            .compute::<ProfilePanelCompute>()
            .is_pending(latest)
    }
}
