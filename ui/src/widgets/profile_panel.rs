//! Side panel showing the profile bound by `OpenProfileCommand`.

use egui::{Grid, RichText, ScrollArea, Ui};
use roster_business::{
    BusinessConfig, PanelItem, PanelSlot, PanelView, ProfilePanelCompute, close_profile,
};
use roster_states::StateCtx;

use crate::utils::colors::MUTED_TEXT;

const TEXT_REGIONS: [PanelSlot; 9] = [
    PanelSlot::Name,
    PanelSlot::Phone,
    PanelSlot::Email,
    PanelSlot::Notes,
    PanelSlot::StudentNumber,
    PanelSlot::Group,
    PanelSlot::Level,
    PanelSlot::Mark,
    PanelSlot::CurrentModule,
];

const LIST_REGIONS: [PanelSlot; 4] = [
    PanelSlot::InventoryUsage,
    PanelSlot::MiniTasks,
    PanelSlot::Schedule,
    PanelSlot::DynamicFields,
];

pub fn slot_caption(slot: PanelSlot) -> &'static str {
    match slot {
        PanelSlot::Name => "Name",
        PanelSlot::Phone => "Phone",
        PanelSlot::Email => "Email",
        PanelSlot::Notes => "Notes",
        PanelSlot::StudentNumber => "Student number",
        PanelSlot::Group => "Group",
        PanelSlot::Level => "Level",
        PanelSlot::Mark => "Mark",
        PanelSlot::CurrentModule => "Current module",
        PanelSlot::InventoryUsage => "Inventory usage",
        PanelSlot::MiniTasks => "Mini tasks",
        PanelSlot::Schedule => "Schedule",
        PanelSlot::DynamicFields => "Additional fields",
    }
}

pub fn profile_panel(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let view = state_ctx.compute::<ProfilePanelCompute>().view.clone();
    let config = state_ctx.state::<BusinessConfig>().clone();

    let close = ui
        .horizontal(|ui| {
            ui.heading("Profile");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.button("Close").clicked()
            })
            .inner
        })
        .inner;
    ui.separator();

    ScrollArea::vertical().show(ui, |ui| {
        text_regions(ui, &view);
        for slot in LIST_REGIONS {
            list_region(ui, &config, slot, view.items(slot));
        }
    });

    if close {
        close_profile(state_ctx);
    }
}

fn text_regions(ui: &mut Ui, view: &PanelView) {
    Grid::new("profile_fields")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for slot in TEXT_REGIONS {
                ui.label(RichText::new(slot_caption(slot)).color(MUTED_TEXT));
                ui.label(view.text(slot));
                ui.end_row();
            }
        });
}

fn list_region(ui: &mut Ui, config: &BusinessConfig, slot: PanelSlot, items: &[PanelItem]) {
    ui.add_space(8.0);
    ui.strong(slot_caption(slot));
    if items.is_empty() {
        ui.label(RichText::new("None").color(MUTED_TEXT));
        return;
    }
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(&item.text);
            if let Some(link) = &item.link {
                ui.hyperlink_to(&link.label, config.url_for(&link.href));
            }
        });
    }
}
