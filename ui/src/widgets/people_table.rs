//! The people table, drawn from the visible rows of `PeopleTableState`.

use egui::{Frame, Margin, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use roster_business::{PeopleTableState, RowTrigger, open_profile};
use roster_states::StateCtx;

use crate::utils::colors::{BORDER_COLOR, MUTED_TEXT};

const ROW_HEIGHT: f32 = 22.0;
const HEADER_HEIGHT: f32 = 26.0;

struct VisibleRow {
    cells: Vec<String>,
    trigger: Option<RowTrigger>,
}

pub fn people_table(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let table = state_ctx.state::<PeopleTableState>();
    let columns = table.columns.clone();
    let rows: Vec<VisibleRow> = table
        .visible_rows()
        .map(|row| VisibleRow {
            cells: row.cells.clone(),
            trigger: row.trigger.clone(),
        })
        .collect();
    let column_count = rows
        .iter()
        .map(|row| row.cells.len())
        .max()
        .unwrap_or_default()
        .max(columns.len());

    if rows.is_empty() {
        ui.colored_label(MUTED_TEXT, "No matching people");
        return;
    }

    let mut open: Option<RowTrigger> = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, BORDER_COLOR))
        .inner_margin(Margin::symmetric(4, 4))
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .id_salt("people_table")
                .striped(true)
                .resizable(true)
                .columns(Column::auto().at_least(80.0), column_count)
                .column(Column::remainder().at_least(60.0))
                .header(HEADER_HEIGHT, |mut header| {
                    for index in 0..column_count {
                        header.col(|ui| {
                            ui.strong(columns.get(index).map_or("", String::as_str));
                        });
                    }
                    header.col(|ui| {
                        ui.strong("Profile");
                    });
                })
                .body(|mut body| {
                    for row in &rows {
                        body.row(ROW_HEIGHT, |mut table_row| {
                            for index in 0..column_count {
                                table_row.col(|ui| {
                                    ui.label(row.cells.get(index).map_or("", String::as_str));
                                });
                            }
                            table_row.col(|ui| {
                                if let Some(trigger) = &row.trigger
                                    && ui.button("View").clicked()
                                {
                                    open = Some(trigger.clone());
                                }
                            });
                        });
                    }
                });
        });

    if let Some(trigger) = open {
        open_profile(state_ctx, &trigger.entity_kind, &trigger.entity_id);
    }
}
