//! Search boxes bound to the people table.

use egui::{TextEdit, Ui};
use roster_business::{PeopleTableState, SearchBox};
use roster_states::StateCtx;

/// Caption shown next to a search box.
pub fn search_caption(search_box: SearchBox) -> &'static str {
    match search_box {
        SearchBox::Primary => "Search people",
        SearchBox::Secondary => "Filter table",
    }
}

/// Draw one search box. Nothing is drawn when the page has no such box.
pub fn search_box(state_ctx: &mut StateCtx, ui: &mut Ui, search_box: SearchBox) {
    let Some(query) = state_ctx.state::<PeopleTableState>().query(search_box) else {
        return;
    };
    let mut text = query.to_owned();

    let changed = ui
        .horizontal(|ui| {
            ui.label(search_caption(search_box));
            ui.add(
                TextEdit::singleline(&mut text)
                    .id_salt(search_caption(search_box))
                    .hint_text("name, group, mark…")
                    .desired_width(200.0),
            )
            .changed()
        })
        .inner;

    if changed {
        state_ctx.update::<PeopleTableState>(|table| table.on_search_input(search_box, &text));
    }
}
