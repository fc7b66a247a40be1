use egui::{ComboBox, Ui};
use roster_business::{PeopleTableState, SortKey};
use roster_states::StateCtx;

/// Sort key selector, offering exactly the attributes the rows carry.
pub fn sort_select(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let table = state_ctx.state::<PeopleTableState>();
    if !table.controls().sort_selector {
        return;
    }
    let current = table.sort_key();
    let keys = table.sort_keys();
    let mut selected: Option<SortKey> = current;

    ComboBox::from_label("Sort by")
        .selected_text(current.map_or_else(|| "Unsorted".to_owned(), |key| key.as_str().to_owned()))
        .show_ui(ui, |ui| {
            for key in keys {
                ui.selectable_value(&mut selected, Some(key), key.as_str());
            }
        });

    if selected != current
        && let Some(key) = selected
    {
        state_ctx.update::<PeopleTableState>(|table| table.on_sort_change(key));
    }
}
