mod people_table;
mod profile_panel;
mod search;
mod sort_select;

pub use people_table::people_table;
pub use profile_panel::{profile_panel, slot_caption};
pub use search::{search_box, search_caption};
pub use sort_select::sort_select;
