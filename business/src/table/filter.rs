//! Live text filtering of table rows.

use super::Row;

/// The two search boxes the page may provide. Both filter the same rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchBox {
    Primary,
    Secondary,
}

/// `true` when the lower-cased rendered text contains the lower-cased filter.
pub fn row_matches(row: &Row, filter: &str) -> bool {
    row.rendered_text()
        .to_lowercase()
        .contains(&filter.to_lowercase())
}

/// Toggle visibility of every row. An empty filter shows all rows.
pub fn apply_filter(rows: &mut [Row], filter: &str) {
    let filter = filter.to_lowercase();
    for row in rows.iter_mut() {
        row.visible = row.rendered_text().to_lowercase().contains(&filter);
    }
}
