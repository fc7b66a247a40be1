//! Loading the server-rendered table rows.

use roster_business::TableSeed;

/// Read the seed file named by `ROSTER_TABLE_SEED`. No file means an empty table.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_table_seed(path: Option<&std::path::Path>) -> anyhow::Result<TableSeed> {
    use anyhow::Context as _;

    let Some(path) = path else {
        log::info!("ROSTER_TABLE_SEED not set, starting with an empty table");
        return Ok(TableSeed::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read table seed {}", path.display()))?;
    let seed = TableSeed::from_json(&json)
        .with_context(|| format!("Failed to parse table seed {}", path.display()))?;
    log::info!("Loaded {} rows from {}", seed.rows.len(), path.display());
    Ok(seed)
}

/// Element id of the JSON seed embedded in the host page.
pub const SEED_ELEMENT_ID: &str = "roster-table";

/// Read the seed and control settings from
/// `<script id="roster-table" type="application/json" data-secondary-search="false">`.
#[cfg(target_arch = "wasm32")]
pub fn page_seed(document: &web_sys::Document) -> (TableSeed, roster_business::ControlsConfig) {
    let mut controls = roster_business::ControlsConfig::default();
    let Some(element) = document.get_element_by_id(SEED_ELEMENT_ID) else {
        log::warn!("No #{SEED_ELEMENT_ID} element, starting with an empty table");
        return (TableSeed::default(), controls);
    };

    let enabled = |name: &str| element.get_attribute(name).as_deref() != Some("false");
    controls.primary_search = enabled("data-primary-search");
    controls.secondary_search = enabled("data-secondary-search");
    controls.sort_selector = enabled("data-sort-selector");

    let json = element.text_content().unwrap_or_default();
    let seed = TableSeed::from_json(&json).unwrap_or_else(|e| {
        log::error!("Failed to parse #{SEED_ELEMENT_ID}: {e}");
        TableSeed::default()
    });
    (seed, controls)
}
