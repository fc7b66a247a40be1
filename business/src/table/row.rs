use std::collections::BTreeMap;

use serde::Deserialize;
use ustr::Ustr;

/// Data carried by a row's "View" action; read when the profile panel opens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RowTrigger {
    pub entity_kind: Ustr,
    pub entity_id: Ustr,
}

/// One person in the table, as rendered by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct Row {
    /// Displayed cell texts, in column order.
    pub cells: Vec<String>,
    /// Sort attributes such as `name`, `group`, `level` and `mark`.
    #[serde(default)]
    pub attributes: BTreeMap<Ustr, String>,
    #[serde(default)]
    pub trigger: Option<RowTrigger>,
    #[serde(skip, default = "shown")]
    pub visible: bool,
}

fn shown() -> bool {
    true
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            attributes: BTreeMap::new(),
            trigger: None,
            visible: true,
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(Ustr::from(key), value.into());
        self
    }

    pub fn with_trigger(mut self, entity_kind: &str, entity_id: &str) -> Self {
        self.trigger = Some(RowTrigger {
            entity_kind: Ustr::from(entity_kind),
            entity_id: Ustr::from(entity_id),
        });
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(&Ustr::from(key)).map(String::as_str)
    }

    /// Full text of the row, as the filter sees it.
    pub fn rendered_text(&self) -> String {
        self.cells.join(" ")
    }
}

/// Initial table content handed over by the host page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableSeed {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TableSeed {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
