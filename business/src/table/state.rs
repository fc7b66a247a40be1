use std::any::Any;
use std::collections::BTreeSet;

use log::debug;
use roster_states::{SnapshotClone, State, state_assign_impl};

use super::filter::{SearchBox, apply_filter};
use super::sort::{SortKey, sort_rows};
use super::{Row, TableSeed};
use crate::config::ControlsConfig;

/// The shared table: rows plus the state of the controls bound to it.
///
/// Filtering and sorting only mutate this state; they never issue requests.
#[derive(Debug, Clone, Default)]
pub struct PeopleTableState {
    pub columns: Vec<String>,
    rows: Vec<Row>,
    controls: ControlsConfig,
    primary_query: String,
    secondary_query: String,
    sort_key: Option<SortKey>,
}

impl PeopleTableState {
    pub fn new(seed: TableSeed, controls: ControlsConfig) -> Self {
        Self {
            columns: seed.columns,
            rows: seed.rows,
            controls,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.visible)
    }

    pub fn controls(&self) -> ControlsConfig {
        self.controls
    }

    pub fn has_search_box(&self, search_box: SearchBox) -> bool {
        match search_box {
            SearchBox::Primary => self.controls.primary_search,
            SearchBox::Secondary => self.controls.secondary_search,
        }
    }

    /// Current text of a search box, `None` when the page has no such box.
    pub fn query(&self, search_box: SearchBox) -> Option<&str> {
        if !self.has_search_box(search_box) {
            return None;
        }
        Some(match search_box {
            SearchBox::Primary => self.primary_query.as_str(),
            SearchBox::Secondary => self.secondary_query.as_str(),
        })
    }

    /// Keystroke in a search box. The edited box alone decides visibility.
    pub fn on_search_input(&mut self, search_box: SearchBox, text: &str) {
        if !self.has_search_box(search_box) {
            debug!("Ignoring input for absent search box {search_box:?}");
            return;
        }
        match search_box {
            SearchBox::Primary => text.clone_into(&mut self.primary_query),
            SearchBox::Secondary => text.clone_into(&mut self.secondary_query),
        }
        apply_filter(&mut self.rows, text);
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    /// Every attribute name carried by at least one row, in name order.
    pub fn sort_keys(&self) -> Vec<SortKey> {
        let keys: BTreeSet<&str> = self
            .rows
            .iter()
            .flat_map(|row| row.attributes.keys().map(|key| key.as_str()))
            .collect();
        keys.into_iter().map(SortKey::new).collect()
    }

    /// Change of the sort selector.
    pub fn on_sort_change(&mut self, key: SortKey) {
        if !self.controls.sort_selector {
            debug!("Ignoring sort change without a sort selector");
            return;
        }
        self.sort_key = Some(key);
        sort_rows(&mut self.rows, key);
    }
}

impl SnapshotClone for PeopleTableState {}

impl State for PeopleTableState {
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
