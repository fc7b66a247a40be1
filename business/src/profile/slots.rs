use std::collections::BTreeMap;

/// Named display regions of the profile panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelSlot {
    Name,
    Phone,
    Email,
    Notes,
    StudentNumber,
    Group,
    Level,
    Mark,
    CurrentModule,
    InventoryUsage,
    MiniTasks,
    Schedule,
    DynamicFields,
}

impl PanelSlot {
    pub const COMMON: [Self; 4] = [Self::Name, Self::Phone, Self::Email, Self::Notes];

    /// Regions a lecturer profile leaves empty.
    pub const STUDENT: [Self; 9] = [
        Self::StudentNumber,
        Self::Group,
        Self::Level,
        Self::Mark,
        Self::CurrentModule,
        Self::InventoryUsage,
        Self::MiniTasks,
        Self::Schedule,
        Self::DynamicFields,
    ];

    pub fn region_id(self) -> &'static str {
        match self {
            Self::Name => "profileName",
            Self::Phone => "profilePhone",
            Self::Email => "profileEmail",
            Self::Notes => "profileNotes",
            Self::StudentNumber => "profileStudentNumber",
            Self::Group => "profileGroup",
            Self::Level => "profileLevel",
            Self::Mark => "profileMark",
            Self::CurrentModule => "profileCurrentModule",
            Self::InventoryUsage => "profileInventoryUsage",
            Self::MiniTasks => "profileMiniTasks",
            Self::Schedule => "profileSchedule",
            Self::DynamicFields => "profileDynamicFields",
        }
    }

    pub fn is_list(self) -> bool {
        matches!(
            self,
            Self::InventoryUsage | Self::MiniTasks | Self::Schedule | Self::DynamicFields
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLink {
    pub label: String,
    /// Server path, resolved against the base URL when followed.
    pub href: String,
}

/// One entry of a list region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelItem {
    pub text: String,
    pub link: Option<PanelLink>,
}

impl PanelItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.link = Some(PanelLink {
            label: label.into(),
            href: href.into(),
        });
        self
    }
}

/// Rendering target the profile binder writes into.
pub trait PanelTarget {
    fn set_text(&mut self, slot: PanelSlot, text: &str);

    /// Replace the whole list of a region.
    fn set_items(&mut self, slot: PanelSlot, items: Vec<PanelItem>);
}

/// In-memory panel content, drawn by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelView {
    texts: BTreeMap<PanelSlot, String>,
    lists: BTreeMap<PanelSlot, Vec<PanelItem>>,
}

impl PanelView {
    pub fn text(&self, slot: PanelSlot) -> &str {
        self.texts.get(&slot).map_or("", String::as_str)
    }

    pub fn items(&self, slot: PanelSlot) -> &[PanelItem] {
        self.lists.get(&slot).map_or(&[], Vec::as_slice)
    }

    /// `true` when the region shows neither text nor list entries.
    pub fn is_slot_empty(&self, slot: PanelSlot) -> bool {
        self.text(slot).is_empty() && self.items(slot).is_empty()
    }
}

impl PanelTarget for PanelView {
    fn set_text(&mut self, slot: PanelSlot, text: &str) {
        self.texts.insert(slot, text.to_owned());
    }

    fn set_items(&mut self, slot: PanelSlot, items: Vec<PanelItem>) {
        self.lists.insert(slot, items);
    }
}
