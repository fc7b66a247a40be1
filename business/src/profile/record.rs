//! Profile payloads as served by `/profile/{kind}/{id}`.
//!
//! The server is loose about scalar types: attempts arrive as `"NYP"` or
//! numbers, quantities as numbers, anything may be `null`. Every scalar is
//! read into [`FieldText`], the text the panel displays.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use super::EntityKind;

/// A scalar field rendered as display text. `null` and missing are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldText(String);

impl FieldText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Bool(b) => Self(b.to_string()),
            Value::Number(n) => Self(number_text(n)),
            Value::String(s) => Self(s.clone()),
            other => Self(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Integral floats print without a fractional part, like the page did.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
    }
}

impl fmt::Display for FieldText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FieldText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self::from_json(&value))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UsageEntry {
    pub date_issued: FieldText,
    pub quantity_used: FieldText,
    pub item_name: FieldText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MiniTask {
    pub mini_task_id: FieldText,
    pub mini_task_title: FieldText,
    pub attempt_1: FieldText,
    pub attempt_2: FieldText,
    pub attempt_3: FieldText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScheduleEntry {
    pub start_time: FieldText,
    pub end_time: FieldText,
    pub machine: FieldText,
}

/// Wire shape shared by both kinds. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProfile {
    pub id: FieldText,
    pub full_name: FieldText,
    pub name: FieldText,
    pub phone_number: FieldText,
    pub email: FieldText,
    pub notes: FieldText,

    pub student_number: FieldText,
    pub group: FieldText,
    pub level: FieldText,
    pub mark: FieldText,
    pub current_module: FieldText,
    #[serde(deserialize_with = "null_as_default")]
    pub inventory_usage: Vec<UsageEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub mini_tasks: Vec<MiniTask>,
    #[serde(deserialize_with = "null_as_default")]
    pub schedule: Vec<ScheduleEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub dynamic_fields: BTreeMap<String, FieldText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonFields {
    /// Record id from the payload, used for record links.
    pub id: FieldText,
    pub name: FieldText,
    pub phone: FieldText,
    pub email: FieldText,
    pub notes: FieldText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFields {
    pub student_number: FieldText,
    pub group: FieldText,
    pub level: FieldText,
    pub mark: FieldText,
    pub current_module: FieldText,
    pub inventory_usage: Vec<UsageEntry>,
    pub mini_tasks: Vec<MiniTask>,
    pub schedule: Vec<ScheduleEntry>,
    pub dynamic_fields: BTreeMap<String, FieldText>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileKind {
    Student(StudentFields),
    Lecturer,
}

impl ProfileKind {
    pub fn student(&self) -> Option<&StudentFields> {
        match self {
            Self::Student(fields) => Some(fields),
            Self::Lecturer => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub common: CommonFields,
    pub kind: ProfileKind,
}

impl Profile {
    /// Shape a payload for the kind that was requested. Lecturer payloads
    /// never carry student fields, even if the server sent some.
    pub fn from_raw(kind: EntityKind, raw: RawProfile) -> Self {
        let RawProfile {
            id,
            full_name,
            name,
            phone_number,
            email,
            notes,
            student_number,
            group,
            level,
            mark,
            current_module,
            inventory_usage,
            mini_tasks,
            schedule,
            dynamic_fields,
        } = raw;

        let common = CommonFields {
            id,
            name: if full_name.is_empty() { name } else { full_name },
            phone: phone_number,
            email,
            notes,
        };

        let kind = match kind {
            EntityKind::Student => ProfileKind::Student(StudentFields {
                student_number,
                group,
                level,
                mark,
                current_module,
                inventory_usage,
                mini_tasks,
                schedule,
                dynamic_fields,
            }),
            EntityKind::Lecturer => ProfileKind::Lecturer,
        };

        Self { common, kind }
    }
}
