use std::fmt;

use ustr::Ustr;

/// Entity kinds with a profile endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Lecturer,
}

impl EntityKind {
    /// Exact, case-sensitive match on the trigger's kind string.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "student" => Some(Self::Student),
            "lecturer" => Some(Self::Lecturer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Lecturer => "lecturer",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind and id read from a row trigger when the panel is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRequestContext {
    pub entity_kind: EntityKind,
    pub entity_id: Ustr,
}

impl PanelRequestContext {
    /// `None` for kinds without a profile endpoint.
    pub fn from_trigger(entity_kind: &str, entity_id: &str) -> Option<Self> {
        EntityKind::parse(entity_kind).map(|entity_kind| Self {
            entity_kind,
            entity_id: Ustr::from(entity_id),
        })
    }

    pub fn profile_path(&self) -> String {
        format!("/profile/{}/{}", self.entity_kind, self.entity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_map_to_profile_paths() {
        let student = PanelRequestContext::from_trigger("student", "7").expect("student is known");
        assert_eq!(student.profile_path(), "/profile/student/7");

        let lecturer = PanelRequestContext::from_trigger("lecturer", "2").expect("lecturer is known");
        assert_eq!(lecturer.profile_path(), "/profile/lecturer/2");
    }

    #[test]
    fn other_kinds_are_rejected() {
        for kind in ["guest", "Student", "", " student"] {
            assert!(PanelRequestContext::from_trigger(kind, "1").is_none(), "{kind:?}");
        }
    }
}
