use super::record::{MiniTask, Profile, ScheduleEntry, StudentFields, UsageEntry};
use super::{FieldText, PanelItem, PanelSlot, PanelTarget};

pub const RECORD_LINK_LABEL: &str = "Record";

/// Bind a profile to every panel region.
///
/// Common regions are always written. Student regions are written from the
/// student payload, or emptied when the profile has none.
pub fn render_profile<T: PanelTarget + ?Sized>(profile: &Profile, target: &mut T) {
    let common = &profile.common;
    target.set_text(PanelSlot::Name, common.name.as_str());
    target.set_text(PanelSlot::Phone, common.phone.as_str());
    target.set_text(PanelSlot::Email, common.email.as_str());
    target.set_text(PanelSlot::Notes, common.notes.as_str());

    render_student(profile.kind.student(), &common.id, target);
}

fn render_student<T: PanelTarget + ?Sized>(
    student: Option<&StudentFields>,
    record_id: &FieldText,
    target: &mut T,
) {
    target.set_text(PanelSlot::StudentNumber, field(student, |s| &s.student_number));
    target.set_text(PanelSlot::Group, field(student, |s| &s.group));
    target.set_text(PanelSlot::Level, field(student, |s| &s.level));
    target.set_text(PanelSlot::Mark, field(student, |s| &s.mark));
    target.set_text(PanelSlot::CurrentModule, field(student, |s| &s.current_module));

    let Some(student) = student else {
        for slot in PanelSlot::STUDENT.into_iter().filter(|slot| slot.is_list()) {
            target.set_items(slot, Vec::new());
        }
        return;
    };

    target.set_items(
        PanelSlot::InventoryUsage,
        student
            .inventory_usage
            .iter()
            .map(|entry| PanelItem::text(usage_line(entry)))
            .collect(),
    );
    target.set_items(
        PanelSlot::MiniTasks,
        student
            .mini_tasks
            .iter()
            .map(|task| mini_task_item(task, record_id))
            .collect(),
    );
    target.set_items(
        PanelSlot::Schedule,
        student
            .schedule
            .iter()
            .map(|entry| PanelItem::text(schedule_line(entry)))
            .collect(),
    );
    target.set_items(
        PanelSlot::DynamicFields,
        student
            .dynamic_fields
            .iter()
            .map(|(key, value)| PanelItem::text(format!("{key}: {value}")))
            .collect(),
    );
}

fn field<'a>(
    student: Option<&'a StudentFields>,
    get: fn(&StudentFields) -> &FieldText,
) -> &'a str {
    student.map_or("", |s| get(s).as_str())
}

pub fn usage_line(entry: &UsageEntry) -> String {
    format!(
        "{}: Used {} of {}",
        entry.date_issued, entry.quantity_used, entry.item_name
    )
}

pub fn schedule_line(entry: &ScheduleEntry) -> String {
    format!("{} to {} on {}", entry.start_time, entry.end_time, entry.machine)
}

pub fn record_link_path(mini_task_id: &FieldText, record_id: &FieldText) -> String {
    format!("/student_module_form/{mini_task_id}/{record_id}")
}

/// Mini-task entry. The record link uses the payload's `id`; it is left out
/// when either id is missing.
pub fn mini_task_item(task: &MiniTask, record_id: &FieldText) -> PanelItem {
    let item = PanelItem::text(format!(
        "{} (Attempt1={}, Attempt2={}, Attempt3={})",
        task.mini_task_title, task.attempt_1, task.attempt_2, task.attempt_3
    ));
    if task.mini_task_id.is_empty() || record_id.is_empty() {
        return item;
    }
    item.with_link(
        RECORD_LINK_LABEL,
        record_link_path(&task.mini_task_id, record_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{EntityKind, PanelLink, PanelView, RawProfile};

    fn profile(kind: EntityKind, json: serde_json::Value) -> Profile {
        let raw: RawProfile = serde_json::from_value(json).expect("payload should parse");
        Profile::from_raw(kind, raw)
    }

    #[test]
    fn student_lists_are_formatted() {
        let student = profile(
            EntityKind::Student,
            serde_json::json!({
                "id": 12,
                "full_name": "Ann",
                "inventory_usage": [{"date_issued": "N/A", "quantity_used": 0, "item_name": "Flux"}],
                "mini_tasks": [{"mini_task_id": 4, "mini_task_title": "Wiring", "attempt_1": "NYP", "attempt_2": "NYP", "attempt_3": "NYP"}],
                "schedule": [{"start_time": "09:00", "end_time": "10:00", "machine": "Lathe"}],
                "dynamic_fields": {"shirt": "M", "badge": 17}
            }),
        );
        let mut view = PanelView::default();
        render_profile(&student, &mut view);

        assert_eq!(
            view.items(PanelSlot::InventoryUsage),
            [PanelItem::text("N/A: Used 0 of Flux")]
        );
        assert_eq!(
            view.items(PanelSlot::MiniTasks)[0],
            PanelItem {
                text: "Wiring (Attempt1=NYP, Attempt2=NYP, Attempt3=NYP)".to_owned(),
                link: Some(PanelLink {
                    label: "Record".to_owned(),
                    href: "/student_module_form/4/12".to_owned(),
                }),
            }
        );
        assert_eq!(
            view.items(PanelSlot::Schedule),
            [PanelItem::text("09:00 to 10:00 on Lathe")]
        );
        assert_eq!(
            view.items(PanelSlot::DynamicFields),
            [PanelItem::text("badge: 17"), PanelItem::text("shirt: M")]
        );
    }

    #[test]
    fn mini_task_without_record_id_has_no_link() {
        let item = mini_task_item(
            &MiniTask {
                mini_task_id: FieldText::new("3"),
                mini_task_title: FieldText::new("T1"),
                ..MiniTask::default()
            },
            &FieldText::default(),
        );
        assert_eq!(item.text, "T1 (Attempt1=, Attempt2=, Attempt3=)");
        assert!(item.link.is_none());
    }

    #[test]
    fn lecturer_after_student_empties_student_regions() {
        let mut view = PanelView::default();
        render_profile(
            &profile(
                EntityKind::Student,
                serde_json::json!({
                    "id": 7, "full_name": "Ann", "notes": "n", "group": "G1", "mark": "88",
                    "student_number": "S-1",
                    "schedule": [{"start_time": "09:00", "end_time": "10:00", "machine": "M-1"}],
                    "dynamic_fields": {"shirt": "M"}
                }),
            ),
            &mut view,
        );
        render_profile(
            &profile(
                EntityKind::Lecturer,
                serde_json::json!({"name": "Dr. Lee", "phone_number": "222", "email": "l@x.com"}),
            ),
            &mut view,
        );

        assert_eq!(view.text(PanelSlot::Name), "Dr. Lee");
        assert_eq!(view.text(PanelSlot::Phone), "222");
        assert_eq!(view.text(PanelSlot::Notes), "");
        for slot in PanelSlot::STUDENT {
            assert!(view.is_slot_empty(slot), "{} should be empty", slot.region_id());
        }
    }
}
