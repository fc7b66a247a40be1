#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use roster_business::{OpenProfileCommand, ProfilePanelCompute, Row, TableSeed};
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub async fn new_app() -> Self {
        Self::new_app_with_seed(sample_seed()).await
    }

    pub async fn new_app_with_seed(seed: TableSeed) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let state = State::test(mock_server.uri(), seed);
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }

    pub async fn mock_profile(&self, kind: &str, id: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/profile/{kind}/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn received_requests(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    /// Step frames until the latest profile open has settled.
    pub async fn wait_for_profile(&mut self) {
        for _ in 0..100 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.harness.step();

            let ctx = &self.harness.state().state.ctx;
            let latest = ctx.generation::<OpenProfileCommand>();
            if !ctx.compute::<ProfilePanelCompute>().is_pending(latest) {
                self.harness.step();
                return;
            }
        }
        panic!("profile fetch did not settle");
    }
}

fn person(cells: [&str; 3], kind: &str, id: &str) -> Row {
    Row::new(cells.iter().map(|cell| (*cell).to_owned()).collect())
        .with_attribute("name", cells[0])
        .with_attribute("group", cells[1])
        .with_attribute("mark", cells[2])
        .with_trigger(kind, id)
}

pub fn sample_seed() -> TableSeed {
    TableSeed {
        columns: vec!["Name".to_owned(), "Group".to_owned(), "Mark".to_owned()],
        rows: vec![
            person(["Cara Smith", "G1", "71"], "student", "7"),
            person(["Bob Jones", "G2", "93"], "student", "8"),
            person(["Dr. Lee", "Staff", ""], "lecturer", "2"),
        ],
    }
}

pub fn student_payload() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "full_name": "Ann",
        "phone_number": "555",
        "email": "a@x.com",
        "notes": "n",
        "group": "G1",
        "level": "L2",
        "mark": "88",
        "current_module": "M1",
        "inventory_usage": [{"date_issued": "2024-01-01", "quantity_used": 2, "item_name": "Wire"}],
        "mini_tasks": [{"mini_task_id": 3, "mini_task_title": "T1", "attempt_1": 1, "attempt_2": 0, "attempt_3": 0}],
        "schedule": [{"start_time": "09:00", "end_time": "10:00", "machine": "M-1"}]
    })
}

pub fn lecturer_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Dr. Lee",
        "phone_number": "222",
        "email": "l@x.com"
    })
}
