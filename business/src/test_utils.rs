//! Test utilities for driving the profile panel against a mock server.
//!
//! # Example
//!
//! ```ignore
//! #[tokio::test]
//! async fn opens_student() {
//!     let mut test_ctx = TestContext::new().await;
//!     test_ctx.mock_profile("student", "7", sample_student()).await;
//!
//!     open_profile(&mut test_ctx.ctx, "student", "7");
//!     test_ctx.flush_and_wait().await;
//!
//!     let panel = test_ctx.ctx.compute::<ProfilePanelCompute>();
//!     // ... assert on panel.view
//! }
//! ```

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::time::Duration;

use roster_states::StateCtx;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::{BusinessConfig, PeopleTableState, build_state_ctx};

/// Test context that holds a mock server and a configured StateCtx.
pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let config = BusinessConfig::new(mock_server.uri());
        let ctx = build_state_ctx(config, PeopleTableState::default());
        Self { mock_server, ctx }
    }

    /// Flush pending commands and wait until every spawned task finished.
    ///
    /// Syncs computes after each task completes and once more at the end.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();

        while self.ctx.task_count() > 0 {
            if start.elapsed() > timeout {
                panic!(
                    "Timed out waiting for pending tasks ({} still in JoinSet)",
                    self.ctx.task_count()
                );
            }
            if self.ctx.task_set_mut().join_next().await.is_some() {
                self.ctx.sync_computes();
            }
        }

        self.ctx.sync_computes();
    }

    /// Number of requests the mock server has seen.
    pub async fn received_requests(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    pub async fn mock_profile(&self, kind: &str, id: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/profile/{kind}/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_profile_delayed(&self, kind: &str, id: &str, body: Value, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(format!("/profile/{kind}/{id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(delay),
            )
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_profile_status(&self, kind: &str, id: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/profile/{kind}/{id}")))
            .respond_with(ResponseTemplate::new(status).set_body_string("Internal Server Error"))
            .mount(&self.mock_server)
            .await;
    }
}

/// Student payload with one entry in every list.
pub fn sample_student() -> Value {
    json!({
        "id": 7,
        "full_name": "Ann",
        "phone_number": "555",
        "email": "a@x.com",
        "notes": "n",
        "group": "G1",
        "level": "L2",
        "mark": "88",
        "current_module": "M1",
        "inventory_usage": [
            {"date_issued": "2024-01-01", "quantity_used": 2, "item_name": "Wire"}
        ],
        "mini_tasks": [
            {"mini_task_id": 3, "mini_task_title": "T1", "attempt_1": 1, "attempt_2": 0, "attempt_3": 0}
        ],
        "schedule": [
            {"start_time": "09:00", "end_time": "10:00", "machine": "M-1"}
        ]
    })
}

pub fn sample_lecturer() -> Value {
    json!({
        "name": "Dr. Lee",
        "phone_number": "222",
        "email": "l@x.com"
    })
}
