//! Shared harness for the UI integration tests: a wiremock server standing
//! in for randomuser.me plus an eframe test harness around `RosterApp`.

use egui_kittest::Harness;
use roster_ui::state::State;
use roster_ui::RosterApp;
use wiremock::MockServer;

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    #[allow(dead_code)]
    pub mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    /// Wrap an app pointed at an already-configured mock server.
    pub fn with_server(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let state = State::test(mock_server.uri());
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

    /// Step frames around a short sleep so off-thread fetch callbacks land
    /// and the app gets a chance to drain them.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        for _ in 0..10 {
            self.harness.step();
        }
    }
}

/// One randomuser-shaped record.
#[allow(dead_code)]
pub fn user_json(uuid: &str, first: &str, last: &str) -> serde_json::Value {
    serde_json::json!({
        "gender": "female",
        "name": { "title": "Ms", "first": first, "last": last },
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "phone": "011-222-3333",
        "cell": "044-555-6666",
        "login": { "uuid": uuid },
        "picture": {
            "large": "https://example.com/l.jpg",
            "medium": "https://example.com/m.jpg",
            "thumbnail": "https://example.com/t.jpg"
        },
        "nat": "GB"
    })
}

/// A full 20-record page whose first names share `prefix`.
#[allow(dead_code)]
pub fn page_json(prefix: &str) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (0..20)
        .map(|i| user_json(&format!("{prefix}-{i}"), &format!("{prefix}{i:02}"), "Example"))
        .collect();
    serde_json::json!({ "results": results })
}
