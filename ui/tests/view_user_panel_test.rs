//! Integration tests for the detail panel driven by the view-user state.

use kittest::Queryable;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{user_json, TestCtx};

/// One-user page so there is exactly one View button to click.
async fn server_with_one_user() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [user_json("solo-uuid", "Amelia", "Woods")]
        })))
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn view_opens_the_panel_with_the_users_details() {
    let mock_server = server_with_one_user().await;
    let mut ctx = TestCtx::with_server(mock_server);
    ctx.settle().await;

    // Panel hidden until a row is selected.
    assert!(!ctx.harness_mut().state().state().view_user.is_open());

    ctx.harness_mut().get_by_label("View").click();
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    let harness = ctx.harness_mut();
    let view_user = &harness.state().state().view_user;
    assert!(view_user.is_open());
    assert_eq!(
        view_user.selected_user().map(|u| u.login.uuid.as_str()),
        Some("solo-uuid")
    );
    assert!(
        harness
            .query_by_label_contains("amelia.woods@example.com")
            .is_some(),
        "panel should show the selected user's email"
    );
}

#[tokio::test]
async fn close_hides_the_panel_but_keeps_the_selection() {
    let mock_server = server_with_one_user().await;
    let mut ctx = TestCtx::with_server(mock_server);
    ctx.settle().await;

    ctx.harness_mut().get_by_label("View").click();
    ctx.harness_mut().step();
    ctx.harness_mut().get_by_label("Close").click();
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    let view_user = &ctx.harness_mut().state().state().view_user;
    assert!(!view_user.is_open());
    assert!(
        view_user.selected_user().is_some(),
        "closing the panel must not clear the selection"
    );
}
