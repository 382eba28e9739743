mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{await_results, console, spawn_stub, step, type_text};
use huelio_console::ui::viewmodel::CrumbColor;
use huelio_console::{ConsoleMode, Event};

const KITCHEN: &str = r#"[{"light": {"name": "Kitchen Ceiling"}, "onoff": "on"}]"#;
const TWO: &str = r#"[
    {"light": {"name": "Kitchen Ceiling"}, "onoff": "on"},
    {"group": {"name": "Kitchen"}, "scene": {"name": "Dinner"}}
]"#;

#[tokio::test]
async fn empty_input_shows_nothing_and_queries_nothing() {
    let server = spawn_stub().await;
    let (mut console, _) = console(&server, true);

    type_text(&mut console, "k");
    console.dispatch(Event::Backspace);
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(server.stub.queries().is_empty());
    assert!(console.state().results.is_empty());
    assert_eq!(console.state().mode, ConsoleMode::Idle);
    assert!(console.state().compute_viewmodel(24, 80).rows.is_empty());
}

#[tokio::test]
async fn matching_light_renders_as_selected_crumb_row() {
    let server = spawn_stub().await;
    server.stub.respond("kitchen", KITCHEN);
    let (mut console, _) = console(&server, true);

    type_text(&mut console, "kitchen");
    await_results(&mut console).await;

    assert_eq!(server.stub.queries(), vec!["kitchen".to_string()]);
    let vm = console.state().compute_viewmodel(24, 80);
    assert_eq!(vm.rows.len(), 1);

    let row = &vm.rows[0];
    assert!(row.is_selected);
    assert_eq!(row.crumbs[0].text, "Kitchen Ceiling");
    assert_eq!(row.crumbs[0].color, CrumbColor::Light);
    assert_eq!(row.crumbs.last().unwrap().text, "On");
    assert_eq!(row.crumbs.last().unwrap().color, CrumbColor::On);

    let frame = console.frame(24, 80);
    assert!(frame.text.contains("Ceiling"));
}

#[tokio::test]
async fn selection_clamps_at_the_last_row() {
    let server = spawn_stub().await;
    server.stub.respond("kitchen", TWO);
    let (mut console, _) = console(&server, true);

    type_text(&mut console, "kitchen");
    await_results(&mut console).await;
    assert_eq!(console.state().results.selected_index(), Some(0));

    assert!(console.dispatch(Event::ArrowDown));
    assert_eq!(console.state().results.selected_index(), Some(1));
    assert!(!console.dispatch(Event::ArrowDown));
    assert_eq!(console.state().results.selected_index(), Some(1));
}

#[tokio::test]
async fn successful_submission_resets_the_search() {
    let server = spawn_stub().await;
    server.stub.respond("kitchen", TWO);
    let (mut console, _) = console(&server, true);

    type_text(&mut console, "kitchen");
    await_results(&mut console).await;
    console.dispatch(Event::Enter);
    assert!(!console.is_input_focused());
    step(&mut console).await;

    assert!(console.state().search_text.is_empty());
    assert!(console.state().results.is_empty());
    assert_eq!(console.state().mode, ConsoleMode::Idle);
    assert!(console.is_input_focused());
    assert_eq!(server.stub.submissions().len(), 1);
}

#[tokio::test]
async fn failed_submission_leaves_everything_in_place() {
    let server = spawn_stub().await;
    server.stub.respond("kitchen", TWO);
    server
        .stub
        .reject_submissions(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message": "bridge unreachable"}"#);
    let (mut console, _) = console(&server, true);

    type_text(&mut console, "kitchen");
    await_results(&mut console).await;
    console.dispatch(Event::ArrowDown);
    console.dispatch(Event::Enter);
    step(&mut console).await;

    let state = console.state();
    assert_eq!(state.search_text, "kitchen");
    assert_eq!(state.results.len(), 2);
    assert_eq!(state.results.selected_index(), Some(1));
    assert_eq!(state.mode, ConsoleMode::ResultsShown);
    assert!(state.status.as_deref().is_some_and(|s| s.contains("bridge unreachable")));

    let frame = console.frame(24, 100);
    assert!(frame.text.contains("bridge unreachable"));
}

#[tokio::test]
async fn third_success_hides_the_welcome_banner() {
    let server = spawn_stub().await;
    server.stub.respond("kitchen", KITCHEN);
    let (mut console, store) = console(&server, false);

    for round in 1..=3 {
        assert!(console.state().session.show_welcome(), "round {round}");
        type_text(&mut console, "kitchen");
        await_results(&mut console).await;
        console.dispatch(Event::Enter);
        step(&mut console).await;
    }

    assert!(!console.state().session.show_welcome());
    let record = store.snapshot();
    assert!(record.hide_welcome);
    assert!(record.dismissed_at.is_some());
}

#[tokio::test]
async fn late_response_of_an_earlier_query_is_discarded() {
    let server = spawn_stub().await;
    server.stub.respond_slow(
        "ki",
        r#"[{"special": {"message": "stale"}}]"#,
        Duration::from_millis(300),
    );
    server.stub.respond("kitchen", KITCHEN);
    let (mut console, _) = console(&server, true);

    type_text(&mut console, "ki");
    step(&mut console).await; // timer fires, "ki" goes out
    type_text(&mut console, "tchen");
    step(&mut console).await; // timer fires, "kitchen" goes out
    await_results(&mut console).await;
    assert_eq!(console.state().results.len(), 1);

    step(&mut console).await; // the slow "ki" response
    let selected = console.state().results.selected().unwrap();
    assert!(!selected.is_special());
    assert_eq!(console.state().results.len(), 1);

    let mut queries = server.stub.queries();
    queries.sort();
    assert_eq!(queries, vec!["ki".to_string(), "kitchen".to_string()]);
}

#[tokio::test]
async fn failed_query_keeps_the_previous_results() {
    let server = spawn_stub().await;
    server.stub.respond("kitchen", TWO);
    server
        .stub
        .respond_with("kitchenx", StatusCode::INTERNAL_SERVER_ERROR, "", Duration::ZERO);
    let (mut console, _) = console(&server, true);

    type_text(&mut console, "kitchen");
    await_results(&mut console).await;
    type_text(&mut console, "x");
    assert_eq!(console.state().mode, ConsoleMode::Searching);
    await_results(&mut console).await;

    assert_eq!(console.state().results.len(), 2);
    assert_eq!(console.state().search_text, "kitchenx");
}

#[tokio::test]
async fn repeated_enter_submits_once() {
    let server = spawn_stub().await;
    server.stub.respond("kitchen", KITCHEN);
    let (mut console, _) = console(&server, true);

    type_text(&mut console, "kitchen");
    await_results(&mut console).await;
    console.dispatch(Event::Enter);
    console.dispatch(Event::Enter);
    step(&mut console).await;

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(server.stub.submissions().len(), 1);
}

#[tokio::test]
async fn failed_first_query_does_not_claim_no_matches() {
    let server = spawn_stub().await;
    server
        .stub
        .respond_with("kitchen", StatusCode::BAD_GATEWAY, "", Duration::ZERO);
    let (mut console, _) = console(&server, true);

    type_text(&mut console, "kitchen");
    await_results(&mut console).await;

    assert!(console.state().results.is_empty());
    assert!(!console.frame(24, 80).text.contains("No matching"));

    type_text(&mut console, "x");
    await_results(&mut console).await;
    assert!(console.frame(24, 80).text.contains("No matching"));
}
