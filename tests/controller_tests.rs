use site_health::analysis::error::{
    AnalysisError, CONNECTION_FAILURE_MESSAGE, FALLBACK_FAILURE_MESSAGE,
};
use site_health::analyze_url;
use site_health::client::transport::{ReplayTransport, TransportResponse};
use site_health::controller::controller::{InputController, SubmitOutcome, interpret};
use site_health::render::theme::Theme;

use crate::common::{
    fixtures::{FULL_PAYLOAD, full_view_model},
    mock_transport::MockTransport,
};

mod common;

// ============================================================================
// Initial state and inputs
// ============================================================================

#[test]
fn new_controller_is_idle_and_dark() {
    let controller = InputController::new(MockTransport::new());
    assert_eq!(controller.url(), "");
    assert!(!controller.is_busy());
    assert!(controller.error_message().is_none());
    assert!(controller.report().is_none());
    assert_eq!(controller.theme(), Theme::Dark);
}

#[test]
fn set_url_replaces_without_validation() {
    let mut controller = InputController::new(MockTransport::new());
    controller.set_url("https://example.com");
    controller.set_url("not a url at all");
    assert_eq!(controller.url(), "not a url at all");
}

#[test]
fn toggle_theme_flips_back_and_forth() {
    let mut controller = InputController::new(MockTransport::new());
    assert_eq!(controller.toggle_theme(), Theme::Light);
    assert_eq!(controller.toggle_theme(), Theme::Dark);
}

// ============================================================================
// Success path
// ============================================================================

#[test]
fn successful_submit_stores_normalized_report() {
    let transport = MockTransport::new().respond(200, FULL_PAYLOAD);
    let mut controller = InputController::new(transport);
    controller.set_url("https://example.com");

    let outcome = controller.submit();

    assert_eq!(outcome, SubmitOutcome::Report(full_view_model()));
    assert_eq!(controller.report(), Some(&full_view_model()));
    assert!(controller.error_message().is_none());
    assert!(!controller.is_busy());
    assert_eq!(controller.transport().sent_urls(), vec!["https://example.com"]);
}

#[test]
fn end_to_end_full_payload_feeds_charts() {
    let transport = MockTransport::new().respond(200, FULL_PAYLOAD);
    let mut controller = InputController::new(transport);
    controller.set_url("https://example.com");
    controller.submit();

    let dashboard = controller.dashboard();
    assert_eq!(dashboard.charts.load_times.values, [50.0, 30.0, 120.0, 300.0]);
    assert_eq!(dashboard.charts.seo.values, [60, 40]);
    let report = dashboard.report.unwrap();
    assert_eq!(report.scores.security, 100);
    assert_eq!(report.issues.critical, vec!["Missing title tag"]);
}

#[test]
fn any_2xx_status_counts_as_success() {
    let transport = MockTransport::new().respond(201, r#"{"scores": {"seo": 55}}"#);
    let mut controller = InputController::new(transport);
    assert!(controller.submit().is_report());
    assert_eq!(controller.report().unwrap().scores.seo, 55);
}

#[test]
fn empty_url_is_still_sent() {
    let transport = MockTransport::new().respond(200, "{}");
    let mut controller = InputController::new(transport);
    controller.submit();
    assert_eq!(controller.transport().sent_urls(), vec![""]);
}

#[test]
fn success_payload_with_error_field_is_still_success() {
    let transport = MockTransport::new().respond(200, r#"{"error": "ignored", "description": "ok"}"#);
    let mut controller = InputController::new(transport);
    assert!(controller.submit().is_report());
    assert!(controller.error_message().is_none());
}

// ============================================================================
// Failure paths
// ============================================================================

#[test]
fn rejection_shows_service_error_message() {
    let transport = MockTransport::new().respond(400, r#"{"error":"Invalid URL"}"#);
    let mut controller = InputController::new(transport);

    let outcome = controller.submit();

    assert_eq!(outcome, SubmitOutcome::Failed("Invalid URL".into()));
    assert_eq!(controller.error_message(), Some("Invalid URL"));
    assert!(controller.report().is_none());
    assert!(!controller.is_busy());
    assert!(!controller.dashboard().has_report());
}

#[test]
fn rejection_without_error_uses_fallback() {
    let transport = MockTransport::new()
        .respond(500, "{}")
        .respond(500, r#"{"error": ""}"#)
        .respond(502, r#"{"error": null}"#);
    let mut controller = InputController::new(transport);

    for _ in 0..3 {
        controller.submit();
        assert_eq!(controller.error_message(), Some(FALLBACK_FAILURE_MESSAGE));
    }
}

#[test]
fn transport_failure_shows_connection_message_and_clears_busy() {
    let transport = MockTransport::new().fail("connection refused");
    let mut controller = InputController::new(transport);

    let outcome = controller.submit();

    assert_eq!(outcome, SubmitOutcome::Failed(CONNECTION_FAILURE_MESSAGE.into()));
    assert_eq!(controller.error_message(), Some("Error connecting to the server."));
    assert!(!controller.is_busy());
    assert!(controller.report().is_none());
}

#[test]
fn non_json_body_is_a_connection_error() {
    let transport = MockTransport::new()
        .respond(200, "<html>oops</html>")
        .respond(500, "Internal Server Error")
        .respond(200, "[1, 2, 3]");
    let mut controller = InputController::new(transport);

    for _ in 0..3 {
        controller.submit();
        assert_eq!(controller.error_message(), Some(CONNECTION_FAILURE_MESSAGE));
        assert!(!controller.is_busy());
    }
}

#[test]
fn failure_after_success_discards_previous_report() {
    let transport = MockTransport::new()
        .respond(200, FULL_PAYLOAD)
        .respond(400, r#"{"error": "URL is required"}"#);
    let mut controller = InputController::new(transport);

    controller.submit();
    assert!(controller.report().is_some());

    controller.submit();
    assert!(controller.report().is_none());
    assert_eq!(controller.error_message(), Some("URL is required"));
}

#[test]
fn success_after_failure_clears_error() {
    let transport = MockTransport::new()
        .fail("timeout")
        .respond(200, FULL_PAYLOAD);
    let mut controller = InputController::new(transport);

    controller.submit();
    assert!(controller.error_message().is_some());

    controller.submit();
    assert!(controller.error_message().is_none());
    assert!(controller.report().is_some());
}

#[test]
fn new_report_replaces_old_one_without_merging() {
    let transport = MockTransport::new()
        .respond(200, FULL_PAYLOAD)
        .respond(200, r#"{"scores": {"performance": 10}}"#);
    let mut controller = InputController::new(transport);

    controller.submit();
    controller.submit();

    let report = controller.report().unwrap();
    assert_eq!(report.scores.performance, 10);
    assert_eq!(report.scores.seo, 0);
    assert!(report.issues.warnings.is_empty());
    assert!(report.recommendations.is_empty());
}

// ============================================================================
// begin_submit / resolve and request fencing
// ============================================================================

#[test]
fn begin_submit_marks_busy_and_clears_state() {
    let transport = MockTransport::new().respond(400, r#"{"error": "bad"}"#);
    let mut controller = InputController::new(transport);
    controller.submit();
    assert!(controller.error_message().is_some());

    controller.set_url("https://next.example");
    let pending = controller.begin_submit();

    assert!(controller.is_busy());
    assert!(controller.error_message().is_none());
    assert!(controller.report().is_none());
    assert_eq!(pending.request.url, "https://next.example");
    assert!(controller.dashboard().busy);
}

#[test]
fn latest_request_wins_when_older_resolves_last() {
    let mut controller = InputController::new(MockTransport::new());

    controller.set_url("https://first.example");
    let first = controller.begin_submit();
    controller.set_url("https://second.example");
    let second = controller.begin_submit();
    assert!(second.id > first.id);

    let outcome = controller.resolve(
        &second,
        Ok(TransportResponse::new(200, r#"{"scores": {"seo": 20}}"#)),
    );
    assert!(outcome.is_report());
    assert!(!controller.is_busy());

    let stale = controller.resolve(&first, Ok(TransportResponse::new(200, FULL_PAYLOAD)));
    assert_eq!(stale, SubmitOutcome::Superseded);
    assert_eq!(controller.report().unwrap().scores.seo, 20);
}

#[test]
fn stale_resolution_leaves_busy_until_latest_resolves() {
    let mut controller = InputController::new(MockTransport::new());

    let first = controller.begin_submit();
    let second = controller.begin_submit();

    let stale = controller.resolve(&first, Err(AnalysisError::Transport("reset".into())));
    assert_eq!(stale, SubmitOutcome::Superseded);
    assert!(controller.is_busy());
    assert!(controller.error_message().is_none());

    controller.resolve(&second, Ok(TransportResponse::new(200, FULL_PAYLOAD)));
    assert!(!controller.is_busy());
    assert_eq!(controller.report(), Some(&full_view_model()));
}

// ============================================================================
// interpret / analyze_url / replay
// ============================================================================

#[test]
fn interpret_maps_status_to_errors() {
    let err = interpret(TransportResponse::new(404, r#"{"error": "Not found"}"#)).unwrap_err();
    match &err {
        AnalysisError::Rejected { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message.as_deref(), Some("Not found"));
        }
        other => panic!("Expected Rejected, got {:?}", other),
    }
    assert_eq!(err.user_message(), "Not found");

    let err = interpret(TransportResponse::new(200, "not json")).unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedPayload(_)));
}

#[test]
fn analyze_url_one_shot() {
    let transport = MockTransport::new().respond(200, FULL_PAYLOAD);
    let model = analyze_url(&transport, "https://example.com").unwrap();
    assert_eq!(model, full_view_model());
}

#[test]
fn replay_transport_answers_every_request() {
    let mut controller = InputController::new(ReplayTransport::new(200, FULL_PAYLOAD));
    controller.submit();
    controller.submit();
    assert_eq!(controller.report(), Some(&full_view_model()));
}
