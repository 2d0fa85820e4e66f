use super::{CONTAINER, fixture};
use crate::scripted_runner::{COMPOSE_DOWN, COMPOSE_UP, INSPECT};
use crate::{CancelTopic, ScriptedReply};

use gs_core::CommandResult;

use googletest::prelude::*;
use tokio::time::{Duration, timeout};

#[tokio::test]
async fn given_healthy_service_when_start_then_ignored_without_action() {
    // Given
    let fx = fixture();
    fx.runner.script(INSPECT, [ScriptedReply::healthy()]);

    // When
    let result = fx.plane.controller.start().await;

    // Then
    assert_eq!(result, CommandResult::Ignored);
    assert_that!(fx.runner.count(COMPOSE_UP), eq(0));
}

#[tokio::test]
async fn given_starting_service_when_start_then_ignored_without_action() {
    let fx = fixture();
    fx.runner.script(INSPECT, [ScriptedReply::starting()]);

    let result = fx.plane.controller.start().await;

    assert_eq!(result, CommandResult::Ignored);
    assert_that!(fx.runner.count(COMPOSE_UP), eq(0));
}

#[tokio::test]
async fn given_inactive_service_when_start_then_compose_up_and_started_signal() {
    let fx = fixture();
    fx.runner
        .script(INSPECT, [ScriptedReply::no_such_container(CONTAINER)]);
    fx.runner.script(COMPOSE_UP, [ScriptedReply::ok()]);
    let mut guard = fx.plane.bus.subscribe(&[CancelTopic::ServiceStarted]);

    let result = fx.plane.controller.start().await;

    assert_eq!(result, CommandResult::Success);
    assert!(
        fx.runner
            .calls()
            .contains(&"docker compose -f /srv/game/compose.yaml up -d".to_string())
    );
    assert_eq!(guard.wait().await, CancelTopic::ServiceStarted);
}

#[tokio::test]
async fn given_failed_service_when_start_then_action_attempted() {
    let fx = fixture();
    fx.runner
        .script(INSPECT, [ScriptedReply::running(Some("unhealthy"))]);
    fx.runner.script(COMPOSE_UP, [ScriptedReply::ok()]);

    let result = fx.plane.controller.start().await;

    assert_eq!(result, CommandResult::Success);
}

#[tokio::test]
async fn given_compose_up_fails_when_start_then_error_carries_cause() {
    let fx = fixture();
    fx.runner.script(INSPECT, [ScriptedReply::exited()]);
    fx.runner.script(
        COMPOSE_UP,
        [ScriptedReply::failure(
            17,
            "service \"game\" refers to undefined volume",
        )],
    );

    let result = fx.plane.controller.start().await;

    let CommandResult::Error { detail } = result else {
        panic!("expected error, got {:?}", result);
    };
    assert_that!(detail, contains_substring("undefined volume"));
    assert_that!(detail, contains_substring("17"));
}

#[tokio::test]
async fn given_inactive_service_when_stop_then_ignored_without_action() {
    let fx = fixture();
    fx.runner.script(INSPECT, [ScriptedReply::exited()]);

    let result = fx.plane.controller.stop().await;

    assert_eq!(result, CommandResult::Ignored);
    assert_that!(fx.runner.count(COMPOSE_DOWN), eq(0));
}

#[tokio::test]
async fn given_running_service_when_stop_then_compose_down_and_stopped_signal() {
    let fx = fixture();
    fx.runner.script(INSPECT, [ScriptedReply::healthy()]);
    fx.runner.script(COMPOSE_DOWN, [ScriptedReply::ok()]);
    let mut guard = fx.plane.bus.subscribe(&[CancelTopic::ServiceStopped]);

    let result = fx.plane.controller.stop().await;

    assert_eq!(result, CommandResult::Success);
    assert_that!(fx.runner.count(COMPOSE_DOWN), eq(1));
    assert_eq!(guard.wait().await, CancelTopic::ServiceStopped);
}

#[tokio::test]
async fn given_compose_down_fails_when_stop_then_error_and_no_signal() {
    let fx = fixture();
    fx.runner.script(INSPECT, [ScriptedReply::starting()]);
    fx.runner
        .script(COMPOSE_DOWN, [ScriptedReply::failure(1, "daemon unreachable")]);
    let mut guard = fx.plane.bus.subscribe(&[CancelTopic::ServiceStopped]);

    let result = fx.plane.controller.stop().await;

    assert_that!(result.label(), eq("error"));
    let signalled = timeout(Duration::from_millis(20), guard.wait()).await;
    assert!(signalled.is_err());
}

#[tokio::test]
async fn given_concurrent_starts_when_issued_then_only_one_action() {
    let fx = fixture();
    // The second start probes after the first finished bringing it up
    fx.runner.script(
        INSPECT,
        [ScriptedReply::exited(), ScriptedReply::starting()],
    );
    fx.runner.script(COMPOSE_UP, [ScriptedReply::ok()]);

    let (first, second) = tokio::join!(
        fx.plane.controller.start(),
        fx.plane.controller.start()
    );

    assert_eq!(first, CommandResult::Success);
    assert_eq!(second, CommandResult::Ignored);
    assert_that!(fx.runner.count(COMPOSE_UP), eq(1));
}
