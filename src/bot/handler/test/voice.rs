use test_utils::serenity::{create_test_bot_voice_state, create_test_voice_state};

use super::*;
use crate::bot::handler::voice::classify_voice_update;

/// Tests that joining a voice channel from nowhere is reported without
/// consulting the audit trail; joins are self-initiated by definition.
///
/// Expected: one "Voice Join" notification, zero audit fetches
#[tokio::test]
async fn join_is_reported_without_correlation() {
    let source = FakeAuditSource::empty();
    let old = create_test_voice_state(1111, "wumpus", None, false, false);
    let new = create_test_voice_state(1111, "wumpus", Some(3001), false, false);

    let notifications = classify_voice_update(&source, &fast_policy(), Some(&old), &new).await;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Voice Join");
    assert_eq!(field(&notifications[0], "Channel"), "<#3001>");
    assert_eq!(source.calls(), 0);
}

/// Tests that a leave with a fresh disconnect audit entry is reported as a
/// forced disconnect naming the entry's executor.
///
/// Expected: one "Voice Disconnect" notification with the executor
#[tokio::test]
async fn forced_disconnect_names_executor() {
    let source = FakeAuditSource::with_entries(vec![entry("Moderator#0001", 1111)]);
    let old = create_test_voice_state(1111, "wumpus", Some(3001), false, false);
    let new = create_test_voice_state(1111, "wumpus", None, false, false);

    let notifications = classify_voice_update(&source, &fast_policy(), Some(&old), &new).await;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Voice Disconnect");
    assert_eq!(field(&notifications[0], "Disconnected by"), "Moderator#0001");
    assert_eq!(source.calls(), 1);
}

/// Tests that a leave without any audit entry is reported as voluntary.
///
/// Expected: one "Voice Leave" notification with the explanatory note
#[tokio::test]
async fn unattributed_leave_is_voluntary() {
    let source = FakeAuditSource::empty();
    let old = create_test_voice_state(1111, "wumpus", Some(3001), false, false);
    let new = create_test_voice_state(1111, "wumpus", None, false, false);

    let notifications = classify_voice_update(&source, &fast_policy(), Some(&old), &new).await;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Voice Leave");
    assert_eq!(notifications[0].color, color::GREY);
    assert!(field(&notifications[0], "Note").contains("Left on their own"));
}

/// Tests that toggling the server mute flag is reported with the new state
/// and the attributed moderator.
///
/// Expected: one "Server Mute" notification, state "Muted"
#[tokio::test]
async fn mute_toggle_reports_new_state() {
    let source = FakeAuditSource::with_entries(vec![entry("Moderator#0001", 1111)]);
    let old = create_test_voice_state(1111, "wumpus", Some(3001), false, false);
    let new = create_test_voice_state(1111, "wumpus", Some(3001), true, false);

    let notifications = classify_voice_update(&source, &fast_policy(), Some(&old), &new).await;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Server Mute");
    assert_eq!(field(&notifications[0], "State"), "Muted");
    assert_eq!(field(&notifications[0], "By"), "Moderator#0001");
}

/// Tests that lifting the server deafen flag is reported as an undeafen.
///
/// Expected: one "Server Deafen" notification, state "Undeafened"
#[tokio::test]
async fn deafen_lift_reports_new_state() {
    let source = FakeAuditSource::empty();
    let old = create_test_voice_state(1111, "wumpus", Some(3001), false, true);
    let new = create_test_voice_state(1111, "wumpus", Some(3001), false, false);

    let notifications = classify_voice_update(&source, &fast_policy(), Some(&old), &new).await;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Server Deafen");
    assert_eq!(field(&notifications[0], "State"), "Undeafened");
    assert_eq!(field(&notifications[0], "By"), "Unknown");
}

/// Tests that a channel change with a fresh move audit entry is reported as
/// a forced move.
///
/// Expected: one "Voice Move" notification with from/to channels
#[tokio::test]
async fn attributed_move_names_mover() {
    let source = FakeAuditSource::with_entries(vec![entry("Moderator#0001", 1111)]);
    let old = create_test_voice_state(1111, "wumpus", Some(3001), false, false);
    let new = create_test_voice_state(1111, "wumpus", Some(3002), false, false);

    let notifications = classify_voice_update(&source, &fast_policy(), Some(&old), &new).await;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Voice Move");
    assert_eq!(field(&notifications[0], "From"), "<#3001>");
    assert_eq!(field(&notifications[0], "To"), "<#3002>");
    assert_eq!(field(&notifications[0], "Moved by"), "Moderator#0001");
}

/// Tests that a channel change without an audit entry is reported as a
/// self-initiated switch.
///
/// Expected: one "Channel Switch" notification
#[tokio::test]
async fn unattributed_move_is_a_switch() {
    let source = FakeAuditSource::empty();
    let old = create_test_voice_state(1111, "wumpus", Some(3001), false, false);
    let new = create_test_voice_state(1111, "wumpus", Some(3002), false, false);

    let notifications = classify_voice_update(&source, &fast_policy(), Some(&old), &new).await;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Channel Switch");
}

/// Tests that events for bot accounts are ignored entirely.
///
/// Expected: no notifications, zero audit fetches
#[tokio::test]
async fn ignores_bot_accounts() {
    let source = FakeAuditSource::empty();
    let old = create_test_bot_voice_state(1111, "beep", None);
    let new = create_test_bot_voice_state(1111, "beep", Some(3001));

    let notifications = classify_voice_update(&source, &fast_policy(), Some(&old), &new).await;

    assert!(notifications.is_empty());
    assert_eq!(source.calls(), 0);
}

/// Tests that classifying the same event twice against the same trail state
/// yields structurally identical notifications; duplication is acceptable,
/// corruption is not.
///
/// Expected: identical titles and fields across both runs
#[tokio::test]
async fn repeated_classification_is_stable() {
    let source = FakeAuditSource::by_kind(vec![(
        AuditKind::MemberDisconnect,
        vec![entry("Moderator#0001", 1111)],
    )]);
    let old = create_test_voice_state(1111, "wumpus", Some(3001), false, false);
    let new = create_test_voice_state(1111, "wumpus", None, false, false);

    let first = classify_voice_update(&source, &fast_policy(), Some(&old), &new).await;
    let second = classify_voice_update(&source, &fast_policy(), Some(&old), &new).await;

    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].title, second[0].title);
    assert_eq!(first[0].fields, second[0].fields);
}
