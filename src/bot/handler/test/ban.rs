use test_utils::serenity::create_test_user;

use super::*;
use crate::bot::handler::ban::{classify_ban_added, classify_ban_removed};

/// Tests that a ban with a fresh audit entry names the moderator and their
/// reason.
///
/// Expected: "Member Banned" with executor and reason fields
#[tokio::test]
async fn ban_reports_executor_and_reason() {
    let source =
        FakeAuditSource::with_entries(vec![entry_with_reason("Moderator#0001", 1111, "raiding")]);
    let user = create_test_user(1111, "wumpus");

    let notification = classify_ban_added(&source, &fast_policy(), &user).await;

    assert_eq!(notification.title, "Member Banned");
    assert_eq!(field(&notification, "User"), "wumpus#0001");
    assert_eq!(field(&notification, "Banned by"), "Moderator#0001");
    assert_eq!(field(&notification, "Reason"), "raiding");
}

/// Tests that a ban is still logged when correlation misses; the act itself
/// is administrative even when nobody can be named.
///
/// Expected: "Member Banned" with unknown executor and no reason
#[tokio::test]
async fn unattributed_ban_is_still_logged() {
    let source = FakeAuditSource::empty();
    let user = create_test_user(1111, "wumpus");

    let notification = classify_ban_added(&source, &fast_policy(), &user).await;

    assert_eq!(notification.title, "Member Banned");
    assert_eq!(field(&notification, "Banned by"), "Unknown");
    assert_eq!(field(&notification, "Reason"), "None");
}

/// Tests that an unreachable audit trail degrades to an unknown executor
/// instead of failing the handler.
///
/// Expected: "Member Banned" with unknown executor
#[tokio::test]
async fn fetch_failure_degrades_to_unknown() {
    let source = FakeAuditSource::failing();
    let user = create_test_user(1111, "wumpus");

    let notification = classify_ban_added(&source, &fast_policy(), &user).await;

    assert_eq!(field(&notification, "Banned by"), "Unknown");
}

/// Tests that lifting a ban names the moderator who lifted it.
///
/// Expected: "Ban Lifted" with the executor
#[tokio::test]
async fn unban_reports_executor() {
    let source = FakeAuditSource::with_entries(vec![entry("Moderator#0001", 1111)]);
    let user = create_test_user(1111, "wumpus");

    let notification = classify_ban_removed(&source, &fast_policy(), &user).await;

    assert_eq!(notification.title, "Ban Lifted");
    assert_eq!(field(&notification, "Unbanned by"), "Moderator#0001");
}
