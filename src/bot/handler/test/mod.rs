use crate::audit::fake::{entry, entry_with_reason, fast_policy, FakeAuditSource};
use crate::audit::AuditKind;
use crate::notify::{color, Notification};

mod ban;
mod voice;

/// Looks up a field value by name, panicking when the field is absent.
fn field<'a>(notification: &'a Notification, name: &str) -> &'a str {
    notification
        .fields
        .iter()
        .find(|(field_name, _)| field_name == name)
        .map(|(_, value)| value.as_str())
        .unwrap_or_else(|| panic!("notification has no field named {name}"))
}
