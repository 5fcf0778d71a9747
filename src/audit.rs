//! Audit log correlation.
//!
//! State-change events from the gateway do not say who caused them. The guild
//! audit log does, but it is written by Discord with observable delay and
//! sometimes not at all. This module reconciles the two: given an audit
//! category and the affected entity's id, it polls the most recent audit page
//! with a bounded retry budget and returns the matching entry if one shows up
//! within the freshness window.
//!
//! The lookup is a pure async function over an [`AuditLogSource`], so
//! classifiers stay testable without a gateway connection. Nothing here holds
//! state between calls; concurrent lookups for independent events are safe.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serenity::all::{GuildId, User};
use serenity::async_trait;
use serenity::http::Http;
use serenity::model::guild::audit_log::{
    Action, AuditLogEntry as RawAuditLogEntry, ChannelOverwriteAction, MemberAction, RoleAction,
};

use crate::error::AppError;

/// Administrative action category to search the audit log for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditKind {
    RoleCreate,
    RoleDelete,
    MemberRoleUpdate,
    MemberUpdate,
    MemberKick,
    MemberBanAdd,
    MemberBanRemove,
    MemberDisconnect,
    MemberMove,
    OverwriteCreate,
    OverwriteUpdate,
    OverwriteDelete,
}

impl AuditKind {
    /// The serenity audit log action this category filters on.
    pub fn action(self) -> Action {
        match self {
            Self::RoleCreate => Action::Role(RoleAction::Create),
            Self::RoleDelete => Action::Role(RoleAction::Delete),
            Self::MemberRoleUpdate => Action::Member(MemberAction::RoleUpdate),
            Self::MemberUpdate => Action::Member(MemberAction::Update),
            Self::MemberKick => Action::Member(MemberAction::Kick),
            Self::MemberBanAdd => Action::Member(MemberAction::BanAdd),
            Self::MemberBanRemove => Action::Member(MemberAction::BanRemove),
            Self::MemberDisconnect => Action::Member(MemberAction::MemberDisconnect),
            Self::MemberMove => Action::Member(MemberAction::MemberMove),
            Self::OverwriteCreate => Action::ChannelOverwrite(ChannelOverwriteAction::Create),
            Self::OverwriteUpdate => Action::ChannelOverwrite(ChannelOverwriteAction::Update),
            Self::OverwriteDelete => Action::ChannelOverwrite(ChannelOverwriteAction::Delete),
        }
    }
}

/// One administrative action read from the audit trail.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    /// Display tag of the moderator that performed the action.
    pub executor: String,
    /// Id of the entity the action was applied to, when the trail records one.
    pub target_id: Option<u64>,
    /// Reason supplied by the moderator, if any.
    pub reason: Option<String>,
    /// When the entry was written, derived from its snowflake id.
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    fn from_raw(raw: &RawAuditLogEntry, users: &[User]) -> Self {
        // The audit response carries the referenced users separately; fall
        // back to the bare id when the executor is not included
        let executor = users
            .iter()
            .find(|user| user.id == raw.user_id)
            .map(User::tag)
            .unwrap_or_else(|| raw.user_id.to_string());

        let created_at =
            DateTime::from_timestamp(raw.id.created_at().unix_timestamp(), 0).unwrap_or_default();

        Self {
            executor,
            target_id: raw.target_id.map(|id| id.get()),
            reason: raw.reason.clone(),
            created_at,
        }
    }

    /// Whether this entry can be attributed to a just-observed state change
    /// for `target_id`. Entries older than the freshness window never match,
    /// even for the right target; a stale entry for the same entity must not
    /// be mistaken for the cause of a new event.
    pub fn matches(&self, target_id: u64, now: DateTime<Utc>, max_age: chrono::Duration) -> bool {
        self.target_id == Some(target_id) && now.signed_duration_since(self.created_at) < max_age
    }
}

/// Read access to a guild's audit trail.
///
/// Implemented against the Discord HTTP API in production and by a scripted
/// fake in tests.
#[async_trait]
pub trait AuditLogSource: Send + Sync {
    /// Fetches the most recent audit entries for one action category,
    /// newest first.
    async fn fetch_audit_log(&self, kind: AuditKind, limit: u8)
        -> Result<Vec<AuditEntry>, AppError>;
}

/// Knobs for the bounded retry loop.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// How many fetches to attempt before giving up.
    pub max_attempts: usize,
    /// Entries requested per fetch.
    pub page_size: u8,
    /// Pause between attempts, absorbing the trail's write delay.
    pub retry_delay: Duration,
    /// Maximum entry age that still counts as caused-by-this-event.
    pub max_age: chrono::Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            page_size: 10,
            retry_delay: Duration::from_millis(1200),
            max_age: chrono::Duration::seconds(30),
        }
    }
}

/// Result of attributing a state change to a moderator.
///
/// "Nobody found" is a first-class outcome, not an error: many transitions
/// (voluntary voice leaves, ordinary departures) legitimately have no audit
/// entry. How an unattributed event is rendered is up to the caller.
#[derive(Debug, Clone)]
pub enum Attribution {
    Attributed(AuditEntry),
    Unattributed,
}

impl Attribution {
    pub fn entry(&self) -> Option<&AuditEntry> {
        match self {
            Self::Attributed(entry) => Some(entry),
            Self::Unattributed => None,
        }
    }
}

/// Looks for a fresh audit entry targeting `target_id` in the given category.
///
/// Performs up to `policy.max_attempts` fetches, sleeping `policy.retry_delay`
/// between them; the audit trail is eventually consistent and the entry for a
/// just-observed event is often not visible on the first read. Returns as soon
/// as a match is found. An empty page is not an error, just a miss for that
/// attempt. A failed fetch is an error and propagates immediately; the retry
/// budget only covers the trail being behind, not being unreachable.
///
/// # Arguments
/// - `source` - Audit trail to query
/// - `kind` - Action category to search
/// - `target_id` - Id of the affected entity (user, role, or channel)
/// - `policy` - Retry and freshness settings
///
/// # Returns
/// - `Ok(Some(entry))` - A fresh entry for the target was found
/// - `Ok(None)` - No match after all attempts
/// - `Err(AppError)` - The trail could not be fetched
pub async fn find_recent_entry<S: AuditLogSource>(
    source: &S,
    kind: AuditKind,
    target_id: u64,
    policy: &RetryPolicy,
) -> Result<Option<AuditEntry>, AppError> {
    for attempt in 0..policy.max_attempts {
        let entries = source.fetch_audit_log(kind, policy.page_size).await?;
        let now = Utc::now();

        if let Some(entry) = entries
            .into_iter()
            .find(|entry| entry.matches(target_id, now, policy.max_age))
        {
            return Ok(Some(entry));
        }

        if attempt + 1 < policy.max_attempts {
            tokio::time::sleep(policy.retry_delay).await;
        }
    }

    Ok(None)
}

/// [`find_recent_entry`] with the degraded error handling classifiers want:
/// a fetch failure is logged and reported as [`Attribution::Unattributed`],
/// so one unreachable audit read never takes down an event handler.
pub async fn attribute<S: AuditLogSource>(
    source: &S,
    kind: AuditKind,
    target_id: u64,
    policy: &RetryPolicy,
) -> Attribution {
    match find_recent_entry(source, kind, target_id, policy).await {
        Ok(Some(entry)) => Attribution::Attributed(entry),
        Ok(None) => Attribution::Unattributed,
        Err(e) => {
            tracing::warn!(
                "Audit log fetch for {:?} (target {}) failed: {}",
                kind,
                target_id,
                e
            );
            Attribution::Unattributed
        }
    }
}

/// Audit trail of one guild, read through the Discord HTTP API.
pub struct GuildAuditSource<'a> {
    http: &'a Http,
    guild_id: GuildId,
}

impl<'a> GuildAuditSource<'a> {
    pub fn new(http: &'a Http, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl AuditLogSource for GuildAuditSource<'_> {
    async fn fetch_audit_log(
        &self,
        kind: AuditKind,
        limit: u8,
    ) -> Result<Vec<AuditEntry>, AppError> {
        let logs = self
            .guild_id
            .audit_logs(self.http, Some(kind.action()), None, None, Some(limit))
            .await?;

        let users: Vec<User> = logs.users.values().cloned().collect();
        Ok(logs
            .entries
            .iter()
            .map(|entry| AuditEntry::from_raw(entry, &users))
            .collect())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use serenity::async_trait;

    use super::{AuditEntry, AuditKind, AuditLogSource, RetryPolicy};
    use crate::error::AppError;

    /// Scripted stand-in for the guild audit trail.
    ///
    /// Pages are returned in order, one per fetch; once the script runs out
    /// the last page repeats. A per-kind script answers each category with
    /// its own entries instead, which is what the probing classifiers need.
    pub struct FakeAuditSource {
        pages: Mutex<Vec<Vec<AuditEntry>>>,
        by_kind: Vec<(AuditKind, Vec<AuditEntry>)>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeAuditSource {
        /// A trail with no entries at all.
        pub fn empty() -> Self {
            Self::with_pages(vec![Vec::new()])
        }

        /// A trail that returns the same entries on every fetch.
        pub fn with_entries(entries: Vec<AuditEntry>) -> Self {
            Self::with_pages(vec![entries])
        }

        /// A trail that returns one scripted page per fetch.
        pub fn with_pages(pages: Vec<Vec<AuditEntry>>) -> Self {
            Self {
                pages: Mutex::new(pages),
                by_kind: Vec::new(),
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        /// A trail that answers each category with its own entries.
        pub fn by_kind(entries: Vec<(AuditKind, Vec<AuditEntry>)>) -> Self {
            Self {
                pages: Mutex::new(Vec::new()),
                by_kind: entries,
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        /// A trail that errors on every fetch.
        pub fn failing() -> Self {
            Self {
                pages: Mutex::new(Vec::new()),
                by_kind: Vec::new(),
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        /// Number of fetches made so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuditLogSource for FakeAuditSource {
        async fn fetch_audit_log(
            &self,
            kind: AuditKind,
            _limit: u8,
        ) -> Result<Vec<AuditEntry>, AppError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);

            if !self.by_kind.is_empty() {
                let page = self
                    .by_kind
                    .iter()
                    .find(|(k, _)| *k == kind)
                    .map(|(_, entries)| entries.clone())
                    .unwrap_or_default();
                return Ok(page);
            }

            if self.fail {
                return Err(AppError::from(serenity::Error::Other(
                    "audit log unavailable",
                )));
            }

            let pages = self.pages.lock().unwrap();
            let page = pages
                .get(call)
                .or_else(|| pages.last())
                .cloned()
                .unwrap_or_default();
            Ok(page)
        }
    }

    /// A fresh entry targeting `target_id`.
    pub fn entry(executor: &str, target_id: u64) -> AuditEntry {
        AuditEntry {
            executor: executor.to_string(),
            target_id: Some(target_id),
            reason: None,
            created_at: chrono::Utc::now(),
        }
    }

    /// A fresh entry with a moderator-supplied reason.
    pub fn entry_with_reason(executor: &str, target_id: u64, reason: &str) -> AuditEntry {
        AuditEntry {
            reason: Some(reason.to_string()),
            ..entry(executor, target_id)
        }
    }

    /// An entry old enough to fall outside the freshness window.
    pub fn stale_entry(executor: &str, target_id: u64) -> AuditEntry {
        AuditEntry {
            created_at: chrono::Utc::now() - chrono::Duration::seconds(120),
            ..entry(executor, target_id)
        }
    }

    /// Default policy without the inter-attempt sleep, so tests do not wait.
    pub fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            retry_delay: std::time::Duration::ZERO,
            ..RetryPolicy::default()
        }
    }
}
