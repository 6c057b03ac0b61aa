//! Pending invite acceptances.
//!
//! # Responsibility
//! - Remember which invites should be accepted, and when.
//! - Hand out due entries in the order they were scheduled.
//!
//! # Invariants
//! - At most one pending entry per `(workspace_id, email)` key; scheduling
//!   the same key again replaces the earlier entry.
//! - The scheduler never touches state. Firing is the store's job, and the
//!   store re-validates before applying.

use crate::model::member::MemberRole;
use crate::model::workspace::WorkspaceId;
use std::time::Duration;

/// One scheduled acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInvite {
    pub workspace_id: WorkspaceId,
    pub email: String,
    /// Role granted when the invite is accepted.
    pub role: MemberRole,
    /// Epoch millis at or after which the acceptance fires.
    pub due_at_millis: i64,
}

/// Delay queue keyed by `(workspace_id, email)`.
#[derive(Debug, Clone)]
pub struct InviteScheduler {
    delay_millis: i64,
    // Insertion order doubles as the tie-break between equal deadlines.
    pending: Vec<PendingInvite>,
}

impl InviteScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_millis: i64::try_from(delay.as_millis()).unwrap_or(i64::MAX),
            pending: Vec::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.delay_millis).unwrap_or(0))
    }

    /// Schedules acceptance `delay` after `now_millis`.
    ///
    /// Returns the due time of the new entry.
    pub fn schedule(
        &mut self,
        workspace_id: WorkspaceId,
        email: impl Into<String>,
        role: MemberRole,
        now_millis: i64,
    ) -> i64 {
        let email = email.into();
        self.cancel(workspace_id, &email);
        let due_at_millis = now_millis.saturating_add(self.delay_millis);
        self.pending.push(PendingInvite {
            workspace_id,
            email,
            role,
            due_at_millis,
        });
        due_at_millis
    }

    /// Drops the entry for one key. Returns whether one existed.
    pub fn cancel(&mut self, workspace_id: WorkspaceId, email: &str) -> bool {
        let before = self.pending.len();
        self.pending
            .retain(|invite| !(invite.workspace_id == workspace_id && invite.email == email));
        self.pending.len() != before
    }

    /// Drops every entry of one workspace. Returns how many were dropped.
    pub fn cancel_workspace(&mut self, workspace_id: WorkspaceId) -> usize {
        let before = self.pending.len();
        self.pending
            .retain(|invite| invite.workspace_id != workspace_id);
        before - self.pending.len()
    }

    /// Removes and returns entries due at `now_millis`, earliest first.
    pub fn take_due(&mut self, now_millis: i64) -> Vec<PendingInvite> {
        let (mut due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|invite| invite.due_at_millis <= now_millis);
        self.pending = waiting;
        // Stable sort keeps schedule order for equal deadlines.
        due.sort_by_key(|invite| invite.due_at_millis);
        due
    }

    pub fn is_pending(&self, workspace_id: WorkspaceId, email: &str) -> bool {
        self.pending
            .iter()
            .any(|invite| invite.workspace_id == workspace_id && invite.email == email)
    }

    /// Earliest deadline still waiting, if any.
    pub fn next_due_at(&self) -> Option<i64> {
        self.pending.iter().map(|invite| invite.due_at_millis).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
