//! Workspace member model.
//!
//! # Invariants
//! - `email` is the identity key; no two members of one workspace share it.
//! - Roles are labels only. Nothing in core enforces permissions by role.

use crate::model::label::{parse_label, ParseLabelError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Member role label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRole {
    Owner,
    Admin,
    Member,
    /// Invited but not yet accepted.
    Pending,
}

impl MemberRole {
    pub const ALL: [MemberRole; 4] = [Self::Owner, Self::Admin, Self::Member, Self::Pending];

    /// Returns the stable display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Admin => "Admin",
            Self::Member => "Member",
            Self::Pending => "Pending",
        }
    }

    /// Next role in the member list's cycle: Member -> Admin -> Owner -> Member.
    ///
    /// A pending member cycles to `Member`.
    pub const fn cycled(self) -> Self {
        match self {
            Self::Member => Self::Admin,
            Self::Admin => Self::Owner,
            Self::Owner | Self::Pending => Self::Member,
        }
    }
}

impl Display for MemberRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("member role", s, &Self::ALL, Self::as_str)
    }
}

/// Workspace participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub email: String,
    pub name: String,
    pub role: MemberRole,
}

impl Member {
    pub fn new(email: impl Into<String>, name: impl Into<String>, role: MemberRole) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role,
        }
    }

    /// Member record created by an invite: pending, named after the email
    /// local part.
    pub fn invited(email: impl Into<String>) -> Self {
        let email = email.into();
        let name = email_local_part(&email).to_string();
        Self {
            email,
            name,
            role: MemberRole::Pending,
        }
    }

    /// Name shown in lists and charts.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            email_local_part(&self.email)
        } else {
            self.name.as_str()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.role == MemberRole::Pending
    }
}

/// Substring before the first `@`, or the whole input when there is none.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::{email_local_part, Member, MemberRole};

    #[test]
    fn invited_member_is_pending_and_named_after_local_part() {
        let member = Member::invited("nina@novapm.io");
        assert_eq!(member.name, "nina");
        assert_eq!(member.role, MemberRole::Pending);
        assert!(member.is_pending());
    }

    #[test]
    fn local_part_handles_missing_at_sign() {
        assert_eq!(email_local_part("ops"), "ops");
        assert_eq!(email_local_part("@novapm.io"), "");
    }

    #[test]
    fn display_name_falls_back_to_local_part() {
        let member = Member::new("kai@novapm.io", "  ", MemberRole::Member);
        assert_eq!(member.display_name(), "kai");
    }

    #[test]
    fn role_cycle_wraps_through_owner() {
        assert_eq!(MemberRole::Member.cycled(), MemberRole::Admin);
        assert_eq!(MemberRole::Admin.cycled(), MemberRole::Owner);
        assert_eq!(MemberRole::Owner.cycled(), MemberRole::Member);
        assert_eq!(MemberRole::Pending.cycled(), MemberRole::Member);
    }
}
