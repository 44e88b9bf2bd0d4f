//! Defines the member directory entities: individual members and the groups
//! they belong to.
//!
//! The ledger does not own these records, it only references them. They are
//! kept here so that foreign keys resolve and so that group filters can be
//! expanded into member lists.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A newtype wrapper for integer member IDs.
///
/// This helps disambiguate member IDs from other types of IDs, such as the
/// IDs of savings types and transaction rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberID(i64);

impl MemberID {
    /// Create a member ID from a raw database ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The underlying integer ID.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for MemberID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A newtype wrapper for integer group IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupID(i64);

impl GroupID {
    /// Create a group ID from a raw database ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The underlying integer ID.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for GroupID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A member of the cooperative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// The ID of the member.
    pub id: MemberID,
    /// The member's display name.
    pub name: String,
    /// The group the member belongs to, if any.
    pub group_id: Option<GroupID>,
}

/// A named collection of members, used as a query-time filter dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// The ID of the group.
    pub id: GroupID,
    /// The group's display name.
    pub name: String,
}
