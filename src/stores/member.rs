//! Defines the member directory store trait.

use crate::{
    Error,
    models::{Group, GroupID, Member, MemberID},
};

/// Handles the member directory: member identities and their group
/// memberships.
///
/// The ledger consumes this store to resolve group filters into explicit
/// member lists; it never mutates directory records itself.
pub trait MemberStore {
    /// Register a new member, optionally placing them in a group.
    fn create(&mut self, name: &str, group_id: Option<GroupID>) -> Result<Member, Error>;

    /// Get a member by their ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a member.
    fn get(&self, id: MemberID) -> Result<Member, Error>;

    /// Get all registered members.
    fn get_all(&self) -> Result<Vec<Member>, Error>;

    /// Get every member whose group equals `group_id`.
    fn get_by_group(&self, group_id: GroupID) -> Result<Vec<Member>, Error>;

    /// Register a new group.
    fn create_group(&mut self, name: &str) -> Result<Group, Error>;

    /// Get a group by its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a group.
    fn get_group(&self, id: GroupID) -> Result<Group, Error>;
}
