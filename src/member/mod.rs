//! The member directory adapter: thin endpoints for registering members and
//! groups and resolving group membership.
//!
//! The directory is reference data for the ledger; these endpoints exist so
//! the filter dimensions (member, group) can be administered.

mod create_endpoints;
mod get_endpoints;

pub use create_endpoints::{create_group_endpoint, create_member_endpoint};
pub use get_endpoints::{get_group_members_endpoint, get_member_endpoint, get_members_endpoint};
