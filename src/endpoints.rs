//! The API endpoint URIs.

/// The route to query savings balances.
pub const SAVINGS: &str = "/api/savings";
/// The route to record a deposit or query deposit records.
pub const DEPOSITS: &str = "/api/savings/deposits";
/// The route to record a withdrawal or query withdrawal records.
pub const WITHDRAWALS: &str = "/api/savings/withdrawals";
/// The route to get a member's savings total across all savings types.
pub const MEMBER_SAVINGS_TOTAL: &str = "/api/members/{member_id}/savings/total";
/// The route to get a member's merged deposit/withdrawal history.
pub const MEMBER_SAVINGS_TRANSACTIONS: &str = "/api/members/{member_id}/savings/transactions";
/// The route to create or list savings types.
pub const SAVINGS_TYPES: &str = "/api/savings_types";
/// The route to get, update, or delete a savings type.
pub const SAVINGS_TYPE: &str = "/api/savings_types/{savings_type_id}";
/// The route to register or list members.
pub const MEMBERS: &str = "/api/members";
/// The route to get a member.
pub const MEMBER: &str = "/api/members/{member_id}";
/// The route to register groups.
pub const GROUPS: &str = "/api/groups";
/// The route to list the members of a group.
pub const GROUP_MEMBERS: &str = "/api/groups/{group_id}/members";

/// Substitute a path parameter such as `{member_id}` with `value`.
pub fn format_endpoint(endpoint: &str, parameter: &str, value: i64) -> String {
    endpoint.replace(parameter, &value.to_string())
}
