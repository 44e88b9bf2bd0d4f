//! The savings ledger feature: endpoints for recording deposits and
//! withdrawals and querying balances, records, totals, and history.

mod deposit_endpoint;
mod list_endpoints;
mod member_endpoints;
mod withdraw_endpoint;

pub use deposit_endpoint::create_deposit_endpoint;
pub use list_endpoints::{
    get_deposits_endpoint, get_savings_endpoint, get_withdrawals_endpoint,
};
pub use member_endpoints::{get_member_total_endpoint, get_member_transactions_endpoint};
pub use withdraw_endpoint::create_withdrawal_endpoint;
