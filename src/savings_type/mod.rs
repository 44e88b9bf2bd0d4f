//! The savings type catalog feature: administrator endpoints for managing
//! the account categories the ledger records savings under.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoints;

pub use create_endpoint::create_savings_type_endpoint;
pub use delete_endpoint::delete_savings_type_endpoint;
pub use edit_endpoint::edit_savings_type_endpoint;
pub use get_endpoints::{get_savings_type_endpoint, get_savings_types_endpoint};
