//! Contains traits and implementations for objects that store the domain [models](crate::models).

mod balance;
mod member;
mod savings_type;
mod transaction;

pub mod sqlite;

pub use balance::BalanceStore;
pub use member::MemberStore;
pub use savings_type::SavingsTypeStore;
pub use transaction::{RecordQuery, TransactionStore};
