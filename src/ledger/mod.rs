//! Ledger aggregation: expenses in, net member balances out.
//!
//! ## Components
//!
//! - [`Expense`] / [`Split`]: One payment and each participant's share
//! - [`Ledger`]: Member roster plus recorded expenses
//! - [`MemberLedger`]: Per-member `{total_owed, total_paid, balance}` row
//!
//! [`Ledger::balances`] feeds the settlement engine directly.

pub mod expense;
pub mod aggregator;

pub use expense::{Expense, Split};
pub use aggregator::{Ledger, MemberLedger};
