//! Core data types for group settlement
//!
//! All money values use fixed-point representation (scaled by 10^8).
//!
//! ## Types
//!
//! - [`Amount`]: Signed fixed-point money value
//! - [`MemberId`]: Opaque member identifier
//! - [`Balance`]: Net balance of one member (engine input)
//! - [`Transfer`]: Suggested payment from a debtor to a creditor
//! - [`SettlementSummary`] / [`SettlementReport`]: Engine output
//!
//! ## Fixed-Point Arithmetic
//!
//! Amounts are stored as `i64` scaled by 10^8.
//! Example: -12.5 is stored as -1_250_000_000i64

pub mod amount;
mod balance;
mod transfer;
mod report;

// Re-export all types at module level
pub use amount::{Amount, AmountError};
pub use balance::{parse_balances, validate_balances, Balance, MemberId};
pub use transfer::Transfer;
pub use report::{SettlementReport, SettlementSummary};
