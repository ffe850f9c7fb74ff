//! # Group Settle
//!
//! Deterministic debt netting for group expense settlement.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **Types**: Core data structures (Amount, Balance, Transfer, SettlementReport)
//! - **Ledger**: Expense aggregation into per-member net balances
//! - **Engine**: Greedy creditor/debtor matching that turns balances into transfers
//!
//! ## Design Principles
//!
//! 1. **Determinism**: All operations produce identical results for identical inputs
//! 2. **No Floating Point**: All math uses fixed-point arithmetic (10^8 scaling)
//! 3. **Validate at the Boundary**: Malformed balance lists are rejected before netting
//! 4. **Synchronous Execution**: Pure functions, no I/O and no shared state
//!
//! ## Example
//!
//! ```
//! use group_settle::{Balance, SettlementEngine};
//! use group_settle::types::Amount;
//!
//! let units = |u| Amount::from_units(u).unwrap();
//! let report = SettlementEngine::new()
//!     .settle(&[
//!         Balance::new("a", "Alice", units(500)),
//!         Balance::new("b", "Bob", units(-300)),
//!         Balance::new("c", "Cara", units(-200)),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(report.transfers[0].to_string(), "b -> a: 300");
//! assert_eq!(report.transfers[1].to_string(), "c -> a: 200");
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Amount, Balance, Transfer, SettlementReport
pub mod types;

/// Ledger aggregation: expenses to member balances
pub mod ledger;

/// Settlement engine: deterministic debt netting
pub mod engine;

/// Engine configuration loaded from the environment
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Amount, Balance, MemberId, SettlementReport, SettlementSummary, Transfer};
pub use ledger::{Expense, Ledger, MemberLedger, Split};
pub use engine::{net, SettlementEngine};
pub use config::{ConfigError, EngineConfig};
pub use error::{SettlementError, SettlementResult};
