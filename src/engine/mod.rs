//! Settlement engine module.
//!
//! ## Design Principles
//!
//! The engine is designed for:
//!
//! 1. **Determinism**: Same input always produces same output
//! 2. **Fixed-Point Math**: No floating-point operations
//! 3. **Purity**: No I/O and no shared state; input balances are never mutated
//! 4. **Stable Ties**: Equal balances are matched in input order
//!
//! ## Netting Rules
//!
//! - **Creditors** are matched largest balance first
//! - **Debtors** are matched most negative balance first
//! - **Partial fills** carry the remainder into the next step
//! - **Dust** (amounts at or below epsilon) is never emitted as a transfer
//!
//! ## Example
//!
//! ```
//! use group_settle::engine::SettlementEngine;
//! use group_settle::types::{Amount, Balance};
//!
//! let engine = SettlementEngine::new();
//! let units = |u| Amount::from_units(u).unwrap();
//!
//! let report = engine
//!     .settle(&[
//!         Balance::new("alice", "Alice", units(200)),
//!         Balance::new("bob", "Bob", units(100)),
//!         Balance::new("cara", "Cara", units(-300)),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(report.transfers.len(), 2);
//! assert!(report.balances.iter().all(|b| b.balance.is_zero()));
//! ```

pub mod netting;
pub mod settler;

pub use netting::{net, NettingState, Position};
pub use settler::{apply_transfers, SettlementEngine};
