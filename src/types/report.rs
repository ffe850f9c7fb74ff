//! Settlement report returned to the presentation layer.
//!
//! The report bundles the post-settlement balances, the transfer list and a
//! summary. [`SettlementReport::fingerprint`] gives a SHA-256 digest over a
//! canonical encoding so that two runs on the same input can be compared
//! cheaply.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::{Amount, Balance, Transfer};

/// Totals computed from the input balances.
///
/// Totals are held as [`Decimal`] rather than [`Amount`]: every member fits
/// in fixed-point, but the sum over a group need not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    /// Sum of all positive balances (what creditors are owed)
    pub total_owed: Decimal,

    /// Sum of all negative balances, as a positive number (what debtors owe)
    pub total_owing: Decimal,

    /// `true` iff no transfers were suggested
    pub is_settled: bool,

    /// Sum of all input balances. Zero for a consistent ledger; anything
    /// else means the residual was dropped from the transfer list.
    pub imbalance: Decimal,
}

impl SettlementSummary {
    /// Whether the input ledger summed to zero within `tolerance`
    pub fn is_balanced(&self, tolerance: Amount) -> bool {
        self.imbalance.abs() <= tolerance.to_decimal()
    }
}

/// Full settlement output for one group.
///
/// ## Example
///
/// ```
/// use group_settle::{Balance, SettlementEngine};
/// use group_settle::types::Amount;
///
/// let engine = SettlementEngine::new();
/// let report = engine
///     .settle(&[
///         Balance::new("a", "Alice", Amount::from_units(300).unwrap()),
///         Balance::new("b", "Bob", Amount::from_units(-300).unwrap()),
///     ])
///     .unwrap();
///
/// assert_eq!(report.transfers.len(), 1);
/// assert_eq!(report.fingerprint().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementReport {
    /// Input balances with every suggested transfer applied, in input order
    pub balances: Vec<Balance>,

    /// Suggested transfers in generation order
    pub transfers: Vec<Transfer>,

    pub summary: SettlementSummary,
}

impl SettlementReport {
    /// Total amount moved by the suggested transfers
    pub fn transferred(&self) -> Decimal {
        self.transfers.iter().map(|t| t.amount.to_decimal()).sum()
    }

    /// Canonical byte encoding of the transfers and summary
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.transfers.len() * 48 + 49);
        out.extend_from_slice(&(self.transfers.len() as u64).to_le_bytes());
        for transfer in &self.transfers {
            transfer.encode_into(&mut out);
        }
        // normalize() drops trailing zeros and negative zero
        for total in [
            self.summary.total_owed,
            self.summary.total_owing,
            self.summary.imbalance,
        ] {
            out.extend_from_slice(&total.normalize().serialize());
        }
        out.push(u8::from(self.summary.is_settled));
        out
    }

    /// Hex-encoded SHA-256 of [`canonical_bytes`](Self::canonical_bytes)
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_bytes());
        hex::encode(hasher.finalize())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
