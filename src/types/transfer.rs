//! Suggested payment between two group members.
//!
//! Transfers are computed output: they are suggestions, never executed
//! payments, and are not persisted.

use serde::{Deserialize, Serialize};

use crate::types::{Amount, MemberId};

/// A directed payment suggestion from a debtor to a creditor.
///
/// ## Example
///
/// ```
/// use group_settle::types::{Amount, Transfer};
///
/// let transfer = Transfer::new("bob", "alice", Amount::from_units(300).unwrap());
/// assert_eq!(transfer.to_string(), "bob -> alice: 300");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    /// Paying member (debtor)
    pub from: MemberId,

    /// Receiving member (creditor)
    pub to: MemberId,

    /// Always positive
    pub amount: Amount,
}

impl Transfer {
    pub fn new(from: impl Into<MemberId>, to: impl Into<MemberId>, amount: Amount) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }

    /// Canonical bytes used for settlement fingerprints
    ///
    /// Layout: `len(from) u32 LE | from | len(to) u32 LE | to | amount i64 LE`
    pub(crate) fn encode_into(&self, out: &mut Vec<u8>) {
        for id in [&self.from, &self.to] {
            let bytes = id.as_str().as_bytes();
            out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
            out.extend_from_slice(bytes);
        }
        out.extend_from_slice(&self.amount.raw().to_le_bytes());
    }
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}
