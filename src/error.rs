//! Error types
//!
//! Every failure is local to a single settlement computation. Validation
//! errors are raised before netting starts; an unbalanced ledger is not an
//! error (it is reported through `SettlementSummary::imbalance`).

use crate::types::{AmountError, MemberId};

/// Library-wide Result type
pub type SettlementResult<T> = Result<T, SettlementError>;

#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    // Balance list validation
    #[error("member id at index {index} is empty")]
    EmptyMemberId { index: usize },

    #[error("duplicate member: {0}")]
    DuplicateMember(MemberId),

    /// A numeric balance that is not representable as an `Amount`
    #[error("invalid amount for member {member}: {reason}")]
    InvalidAmount { member: MemberId, reason: AmountError },

    /// Input that is not a list of balance records at all
    #[error("malformed balance list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("arithmetic overflow while applying amounts")]
    Overflow,

    // Ledger aggregation
    #[error("unknown member: {0}")]
    UnknownMember(MemberId),

    #[error("invalid expense {id}: {reason}")]
    InvalidExpense { id: String, reason: String },
}

impl SettlementError {
    pub(crate) fn invalid_expense(id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidExpense {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the caller supplied bad input (as opposed to an internal limit)
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SettlementError::DuplicateMember(MemberId::from("alice"));
        assert_eq!(err.to_string(), "duplicate member: alice");

        let err = SettlementError::invalid_expense("dinner", "no participants");
        assert_eq!(err.to_string(), "invalid expense dinner: no participants");

        let err = SettlementError::InvalidAmount {
            member: MemberId::from("bob"),
            reason: AmountError::TooManyDecimals(9),
        };
        assert_eq!(
            err.to_string(),
            "invalid amount for member bob: too many decimal places (max 8, got 9)"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(SettlementError::EmptyMemberId { index: 0 }.is_validation());
        assert!(!SettlementError::Overflow.is_validation());
    }
}
