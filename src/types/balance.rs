//! Member identity and per-member net balances.
//!
//! A [`Balance`] is the engine's only input record. Every field is
//! mandatory and typed; [`validate_balances`] checks the list as a whole
//! before any netting happens.

use std::collections::HashSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SettlementError;
use crate::types::Amount;

/// Opaque member identifier, unique within a group
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank identifiers are rejected by validation
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Net balance of one group member.
///
/// - Positive: the member is owed money (creditor)
/// - Negative: the member owes money (debtor)
/// - Zero: settled
///
/// ## Example
///
/// ```
/// use group_settle::types::{Amount, Balance};
///
/// let alice = Balance::new("alice", "Alice", Amount::from_units(300).unwrap());
/// assert!(alice.is_creditor());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub member_id: MemberId,
    pub display_name: String,
    pub balance: Amount,
}

impl Balance {
    pub fn new(
        member_id: impl Into<MemberId>,
        display_name: impl Into<String>,
        balance: Amount,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            display_name: display_name.into(),
            balance,
        }
    }

    /// Build a balance from a decimal, rejecting values that are not
    /// representable in fixed-point
    pub fn from_decimal(
        member_id: impl Into<MemberId>,
        display_name: impl Into<String>,
        balance: Decimal,
    ) -> Result<Self, SettlementError> {
        let member_id = member_id.into();
        let balance = Amount::from_decimal(balance).map_err(|reason| {
            SettlementError::InvalidAmount {
                member: member_id.clone(),
                reason,
            }
        })?;
        Ok(Self {
            member_id,
            display_name: display_name.into(),
            balance,
        })
    }

    #[inline]
    pub fn is_creditor(&self) -> bool {
        self.balance.is_positive()
    }

    #[inline]
    pub fn is_debtor(&self) -> bool {
        self.balance.is_negative()
    }
}

/// Check a group's balance list before settlement.
///
/// # Errors
///
/// * `SettlementError::EmptyMemberId` - a member id is blank
/// * `SettlementError::DuplicateMember` - a member id appears twice
pub fn validate_balances(balances: &[Balance]) -> Result<(), SettlementError> {
    let mut seen = HashSet::with_capacity(balances.len());
    for (index, balance) in balances.iter().enumerate() {
        if balance.member_id.is_blank() {
            return Err(SettlementError::EmptyMemberId { index });
        }
        if !seen.insert(&balance.member_id) {
            return Err(SettlementError::DuplicateMember(balance.member_id.clone()));
        }
    }
    Ok(())
}

/// Wire form of one input balance. The amount stays a plain decimal until
/// [`Balance::from_decimal`] checks it against its member.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceRecord {
    member_id: MemberId,
    display_name: String,
    balance: Decimal,
}

/// Decode and validate a JSON balance list.
///
/// Accepts `[{"memberId": "...", "displayName": "...", "balance": "12.5"}]`;
/// `balance` may also be a JSON number.
///
/// # Errors
///
/// * `SettlementError::Parse` - not a list of balance records, or a
///   `balance` that is not a number
/// * `SettlementError::InvalidAmount` - a number that does not fit the
///   fixed-point range or carries more than 8 decimals
/// * any error from [`validate_balances`]
pub fn parse_balances(json: &str) -> Result<Vec<Balance>, SettlementError> {
    let records: Vec<BalanceRecord> = serde_json::from_str(json)?;
    let balances = records
        .into_iter()
        .map(|r| Balance::from_decimal(r.member_id, r.display_name, r.balance))
        .collect::<Result<Vec<_>, _>>()?;
    validate_balances(&balances)?;
    Ok(balances)
}

// ============================================================================
// Unit Tests
// ============================================================================
