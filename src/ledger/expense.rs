//! Group expenses and how they are split between members.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{SettlementError, SettlementResult};
use crate::types::{Amount, MemberId};

/// One participant's share of an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub member_id: MemberId,
    pub share: Amount,
}

impl Split {
    pub fn new(member_id: impl Into<MemberId>, share: Amount) -> Self {
        Self {
            member_id: member_id.into(),
            share,
        }
    }
}

/// An expense paid by one member and shared by several.
///
/// ## Example
///
/// ```
/// use group_settle::ledger::Expense;
/// use group_settle::types::{Amount, MemberId};
///
/// let dinner = Expense::equal_split(
///     "e1",
///     "Dinner",
///     "alice",
///     Amount::from_units(100).unwrap(),
///     &["alice", "bob", "cara"].map(MemberId::from),
/// )
/// .unwrap();
///
/// // 100 / 3: the first participant absorbs the leftover unit
/// assert_eq!(dinner.splits[0].share.raw(), 3_333_333_334);
/// assert_eq!(dinner.splits[1].share.raw(), 3_333_333_333);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub paid_by: MemberId,
    pub amount: Amount,
    pub splits: Vec<Split>,
}

impl Expense {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        paid_by: impl Into<MemberId>,
        amount: Amount,
        splits: Vec<Split>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            paid_by: paid_by.into(),
            amount,
            splits,
        }
    }

    /// Split `amount` equally between `participants`.
    ///
    /// Shares are computed in fixed-point units; the leftover units of the
    /// division go one each to the first participants, so the shares always
    /// sum exactly to `amount`.
    pub fn equal_split(
        id: impl Into<String>,
        description: impl Into<String>,
        paid_by: impl Into<MemberId>,
        amount: Amount,
        participants: &[MemberId],
    ) -> SettlementResult<Self> {
        let id = id.into();
        if participants.is_empty() {
            return Err(SettlementError::invalid_expense(&id, "no participants"));
        }
        if !amount.is_positive() {
            return Err(SettlementError::invalid_expense(&id, "amount must be positive"));
        }

        let count = participants.len() as i64;
        let base = amount.raw() / count;
        let leftover = (amount.raw() % count) as usize;

        let splits = participants
            .iter()
            .enumerate()
            .map(|(i, member)| {
                let extra = if i < leftover { 1 } else { 0 };
                Split::new(member.clone(), Amount::from_raw(base + extra))
            })
            .collect();

        let expense = Self::new(id, description, paid_by, amount, splits);
        expense.validate()?;
        Ok(expense)
    }

    /// Check the expense's internal consistency.
    ///
    /// - amount is positive
    /// - at least one split, no participant listed twice
    /// - every share is non-negative and the shares sum to the amount
    pub fn validate(&self) -> SettlementResult<()> {
        if !self.amount.is_positive() {
            return Err(SettlementError::invalid_expense(&self.id, "amount must be positive"));
        }
        if self.splits.is_empty() {
            return Err(SettlementError::invalid_expense(&self.id, "no participants"));
        }

        let mut seen = HashSet::with_capacity(self.splits.len());
        for split in &self.splits {
            if split.share.is_negative() {
                return Err(SettlementError::invalid_expense(
                    &self.id,
                    format!("negative share for {}", split.member_id),
                ));
            }
            if !seen.insert(&split.member_id) {
                return Err(SettlementError::invalid_expense(
                    &self.id,
                    format!("{} listed twice", split.member_id),
                ));
            }
        }

        let total = Amount::checked_sum(self.splits.iter().map(|s| s.share))
            .ok_or(SettlementError::Overflow)?;
        if total != self.amount {
            return Err(SettlementError::invalid_expense(
                &self.id,
                format!("shares sum to {} but amount is {}", total, self.amount),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(u: i64) -> Amount {
        Amount::from_units(u).unwrap()
    }

    fn ids(names: &[&str]) -> Vec<MemberId> {
        names.iter().map(|n| MemberId::from(*n)).collect()
    }

    #[test]
    fn test_equal_split_even() {
        let expense =
            Expense::equal_split("e1", "Taxi", "a", units(90), &ids(&["a", "b", "c"])).unwrap();
        assert!(expense.splits.iter().all(|s| s.share == units(30)));
        assert_eq!(expense.splits[1].member_id.as_str(), "b");
    }

    #[test]
    fn test_equal_split_distributes_leftover() {
        let expense =
            Expense::equal_split("e1", "Odd", "a", Amount::from_raw(11), &ids(&["a", "b", "c"]))
                .unwrap();
        let shares: Vec<i64> = expense.splits.iter().map(|s| s.share.raw()).collect();
        assert_eq!(shares, [4, 4, 3]);
    }

    #[test]
    fn test_equal_split_rejects_empty_and_non_positive() {
        assert!(matches!(
            Expense::equal_split("e1", "x", "a", units(10), &[]),
            Err(SettlementError::InvalidExpense { .. })
        ));
        assert!(matches!(
            Expense::equal_split("e2", "x", "a", Amount::ZERO, &ids(&["a"])),
            Err(SettlementError::InvalidExpense { .. })
        ));
    }

    #[test]
    fn test_validate_share_mismatch() {
        let expense = Expense::new(
            "e1",
            "Groceries",
            "a",
            units(50),
            vec![Split::new("a", units(20)), Split::new("b", units(20))],
        );
        let err = expense.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid expense e1: shares sum to 40 but amount is 50"
        );
    }

    #[test]
    fn test_validate_duplicate_and_negative() {
        let dup = Expense::new(
            "e1",
            "x",
            "a",
            units(2),
            vec![Split::new("a", units(1)), Split::new("a", units(1))],
        );
        assert!(dup.validate().is_err());

        let negative = Expense::new(
            "e2",
            "x",
            "a",
            units(1),
            vec![Split::new("a", units(2)), Split::new("b", units(-1))],
        );
        assert!(negative.validate().is_err());
    }
}
