//! Per-member ledger aggregation.
//!
//! Sums every recorded expense into a `{total_owed, total_paid, balance}`
//! record per member. `balance = total_paid - total_owed`, so a member who
//! paid more than their shares is a creditor.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{SettlementError, SettlementResult};
use crate::ledger::Expense;
use crate::types::{validate_balances, Amount, Balance, MemberId};

/// Aggregated position of one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberLedger {
    pub member_id: MemberId,
    pub display_name: String,

    /// Sum of this member's shares across all expenses
    pub total_owed: Amount,

    /// Sum of the expenses this member paid for
    pub total_paid: Amount,

    /// `total_paid - total_owed`
    pub balance: Amount,
}

/// Expenses of a single group, keyed to a fixed member roster.
///
/// ## Example
///
/// ```
/// use group_settle::ledger::{Expense, Ledger};
/// use group_settle::types::{Amount, MemberId};
///
/// let mut ledger = Ledger::new([("a", "Alice"), ("b", "Bob")]).unwrap();
/// let members = ["a", "b"].map(MemberId::from);
/// ledger
///     .record(Expense::equal_split("e1", "Lunch", "a", Amount::from_units(20).unwrap(), &members).unwrap())
///     .unwrap();
///
/// let rows = ledger.aggregate().unwrap();
/// assert_eq!(rows[0].balance, Amount::from_units(10).unwrap());
/// assert_eq!(rows[1].balance, Amount::from_units(-10).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Registration order is preserved in every output
    members: Vec<(MemberId, String)>,
    index: HashMap<MemberId, usize>,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create a ledger for the given `(member id, display name)` roster
    ///
    /// # Errors
    ///
    /// Blank or duplicate member ids.
    pub fn new<I, M, N>(members: I) -> SettlementResult<Self>
    where
        I: IntoIterator<Item = (M, N)>,
        M: Into<MemberId>,
        N: Into<String>,
    {
        let mut ledger = Self::default();
        for (id, name) in members {
            ledger.add_member(id, name)?;
        }
        Ok(ledger)
    }

    /// Register one more member
    pub fn add_member(
        &mut self,
        id: impl Into<MemberId>,
        display_name: impl Into<String>,
    ) -> SettlementResult<()> {
        let id = id.into();
        if id.is_blank() {
            return Err(SettlementError::EmptyMemberId {
                index: self.members.len(),
            });
        }
        if self.index.contains_key(&id) {
            return Err(SettlementError::DuplicateMember(id));
        }
        self.index.insert(id.clone(), self.members.len());
        self.members.push((id, display_name.into()));
        Ok(())
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Validate and store an expense.
    ///
    /// The payer and every participant must be registered members.
    pub fn record(&mut self, expense: Expense) -> SettlementResult<()> {
        expense.validate()?;
        self.require_member(&expense.paid_by)?;
        for split in &expense.splits {
            self.require_member(&split.member_id)?;
        }

        tracing::debug!(
            expense = %expense.id,
            paid_by = %expense.paid_by,
            amount = %expense.amount,
            participants = expense.splits.len(),
            "Expense recorded"
        );
        self.expenses.push(expense);
        Ok(())
    }

    fn require_member(&self, id: &MemberId) -> SettlementResult<()> {
        if self.index.contains_key(id) {
            Ok(())
        } else {
            Err(SettlementError::UnknownMember(id.clone()))
        }
    }

    /// Sum all expenses into one row per member, in registration order
    pub fn aggregate(&self) -> SettlementResult<Vec<MemberLedger>> {
        let mut owed = vec![Amount::ZERO; self.members.len()];
        let mut paid = vec![Amount::ZERO; self.members.len()];

        for expense in &self.expenses {
            let payer = self.index[&expense.paid_by];
            paid[payer] = paid[payer]
                .checked_add(expense.amount)
                .ok_or(SettlementError::Overflow)?;

            for split in &expense.splits {
                let member = self.index[&split.member_id];
                owed[member] = owed[member]
                    .checked_add(split.share)
                    .ok_or(SettlementError::Overflow)?;
            }
        }

        self.members
            .iter()
            .zip(owed.into_iter().zip(paid))
            .map(|((id, name), (total_owed, total_paid))| {
                let balance = total_paid
                    .checked_sub(total_owed)
                    .ok_or(SettlementError::Overflow)?;
                Ok(MemberLedger {
                    member_id: id.clone(),
                    display_name: name.clone(),
                    total_owed,
                    total_paid,
                    balance,
                })
            })
            .collect()
    }

    /// Net balances ready for the settlement engine
    pub fn balances(&self) -> SettlementResult<Vec<Balance>> {
        let balances: Vec<Balance> = self
            .aggregate()?
            .into_iter()
            .map(|row| Balance::new(row.member_id, row.display_name, row.balance))
            .collect();
        validate_balances(&balances)?;
        Ok(balances)
    }
}
