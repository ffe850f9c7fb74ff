//! Greedy two-pointer debt netting.
//!
//! ## Walk
//!
//! ```text
//! creditors (desc):  A +500   D +100
//!                    ^ i
//! debtors   (asc):   B -300   C -200   E -100
//!                    ^ j
//! ```
//!
//! Each step moves `min(creditor, |debtor|)` from `debtors[j]` to
//! `creditors[i]` and advances whichever cursor has reached zero (within
//! epsilon). The walk stops as soon as either side is exhausted.
//!
//! The walk is a fold: [`NettingState::step`] consumes a state and returns
//! the next one, so intermediate states can be inspected in tests and no
//! balance record is ever shared or mutated behind the caller's back.

use crate::types::{Amount, Balance, MemberId, Transfer};

/// Remaining position of one member during the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub member_id: MemberId,

    /// Positive for creditors, negative for debtors; moves toward zero
    pub remaining: Amount,
}

/// Snapshot of the greedy walk between steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NettingState {
    /// Sorted by balance, largest first
    creditors: Vec<Position>,

    /// Sorted by balance, most negative first
    debtors: Vec<Position>,

    creditor_cursor: usize,
    debtor_cursor: usize,

    transfers: Vec<Transfer>,
    epsilon: Amount,
}

impl NettingState {
    /// Partition and sort balances into the initial state.
    ///
    /// Sorting is stable: members with equal balances keep their input
    /// order. `epsilon` is clamped to at least one fixed-point unit so that
    /// every step advances a cursor.
    pub fn new(balances: &[Balance], epsilon: Amount) -> Self {
        let position = |b: &Balance| Position {
            member_id: b.member_id.clone(),
            remaining: b.balance,
        };

        let mut creditors: Vec<Position> = balances
            .iter()
            .filter(|b| b.is_creditor())
            .map(position)
            .collect();
        let mut debtors: Vec<Position> = balances
            .iter()
            .filter(|b| b.is_debtor())
            .map(position)
            .collect();

        creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
        debtors.sort_by(|a, b| a.remaining.cmp(&b.remaining));

        Self {
            creditors,
            debtors,
            creditor_cursor: 0,
            debtor_cursor: 0,
            transfers: Vec::new(),
            epsilon: epsilon.max(Amount::UNIT),
        }
    }

    /// `true` once either side has been exhausted
    #[inline]
    pub fn is_done(&self) -> bool {
        self.creditor_cursor >= self.creditors.len() || self.debtor_cursor >= self.debtors.len()
    }

    /// Perform one matching step.
    ///
    /// Calling `step` on a finished state returns it unchanged.
    pub fn step(mut self) -> Self {
        if self.is_done() {
            return self;
        }

        let i = self.creditor_cursor;
        let j = self.debtor_cursor;
        let credit = self.creditors[i].remaining;
        let debt = self.debtors[j].remaining;

        let amount = credit.min(debt.abs());
        if amount > self.epsilon {
            self.transfers.push(Transfer {
                from: self.debtors[j].member_id.clone(),
                to: self.creditors[i].member_id.clone(),
                amount,
            });
        }

        // amount <= |credit| and <= |debt|, so neither update can overflow
        let credit = credit.saturating_sub(amount);
        let debt = debt.saturating_add(amount);
        self.creditors[i].remaining = credit;
        self.debtors[j].remaining = debt;

        if credit < self.epsilon {
            self.creditor_cursor += 1;
        }
        if debt > -self.epsilon {
            self.debtor_cursor += 1;
        }

        self
    }

    /// Transfers emitted so far
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn creditors(&self) -> &[Position] {
        &self.creditors
    }

    pub fn debtors(&self) -> &[Position] {
        &self.debtors
    }

    /// Consume the state, yielding its transfers
    pub fn into_transfers(self) -> Vec<Transfer> {
        self.transfers
    }
}

/// Run the greedy walk to completion.
///
/// Each step reduces at least one side to within epsilon of zero, so the
/// number of steps is bounded by `creditors + debtors`.
///
/// # Example
///
/// ```
/// use group_settle::engine::net;
/// use group_settle::types::{Amount, Balance};
///
/// let units = |u| Amount::from_units(u).unwrap();
/// let transfers = net(
///     &[
///         Balance::new("a", "A", units(500)),
///         Balance::new("b", "B", units(-300)),
///         Balance::new("c", "C", units(-200)),
///     ],
///     Amount::from_raw(1_000_000),
/// );
///
/// assert_eq!(transfers.len(), 2);
/// assert_eq!(transfers[0].from.as_str(), "b");
/// assert_eq!(transfers[1].from.as_str(), "c");
/// ```
pub fn net(balances: &[Balance], epsilon: Amount) -> Vec<Transfer> {
    let mut state = NettingState::new(balances, epsilon);
    while !state.is_done() {
        state = state.step();
    }
    state.into_transfers()
}

// ============================================================================
// Unit Tests
// ============================================================================
