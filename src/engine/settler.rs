//! Settlement engine: validation, netting, summary.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::engine::netting::net;
use crate::error::{SettlementError, SettlementResult};
use crate::types::{
    parse_balances, validate_balances, Balance, MemberId, SettlementReport, SettlementSummary,
    Transfer,
};

/// Stateless settlement engine.
///
/// Holds configuration only; every call to [`settle`](Self::settle) is an
/// independent pure computation, so one engine can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementEngine {
    config: EngineConfig,
}

impl SettlementEngine {
    /// Create an engine with the default configuration (epsilon = 0.01)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Settle one group's balances.
    ///
    /// # Errors
    ///
    /// Validation errors for blank or duplicate member ids. An unbalanced
    /// ledger is not an error: transfers are best-effort and the residual is
    /// reported in `summary.imbalance`.
    pub fn settle(&self, balances: &[Balance]) -> SettlementResult<SettlementReport> {
        validate_balances(balances)?;

        let (total_owed, total_owing, imbalance) = totals(balances);
        if self.config.warn_on_imbalance && imbalance.abs() > self.config.epsilon.to_decimal() {
            tracing::warn!(
                members = balances.len(),
                imbalance = %imbalance,
                "Group balances do not sum to zero; residual is not covered by transfers"
            );
        }

        let transfers = net(balances, self.config.epsilon);
        let adjusted = apply_transfers(balances, &transfers)?;

        tracing::debug!(
            members = balances.len(),
            transfers = transfers.len(),
            total_owed = %total_owed,
            "Settlement computed"
        );

        Ok(SettlementReport {
            balances: adjusted,
            summary: SettlementSummary {
                total_owed,
                total_owing,
                is_settled: transfers.is_empty(),
                imbalance,
            },
            transfers,
        })
    }

    /// Decode a JSON balance list and settle it
    pub fn settle_json(&self, json: &str) -> SettlementResult<SettlementReport> {
        let balances = parse_balances(json)?;
        self.settle(&balances)
    }
}

/// (sum of credits, sum of debts as a positive number, net sum)
///
/// Summed in `Decimal`: its 96-bit mantissa holds billions of `i64` balances,
/// so a group that passed validation always has representable totals.
fn totals(balances: &[Balance]) -> (Decimal, Decimal, Decimal) {
    let mut owed = Decimal::ZERO;
    let mut owing = Decimal::ZERO;
    for b in balances {
        let value = b.balance.to_decimal();
        if b.is_creditor() {
            owed += value;
        } else if b.is_debtor() {
            owing -= value;
        }
    }
    (owed, owing, owed - owing)
}

/// Apply transfers to balances, returning new records in input order.
///
/// The payer's balance rises toward zero and the payee's falls toward zero.
/// Transfers naming members absent from `balances` are rejected.
pub fn apply_transfers(
    balances: &[Balance],
    transfers: &[Transfer],
) -> SettlementResult<Vec<Balance>> {
    let mut adjusted = balances.to_vec();
    let index: HashMap<&MemberId, usize> = balances
        .iter()
        .enumerate()
        .map(|(i, b)| (&b.member_id, i))
        .collect();

    for transfer in transfers {
        let from = *index
            .get(&transfer.from)
            .ok_or_else(|| SettlementError::UnknownMember(transfer.from.clone()))?;
        let to = *index
            .get(&transfer.to)
            .ok_or_else(|| SettlementError::UnknownMember(transfer.to.clone()))?;

        adjusted[from].balance = adjusted[from]
            .balance
            .checked_add(transfer.amount)
            .ok_or(SettlementError::Overflow)?;
        adjusted[to].balance = adjusted[to]
            .balance
            .checked_sub(transfer.amount)
            .ok_or(SettlementError::Overflow)?;
    }

    Ok(adjusted)
}

// ============================================================================
// Unit Tests
// ============================================================================
