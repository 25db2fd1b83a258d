//! Per-account aggregation and the debit/credit balance check.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::config::LedgerRules;
use crate::models::summary::LineEntry;

/// Category an account code falls into for the balance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Debit,
    Credit,
    /// Counted per account only.
    Other,
}

impl LedgerRules {
    /// Classify an account code.
    pub fn categorize(&self, account_code: &str) -> Category {
        if !account_code.starts_with(&self.group_prefix) {
            Category::Other
        } else if account_code.starts_with(&self.debit_prefix) {
            Category::Debit
        } else if account_code.starts_with(&self.credit_prefix) {
            Category::Credit
        } else {
            Category::Other
        }
    }
}

/// Aggregated amounts for a set of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    /// Summed amount per account code.
    pub account_totals: BTreeMap<String, Decimal>,
    /// Sum over debit-category codes.
    pub debit_total: Decimal,
    /// Sum over credit-category codes.
    pub credit_total: Decimal,
}

impl LedgerTotals {
    /// Add one entry's amount to its account bucket and category total.
    ///
    /// Sums that leave the `Decimal` range saturate at `Decimal::MAX` (or
    /// `Decimal::MIN`).
    pub fn post(&mut self, entry: &LineEntry, rules: &LedgerRules) {
        let bucket = self
            .account_totals
            .entry(entry.account_code.clone())
            .or_insert(Decimal::ZERO);
        *bucket = saturating_add(*bucket, entry.amount, &entry.account_code);

        match rules.categorize(&entry.account_code) {
            Category::Debit => {
                self.debit_total = saturating_add(self.debit_total, entry.amount, "debit_total")
            }
            Category::Credit => {
                self.credit_total = saturating_add(self.credit_total, entry.amount, "credit_total")
            }
            Category::Other => {}
        }
    }

    /// True iff debit and credit totals are exactly equal.
    pub fn is_balanced(&self) -> bool {
        self.debit_total == self.credit_total
    }
}

fn saturating_add(total: Decimal, amount: Decimal, what: &str) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        warn!("Sum for {} overflowed, saturating", what);
        if amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Aggregate entries into per-account and per-category totals.
pub fn aggregate(entries: &[LineEntry], rules: &LedgerRules) -> LedgerTotals {
    let mut totals = LedgerTotals::default();
    for entry in entries {
        totals.post(entry, rules);
    }
    totals
}
