//! Aggregation engine: monthly series, category totals and global totals.
//!
//! Every function is a full recompute over the slice it is given. Groups
//! come out in discovery order (the order their keys first appear in the
//! input), not sorted.

use finsight_core::{CategorySummary, GlobalTotals, MonthlyAnalysis, Transaction, month_key};
use std::collections::HashMap;

/// Keyed accumulators that remember the order keys were first seen.
struct OrderedGroups<V> {
    index: HashMap<String, usize>,
    groups: Vec<(String, V)>,
}

impl<V: Default> OrderedGroups<V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn slot(&mut self, key: &str) -> &mut V {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                let idx = self.groups.len();
                self.index.insert(key.to_string(), idx);
                self.groups.push((key.to_string(), V::default()));
                idx
            }
        };
        &mut self.groups[idx].1
    }

    fn into_groups(self) -> Vec<(String, V)> {
        self.groups
    }
}

#[derive(Default)]
struct MonthSums {
    income: f64,
    expenses: f64,
}

/// Income, expenses and savings per month, in discovery order.
pub fn monthly_series(txns: &[Transaction]) -> Vec<MonthlyAnalysis> {
    let mut months: OrderedGroups<MonthSums> = OrderedGroups::new();

    for txn in txns {
        let sums = months.slot(&month_key(txn.date));
        if txn.is_income() {
            sums.income += txn.amount;
        } else {
            sums.expenses += txn.amount.abs();
        }
    }

    months
        .into_groups()
        .into_iter()
        .map(|(month, sums)| MonthlyAnalysis::new(month, sums.income, sums.expenses))
        .collect()
}

/// Expense totals per category with their share of all expenses.
///
/// Only expense records count. Percentages are 0 when total expenses are 0.
pub fn category_totals(txns: &[Transaction]) -> Vec<CategorySummary> {
    let mut categories: OrderedGroups<f64> = OrderedGroups::new();
    let mut total_expenses = 0.0;

    for txn in txns.iter().filter(|t| t.is_expense()) {
        let magnitude = txn.amount.abs();
        total_expenses += magnitude;
        *categories.slot(&txn.category) += magnitude;
    }

    categories
        .into_groups()
        .into_iter()
        .map(|(category, total)| CategorySummary::new(category, total, total_expenses))
        .collect()
}

/// Total income, total expenses and net savings.
pub fn global_totals(txns: &[Transaction]) -> GlobalTotals {
    // fold from +0.0; an empty f64 `sum()` yields -0.0
    let total_income = txns
        .iter()
        .filter(|t| t.is_income())
        .fold(0.0, |acc, t| acc + t.amount);
    let total_expenses = txns
        .iter()
        .filter(|t| t.is_expense())
        .fold(0.0, |acc, t| acc + t.amount.abs());

    GlobalTotals::new(total_income, total_expenses)
}
