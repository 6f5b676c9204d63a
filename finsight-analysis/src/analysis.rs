//! One aggregation pass: all summary views for a transaction set.

use finsight_core::{CategorySummary, GlobalTotals, MonthlyAnalysis, Transaction};
use serde::Serialize;
use tracing::info;

use crate::aggregate::{category_totals, global_totals, monthly_series};

/// Snapshot of every derived view, computed from scratch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub totals: GlobalTotals,
    pub monthly: Vec<MonthlyAnalysis>,
    pub categories: Vec<CategorySummary>,
    pub transaction_count: usize,
}

impl Analysis {
    pub fn compute(txns: &[Transaction]) -> Self {
        let analysis = Self {
            totals: global_totals(txns),
            monthly: monthly_series(txns),
            categories: category_totals(txns),
            transaction_count: txns.len(),
        };

        info!(
            transactions = analysis.transaction_count,
            months = analysis.monthly.len(),
            categories = analysis.categories.len(),
            "aggregation pass complete"
        );
        analysis
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}
