//! Derived summary views produced by an aggregation pass.

use serde::{Deserialize, Serialize};

/// Income, expenses and savings for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyAnalysis {
    /// Month key, e.g. "Jan 2024"
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    /// Always `income - expenses`
    pub savings: f64,
}

impl MonthlyAnalysis {
    pub fn new(month: impl Into<String>, income: f64, expenses: f64) -> Self {
        Self {
            month: month.into(),
            income,
            expenses,
            savings: income - expenses,
        }
    }
}

/// Expense total for one category and its share of all expenses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub total: f64,
    /// Share of total expenses in percent; 0 when there are no expenses
    pub percentage: f64,
}

impl CategorySummary {
    pub fn new(category: impl Into<String>, total: f64, total_expenses: f64) -> Self {
        Self {
            category: category.into(),
            total,
            percentage: percentage_of(total, total_expenses),
        }
    }
}

/// Statement-wide totals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalTotals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_savings: f64,
}

impl GlobalTotals {
    pub fn new(total_income: f64, total_expenses: f64) -> Self {
        Self {
            total_income,
            total_expenses,
            net_savings: total_income - total_expenses,
        }
    }
}

/// `part / whole * 100`, with a zero (or non-finite) whole mapped to 0%.
pub fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() {
        return 0.0;
    }
    part / whole * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_savings_invariant() {
        let m = MonthlyAnalysis::new("Jan 2024", 3000.0, 1500.0);
        assert_eq!(m.savings, 1500.0);

        let m = MonthlyAnalysis::new("Feb 2024", 100.0, 250.0);
        assert_eq!(m.savings, -150.0);
    }

    #[test]
    fn test_percentage_of_zero_total() {
        assert_eq!(percentage_of(10.0, 0.0), 0.0);
        assert_eq!(percentage_of(0.0, 0.0), 0.0);
        assert_eq!(percentage_of(300.0, 1500.0), 20.0);
    }

    #[test]
    fn test_global_totals_camel_case() {
        let totals = GlobalTotals::new(6000.0, 1500.0);
        assert_eq!(totals.net_savings, 4500.0);

        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["totalIncome"], 6000.0);
        assert_eq!(json["totalExpenses"], 1500.0);
        assert_eq!(json["netSavings"], 4500.0);
    }
}
