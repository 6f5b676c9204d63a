//! Finance record types: normalized statement transactions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category label used when a statement row carries none
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Direction of a transaction, fixed once at normalization time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl TransactionType {
    /// Non-negative amounts are income, negative amounts are expenses
    pub fn from_signed(amount: f64) -> Self {
        if amount >= 0.0 {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }
}

/// A single normalized statement record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Calendar date; `None` when the source date could not be parsed
    pub date: Option<NaiveDate>,
    /// Free-text label, kept verbatim
    pub description: String,
    /// Magnitude of the transaction; direction lives in `kind`
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Create a Transaction from a signed amount.
    ///
    /// The sign picks the type and is then dropped. An empty category
    /// falls back to [`UNCATEGORIZED`].
    pub fn new(
        date: Option<NaiveDate>,
        description: impl Into<String>,
        signed_amount: f64,
        category: impl Into<String>,
    ) -> Self {
        let category = category.into();
        let category = if category.trim().is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            category.trim().to_string()
        };

        Self {
            date,
            description: description.into(),
            amount: signed_amount.abs(),
            category,
            kind: TransactionType::from_signed(signed_amount),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_from_negative_amount() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let txn = Transaction::new(Some(date), "Coffee", -4.50, "Food");
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.amount, 4.50);
        assert!(txn.is_expense());
    }

    #[test]
    fn test_zero_is_income() {
        let txn = Transaction::new(None, "Adjustment", 0.0, "Misc");
        assert!(txn.is_income());
        assert_eq!(txn.amount, 0.0);
    }

    #[test]
    fn test_empty_category_defaults() {
        let txn = Transaction::new(None, "Coffee", -4.50, "");
        assert_eq!(txn.category, UNCATEGORIZED);

        let txn = Transaction::new(None, "Coffee", -4.50, "   ");
        assert_eq!(txn.category, UNCATEGORIZED);

        let txn = Transaction::new(None, "Coffee", -4.50, " Food ");
        assert_eq!(txn.category, "Food");
    }

    #[test]
    fn test_serializes_type_field() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let txn = Transaction::new(Some(date), "Salary", 3000.0, "Income");
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["amount"], 3000.0);
    }
}
