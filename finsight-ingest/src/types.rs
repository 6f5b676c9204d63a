use finsight_core::Transaction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with a row whose amount parses but whose date does not
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    /// Keep the row with no date; it groups under the "Invalid Date" month
    #[default]
    Keep,
    /// Skip the row, same as an unparseable amount
    Drop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    #[serde(default)]
    pub date_policy: DatePolicy,
}

/// Why a statement row was left out of the normalized output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// Fewer than the date, description and amount columns
    MissingFields,
    /// Amount has no finite numeric prefix
    InvalidAmount,
    /// Date unparseable under `DatePolicy::Drop`
    InvalidDate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::MissingFields => "missing fields",
            SkipReason::InvalidAmount => "invalid amount",
            SkipReason::InvalidDate => "invalid date",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based position in the raw input (the header is line 1)
    pub line: usize,
    pub reason: SkipReason,
}

/// Output of the normalizer: kept transactions in input order plus the
/// rows that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Normalized {
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedRow>,
}

impl Normalized {
    /// Number of data rows left out
    pub fn dropped(&self) -> usize {
        self.skipped.len()
    }
}
