//! Record normalizer: already-split statement rows into typed transactions.
//!
//! Column order is fixed: date, description, amount, category. The first
//! row is always a header and is skipped by position. Malformed rows are
//! dropped, never reported as errors.

use finsight_core::{Transaction, parse_statement_date};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::types::{DatePolicy, NormalizeOptions, Normalized, SkipReason, SkippedRow};

const DATE_COL: usize = 0;
const DESCRIPTION_COL: usize = 1;
const AMOUNT_COL: usize = 2;
const CATEGORY_COL: usize = 3;

static AMOUNT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("amount prefix pattern is valid")
});

/// Parse the leading numeric part of an amount field.
///
/// "-4.50" and "12.5 USD" parse; "abc", "$12" and overflowing exponents do not.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let m = AMOUNT_PREFIX.find(raw)?;
    let value: f64 = m.as_str().trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Normalize rows with the default options.
pub fn normalize<I, R, S>(rows: I) -> Normalized
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    normalize_with(rows, &NormalizeOptions::default())
}

/// Normalize rows, skipping the header row and dropping malformed rows.
pub fn normalize_with<I, R, S>(rows: I, options: &NormalizeOptions) -> Normalized
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut out = Normalized::default();

    for (idx, row) in rows.into_iter().enumerate().skip(1) {
        let line = idx + 1;
        match normalize_row(row.as_ref(), options) {
            Ok(txn) => out.transactions.push(txn),
            Err(reason) => {
                debug!(line, %reason, "skipping statement row");
                out.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    info!(
        kept = out.transactions.len(),
        skipped = out.dropped(),
        "normalized statement rows"
    );
    out
}

fn normalize_row<S: AsRef<str>>(
    fields: &[S],
    options: &NormalizeOptions,
) -> Result<Transaction, SkipReason> {
    if fields.len() <= AMOUNT_COL {
        return Err(SkipReason::MissingFields);
    }

    let amount = parse_amount(fields[AMOUNT_COL].as_ref()).ok_or(SkipReason::InvalidAmount)?;

    let date = parse_statement_date(fields[DATE_COL].as_ref());
    if date.is_none() && options.date_policy == DatePolicy::Drop {
        return Err(SkipReason::InvalidDate);
    }

    let category = fields.get(CATEGORY_COL).map(|c| c.as_ref()).unwrap_or("");

    Ok(Transaction::new(
        date,
        fields[DESCRIPTION_COL].as_ref(),
        amount,
        category,
    ))
}
