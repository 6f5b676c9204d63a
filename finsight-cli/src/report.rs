//! Text and JSON rendering of an aggregation pass.

use anyhow::{Context, Result};
use clap::ValueEnum;
use finsight_analysis::Analysis;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::config::ReportSection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    analysis: &'a Analysis,
    skipped_rows: usize,
}

pub fn render_json(analysis: &Analysis, skipped_rows: usize) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        analysis,
        skipped_rows,
    })
    .context("serialize report")
}

fn money(value: f64, symbol: &str) -> String {
    if value < 0.0 {
        format!("-{symbol}{:.2}", value.abs())
    } else {
        format!("{symbol}{:.2}", value)
    }
}

fn bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage / 100.0) * width as f64)
        .round()
        .clamp(0.0, width as f64) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn render_text(
    analysis: &Analysis,
    skipped_rows: usize,
    opts: &ReportSection,
) -> Result<String> {
    let sym = opts.currency_symbol.as_str();
    let totals = &analysis.totals;
    let mut out = String::new();

    for (label, value) in [
        ("Total Income", totals.total_income),
        ("Total Expenses", totals.total_expenses),
        ("Net Savings", totals.net_savings),
    ] {
        writeln!(out, "{:<16}{:>14}", label, money(value, sym))?;
    }

    if analysis.is_empty() {
        writeln!(out, "\nNo transactions found in statement.")?;
    } else {
        writeln!(out, "\n## Monthly Overview\n")?;
        writeln!(
            out,
            "{:<14}{:>14}{:>14}{:>14}",
            "Month",
            "Income",
            "Expenses",
            "Savings"
        )?;
        for m in &analysis.monthly {
            writeln!(
                out,
                "{:<14}{:>14}{:>14}{:>14}",
                m.month,
                money(m.income, sym),
                money(m.expenses, sym),
                money(m.savings, sym)
            )?;
        }

        writeln!(out, "\n## Category Breakdown\n")?;
        if analysis.categories.is_empty() {
            writeln!(out, "(no expenses)")?;
        }
        for c in &analysis.categories {
            writeln!(
                out,
                "{:<20} {} {:>14} {:>6.1}%",
                c.category,
                bar(c.percentage, opts.bar_width),
                money(c.total, sym),
                c.percentage
            )?;
        }
    }

    if skipped_rows > 0 {
        writeln!(out, "\nSkipped {} malformed rows", skipped_rows)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use finsight_core::Transaction;

    fn sample() -> Analysis {
        let txns = vec![
            Transaction::new(None, "Salary", 3000.0, "Income"),
            Transaction::new(None, "Rent", -1200.0, "Housing"),
            Transaction::new(None, "Groceries", -300.0, "Food"),
        ];
        Analysis::compute(&txns)
    }

    #[test]
    fn test_money_format() {
        assert_eq!(money(1500.0, "$"), "$1500.00");
        assert_eq!(money(-150.5, "$"), "-$150.50");
        assert_eq!(money(0.0, "€"), "€0.00");
    }

    #[test]
    fn test_bar_proportions() {
        assert_eq!(bar(80.0, 10), "########..");
        assert_eq!(bar(0.0, 4), "....");
        assert_eq!(bar(100.0, 4), "####");
    }

    #[test]
    fn test_render_text_sections() {
        let opts = ReportSection::default();
        let text = render_text(&sample(), 0, &opts).unwrap();
        assert!(text.contains("Total Income"));
        assert!(text.contains("$3000.00"));
        assert!(text.contains("$1500.00"));
        assert!(text.contains("Invalid Date"));
        assert!(text.contains("80.0%"));
        assert!(text.contains("20.0%"));
        assert!(!text.contains("Skipped"));
    }

    #[test]
    fn test_render_text_empty_and_skipped() {
        let empty = Analysis::compute(&[]);
        let text = render_text(&empty, 3, &ReportSection::default()).unwrap();
        assert!(text.contains("$0.00"));
        assert!(text.contains("No transactions found"));
        assert!(text.contains("Skipped 3 malformed rows"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample(), 2).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["skippedRows"], 2);
        assert_eq!(v["totals"]["totalIncome"], 3000.0);
        assert_eq!(v["categories"][0]["category"], "Housing");
    }
}
