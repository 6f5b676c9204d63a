//! finsight-analysis: aggregation engine over normalized transactions

pub mod aggregate;
pub mod analysis;

pub use aggregate::{category_totals, global_totals, monthly_series};
pub use analysis::Analysis;
