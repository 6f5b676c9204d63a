//! finsight-core: Transaction model, summary views and date utilities

pub mod finance;
pub mod summary;
pub mod time;

pub use finance::{Transaction, TransactionType, UNCATEGORIZED};
pub use summary::{CategorySummary, GlobalTotals, MonthlyAnalysis, percentage_of};
pub use time::{INVALID_MONTH, month_key, parse_statement_date};
