//! Pure calculations over snapshots of the stored collections.
//!
//! Nothing in this module touches the store or the clock, callers pass in
//! the records and today's date.

mod cdbs;
mod goals;
mod period;
mod transactions;

pub use cdbs::{
    ASSUMED_ANNUAL_BENCHMARK_RATE, CdbEstimate, PortfolioSummary, estimated_value,
    portfolio_summary,
};
pub use goals::{
    DUE_SOON_DAYS, DeadlineStatus, GoalProgress, GoalSummary, days_remaining, goal_progress,
    goal_summary,
};
pub use period::{ReportPeriod, filter_by_period, period_cutoff};
pub use transactions::{
    CategoryTotal, KindTotals, MonthBucket, TransactionFilter, bucket_by_month,
    filter_transactions, sum_by_category, totals_by_kind,
};
