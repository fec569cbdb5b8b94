//! Reports over a recent period: totals, a monthly income and expense
//! chart, and how expenses split across categories.

mod charts;
mod reports_page;
mod tables;

pub use reports_page::get_reports_page;
