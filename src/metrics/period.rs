//! Relative reporting windows, e.g. "the last three months".

use time::{Date, Month};

use crate::transaction::Transaction;

/// How far back a report looks from today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportPeriod {
    /// The last month.
    OneMonth,
    /// The last three months.
    #[default]
    ThreeMonths,
    /// The last six months.
    SixMonths,
    /// The last year.
    OneYear,
}

impl ReportPeriod {
    /// Every period, shortest first.
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::OneMonth,
        ReportPeriod::ThreeMonths,
        ReportPeriod::SixMonths,
        ReportPeriod::OneYear,
    ];

    /// Parse a period from a query string value.
    ///
    /// Returns `None` for values that do not name a period.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "1m" | "1mes" => Some(ReportPeriod::OneMonth),
            "3m" | "3meses" => Some(ReportPeriod::ThreeMonths),
            "6m" | "6meses" => Some(ReportPeriod::SixMonths),
            "1y" | "1ano" => Some(ReportPeriod::OneYear),
            _ => None,
        }
    }

    /// The value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportPeriod::OneMonth => "1m",
            ReportPeriod::ThreeMonths => "3m",
            ReportPeriod::SixMonths => "6m",
            ReportPeriod::OneYear => "1y",
        }
    }

    /// The name shown in the period selector.
    pub fn label(self) -> &'static str {
        match self {
            ReportPeriod::OneMonth => "Último mês",
            ReportPeriod::ThreeMonths => "Últimos 3 meses",
            ReportPeriod::SixMonths => "Últimos 6 meses",
            ReportPeriod::OneYear => "Último ano",
        }
    }

    fn months(self) -> u32 {
        match self {
            ReportPeriod::OneMonth => 1,
            ReportPeriod::ThreeMonths => 3,
            ReportPeriod::SixMonths => 6,
            ReportPeriod::OneYear => 12,
        }
    }
}

/// Step `date` back by `months` calendar months.
///
/// The day is clamped to the length of the resulting month, so 31 March
/// minus one month is the last day of February.
fn subtract_months(date: Date, months: u32) -> Date {
    let month_index = date.year() * 12 + i32::from(u8::from(date.month())) - 1 - months as i32;
    let year = month_index.div_euclid(12);
    // `rem_euclid(12) + 1` is always in 1..=12.
    let month = Month::try_from((month_index.rem_euclid(12) + 1) as u8).unwrap_or(Month::January);
    let day = date.day().min(time::util::days_in_month(month, year));

    Date::from_calendar_date(year, month, day).unwrap_or(date)
}

/// The earliest date included in `period` counting back from `today`.
///
/// `None` means there is no cutoff and every record is included.
pub fn period_cutoff(period: Option<ReportPeriod>, today: Date) -> Option<Date> {
    period.map(|period| subtract_months(today, period.months()))
}

/// The transactions dated on or after the cutoff of `period`.
pub fn filter_by_period(
    transactions: &[Transaction],
    period: Option<ReportPeriod>,
    today: Date,
) -> Vec<Transaction> {
    match period_cutoff(period, today) {
        Some(cutoff) => transactions
            .iter()
            .filter(|transaction| transaction.date >= cutoff)
            .cloned()
            .collect(),
        None => transactions.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::transaction::{Transaction, TransactionKind};

    use super::{ReportPeriod, filter_by_period, period_cutoff};

    #[test]
    fn parses_short_and_legacy_names() {
        assert_eq!(ReportPeriod::parse("1m"), Some(ReportPeriod::OneMonth));
        assert_eq!(ReportPeriod::parse("3meses"), Some(ReportPeriod::ThreeMonths));
        assert_eq!(ReportPeriod::parse("6m"), Some(ReportPeriod::SixMonths));
        assert_eq!(ReportPeriod::parse("1ano"), Some(ReportPeriod::OneYear));
        assert_eq!(ReportPeriod::parse("tudo"), None);
    }

    #[test]
    fn default_period_is_three_months() {
        assert_eq!(ReportPeriod::default(), ReportPeriod::ThreeMonths);
    }

    #[test]
    fn cutoff_subtracts_calendar_months() {
        let today = date!(2025 - 06 - 15);

        assert_eq!(
            period_cutoff(Some(ReportPeriod::OneMonth), today),
            Some(date!(2025 - 05 - 15))
        );
        assert_eq!(
            period_cutoff(Some(ReportPeriod::SixMonths), today),
            Some(date!(2024 - 12 - 15))
        );
        assert_eq!(
            period_cutoff(Some(ReportPeriod::OneYear), today),
            Some(date!(2024 - 06 - 15))
        );
    }

    #[test]
    fn cutoff_clamps_day_to_month_length() {
        assert_eq!(
            period_cutoff(Some(ReportPeriod::OneMonth), date!(2025 - 03 - 31)),
            Some(date!(2025 - 02 - 28))
        );
        assert_eq!(
            period_cutoff(Some(ReportPeriod::OneYear), date!(2024 - 02 - 29)),
            Some(date!(2023 - 02 - 28))
        );
    }

    #[test]
    fn no_period_means_no_cutoff() {
        assert_eq!(period_cutoff(None, date!(2025 - 06 - 15)), None);
    }

    #[test]
    fn filter_keeps_transactions_on_or_after_cutoff() {
        let transaction = |id, date| Transaction {
            id,
            description: "x".to_owned(),
            amount: 1.0,
            kind: TransactionKind::Expense,
            category: "Outros".to_owned(),
            date,
        };
        let transactions = vec![
            transaction(1, date!(2025 - 05 - 14)),
            transaction(2, date!(2025 - 05 - 15)),
            transaction(3, date!(2025 - 06 - 01)),
        ];

        let ids: Vec<i64> = filter_by_period(
            &transactions,
            Some(ReportPeriod::OneMonth),
            date!(2025 - 06 - 15),
        )
        .iter()
        .map(|transaction| transaction.id)
        .collect();

        assert_eq!(ids, vec![2, 3]);
        assert_eq!(filter_by_period(&transactions, None, date!(2025 - 06 - 15)).len(), 3);
    }
}
