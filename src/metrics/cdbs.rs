//! Estimated growth of fixed-income positions.

use time::Date;

use crate::cdb::Cdb;

/// The annual benchmark (CDI) rate assumed for every estimate.
///
/// There is no market data feed, so this is a fixed approximation.
pub const ASSUMED_ANNUAL_BENCHMARK_RATE: f64 = 0.105;

/// The estimated state of a position on a given day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdbEstimate {
    /// The principal plus the estimated gain.
    pub current_value: f64,
    /// The estimated interest earned so far.
    pub gain: f64,
    /// How much of the time between start and maturity has passed, from 0 to 100.
    pub percent_complete: f64,
}

/// Estimate the value of `cdb` on `today` by compounding the assumed
/// benchmark rate daily since the start date.
///
/// Days before the start date count as zero elapsed days. When the maturity
/// date is not after the start date, the position is 100% complete once any
/// day has elapsed and 0% before that.
pub fn estimated_value(cdb: &Cdb, today: Date) -> CdbEstimate {
    let annual_rate = ASSUMED_ANNUAL_BENCHMARK_RATE * (cdb.benchmark_rate / 100.0);
    let daily_rate = annual_rate / 365.0;

    let elapsed_days = (today - cdb.start_date).whole_days().max(0);
    let total_days = (cdb.maturity_date - cdb.start_date).whole_days();

    let gain = cdb.invested_amount * ((1.0 + daily_rate).powf(elapsed_days as f64) - 1.0);

    let percent_complete = if total_days <= 0 {
        if elapsed_days > 0 { 100.0 } else { 0.0 }
    } else {
        (elapsed_days as f64 / total_days as f64 * 100.0).clamp(0.0, 100.0)
    };

    CdbEstimate {
        current_value: cdb.invested_amount + gain,
        gain,
        percent_complete,
    }
}

/// Totals across every position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PortfolioSummary {
    /// The sum of every invested amount.
    pub invested: f64,
    /// The sum of every estimated gain.
    pub gain: f64,
    /// How many positions are held.
    pub count: usize,
}

impl PortfolioSummary {
    /// The estimated gain as a percentage of the amount invested.
    pub fn gain_percent(&self) -> f64 {
        if self.invested <= 0.0 {
            0.0
        } else {
            self.gain / self.invested * 100.0
        }
    }
}

/// Sum the invested amounts and estimated gains of every position.
pub fn portfolio_summary(cdbs: &[Cdb], today: Date) -> PortfolioSummary {
    cdbs.iter()
        .fold(PortfolioSummary::default(), |mut summary, cdb| {
            summary.invested += cdb.invested_amount;
            summary.gain += estimated_value(cdb, today).gain;
            summary.count += 1;
            summary
        })
}

#[cfg(test)]
mod tests {
    use time::{Date, Duration, macros::date};

    use crate::cdb::{Cdb, RateType};

    use super::{estimated_value, portfolio_summary};

    fn cdb(invested_amount: f64, benchmark_rate: f64, start_date: Date, maturity_date: Date) -> Cdb {
        Cdb {
            id: 1,
            name: "CDB Teste".to_owned(),
            bank: "Banco".to_owned(),
            invested_amount,
            benchmark_rate,
            start_date,
            maturity_date,
            rate_type: RateType::FloatingRate,
        }
    }

    #[test]
    fn one_year_at_full_benchmark() {
        let start = date!(2024 - 01 - 01);
        let today = start + Duration::days(365);
        let position = cdb(1000.0, 100.0, start, start + Duration::days(730));

        let estimate = estimated_value(&position, today);

        let want_gain = 1000.0 * ((1.0_f64 + 0.105 / 365.0).powf(365.0) - 1.0);
        assert_eq!(estimate.gain, want_gain);
        assert!((estimate.gain - 110.7).abs() < 0.1, "gain was {}", estimate.gain);
        assert_eq!(estimate.current_value, 1000.0 + want_gain);
        assert_eq!(estimate.percent_complete, 50.0);
    }

    #[test]
    fn rate_scales_the_benchmark() {
        let start = date!(2024 - 01 - 01);
        let today = start + Duration::days(100);

        let full = estimated_value(&cdb(1000.0, 100.0, start, date!(2026 - 01 - 01)), today);
        let boosted = estimated_value(&cdb(1000.0, 120.0, start, date!(2026 - 01 - 01)), today);

        assert!(boosted.gain > full.gain);
    }

    #[test]
    fn future_start_has_no_gain() {
        let today = date!(2025 - 01 - 01);
        let position = cdb(1000.0, 100.0, date!(2025 - 02 - 01), date!(2026 - 02 - 01));

        let estimate = estimated_value(&position, today);

        assert_eq!(estimate.gain, 0.0);
        assert_eq!(estimate.current_value, 1000.0);
        assert_eq!(estimate.percent_complete, 0.0);
    }

    #[test]
    fn past_maturity_is_complete() {
        let position = cdb(1000.0, 100.0, date!(2023 - 01 - 01), date!(2024 - 01 - 01));

        let estimate = estimated_value(&position, date!(2025 - 01 - 01));

        assert_eq!(estimate.percent_complete, 100.0);
    }

    #[test]
    fn maturity_not_after_start() {
        let start = date!(2025 - 01 - 01);
        let position = cdb(1000.0, 100.0, start, start);

        assert_eq!(estimated_value(&position, start).percent_complete, 0.0);
        assert_eq!(
            estimated_value(&position, start + Duration::days(1)).percent_complete,
            100.0
        );
    }

    #[test]
    fn portfolio_sums_positions() {
        let start = date!(2025 - 01 - 01);
        let positions = vec![
            cdb(1000.0, 100.0, start, date!(2026 - 01 - 01)),
            cdb(3000.0, 110.0, start, date!(2027 - 01 - 01)),
        ];

        let summary = portfolio_summary(&positions, start);

        assert_eq!(summary.invested, 4000.0);
        assert_eq!(summary.gain, 0.0);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.gain_percent(), 0.0);
    }
}
