//! Totals, filters and groupings over transactions.

use std::collections::BTreeMap;

use crate::transaction::{Transaction, TransactionKind};

/// Sums of income and expenses, with how many transactions went into each.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KindTotals {
    /// The sum of every income.
    pub income: f64,
    /// The sum of every expense.
    pub expense: f64,
    /// How many incomes were summed.
    pub income_count: usize,
    /// How many expenses were summed.
    pub expense_count: usize,
}

impl KindTotals {
    /// Income minus expenses.
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

/// Sum the amounts of `transactions` by kind.
pub fn totals_by_kind(transactions: &[Transaction]) -> KindTotals {
    transactions
        .iter()
        .fold(KindTotals::default(), |mut totals, transaction| {
            match transaction.kind {
                TransactionKind::Income => {
                    totals.income += transaction.amount;
                    totals.income_count += 1;
                }
                TransactionKind::Expense => {
                    totals.expense += transaction.amount;
                    totals.expense_count += 1;
                }
            }

            totals
        })
}

/// Criteria for narrowing down a list of transactions. Unset criteria match
/// everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Only transactions of this kind.
    pub kind: Option<TransactionKind>,
    /// Only transactions with exactly this category.
    pub category: Option<String>,
    /// Matched case-insensitively anywhere in the description.
    pub text: Option<String>,
}

impl TransactionFilter {
    /// Whether `transaction` meets every set criterion.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let kind_matches = self.kind.is_none_or(|kind| kind == transaction.kind);

        let category_matches = self
            .category
            .as_deref()
            .is_none_or(|category| category == transaction.category);

        let text_matches = self.text.as_deref().is_none_or(|text| {
            transaction
                .description
                .to_lowercase()
                .contains(&text.to_lowercase())
        });

        kind_matches && category_matches && text_matches
    }
}

/// The transactions matching every criteria of `filter`, in their original order.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| filter.matches(transaction))
        .cloned()
        .collect()
}

/// The income and expenses of one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    /// The month as `YYYY-MM`.
    pub year_month: String,
    /// Income received in the month.
    pub income: f64,
    /// Money spent in the month.
    pub expense: f64,
}

impl MonthBucket {
    /// A short label for chart axes, e.g. "03/25" for March 2025.
    pub fn short_label(&self) -> String {
        match self.year_month.split_once('-') {
            Some((year, month)) => {
                let year = year.get(year.len().saturating_sub(2)..).unwrap_or(year);
                format!("{month}/{year}")
            }
            None => self.year_month.clone(),
        }
    }
}

/// Group transactions by the month of their date, oldest month first.
pub fn bucket_by_month(transactions: &[Transaction]) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<String, MonthBucket> = BTreeMap::new();

    for transaction in transactions {
        let year_month = format!(
            "{:04}-{:02}",
            transaction.date.year(),
            u8::from(transaction.date.month())
        );

        let bucket = buckets
            .entry(year_month.clone())
            .or_insert_with(|| MonthBucket {
                year_month,
                income: 0.0,
                expense: 0.0,
            });

        match transaction.kind {
            TransactionKind::Income => bucket.income += transaction.amount,
            TransactionKind::Expense => bucket.expense += transaction.amount,
        }
    }

    buckets.into_values().collect()
}

/// The total amount for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category name as stored.
    pub category: String,
    /// The summed amount.
    pub total: f64,
}

impl CategoryTotal {
    /// This category's percentage of `grand_total`, or zero if there is no total.
    pub fn share_of(&self, grand_total: f64) -> f64 {
        if grand_total <= 0.0 {
            0.0
        } else {
            self.total / grand_total * 100.0
        }
    }
}

/// Sum the transactions of `kind` by category, largest total first.
///
/// Categories with equal totals keep the order they were first seen in.
pub fn sum_by_category(transactions: &[Transaction], kind: TransactionKind) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.kind == kind) {
        match totals
            .iter_mut()
            .find(|total| total.category == transaction.category)
        {
            Some(total) => total.total += transaction.amount,
            None => totals.push(CategoryTotal {
                category: transaction.category.clone(),
                total: transaction.amount,
            }),
        }
    }

    // `sort_by` is stable, so ties stay in first-seen order.
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::transaction::{Transaction, TransactionKind};

    use super::{
        CategoryTotal, MonthBucket, TransactionFilter, bucket_by_month, filter_transactions,
        sum_by_category, totals_by_kind,
    };

    fn transaction(
        id: i64,
        description: &str,
        amount: f64,
        kind: TransactionKind,
        category: &str,
        date: Date,
    ) -> Transaction {
        Transaction {
            id,
            description: description.to_owned(),
            amount,
            kind,
            category: category.to_owned(),
            date,
        }
    }

    fn sample() -> Vec<Transaction> {
        use TransactionKind::{Expense, Income};

        vec![
            transaction(1, "Salário março", 5000.0, Income, "Salário", date!(2025 - 03 - 05)),
            transaction(2, "Mercado", 450.0, Expense, "Alimentação", date!(2025 - 03 - 10)),
            transaction(3, "Uber", 50.0, Expense, "Transporte", date!(2025 - 02 - 20)),
            transaction(4, "Padaria", 30.0, Expense, "Alimentação", date!(2025 - 02 - 21)),
            transaction(5, "Projeto", 800.0, Income, "Freelance", date!(2024 - 12 - 15)),
        ]
    }

    #[test]
    fn totals_sum_amounts_by_kind() {
        let totals = totals_by_kind(&sample());

        assert_eq!(totals.income, 5800.0);
        assert_eq!(totals.expense, 530.0);
        assert_eq!(totals.income_count, 2);
        assert_eq!(totals.expense_count, 3);
        assert_eq!(totals.balance(), 5270.0);
    }

    #[test]
    fn totals_of_nothing_are_zero() {
        let totals = totals_by_kind(&[]);

        assert_eq!(totals.income, 0.0);
        assert_eq!(totals.expense, 0.0);
        assert_eq!(totals.balance(), 0.0);
    }

    #[test]
    fn empty_filter_returns_input_unchanged() {
        let transactions = sample();

        let got = filter_transactions(&transactions, &TransactionFilter::default());

        assert_eq!(got, transactions);
    }

    #[test]
    fn text_filter_is_case_insensitive() {
        let filter = TransactionFilter {
            text: Some("MERC".to_owned()),
            ..Default::default()
        };

        let got = filter_transactions(&sample(), &filter);

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].description, "Mercado");
    }

    #[test]
    fn filters_are_combined() {
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Expense),
            category: Some("Alimentação".to_owned()),
            text: Some("a".to_owned()),
        };

        let got: Vec<i64> = filter_transactions(&sample(), &filter)
            .iter()
            .map(|transaction| transaction.id)
            .collect();

        assert_eq!(got, vec![2, 4]);
    }

    #[test]
    fn buckets_are_sorted_by_month() {
        let buckets = bucket_by_month(&sample());

        let want = vec![
            MonthBucket {
                year_month: "2024-12".to_owned(),
                income: 800.0,
                expense: 0.0,
            },
            MonthBucket {
                year_month: "2025-02".to_owned(),
                income: 0.0,
                expense: 80.0,
            },
            MonthBucket {
                year_month: "2025-03".to_owned(),
                income: 5000.0,
                expense: 450.0,
            },
        ];
        assert_eq!(buckets, want);
    }

    #[test]
    fn bucket_sums_match_totals() {
        let transactions = sample();
        let totals = totals_by_kind(&transactions);

        let buckets = bucket_by_month(&transactions);

        let income: f64 = buckets.iter().map(|bucket| bucket.income).sum();
        let expense: f64 = buckets.iter().map(|bucket| bucket.expense).sum();
        assert_eq!(income, totals.income);
        assert_eq!(expense, totals.expense);
    }

    #[test]
    fn short_label_is_month_and_two_digit_year() {
        let bucket = MonthBucket {
            year_month: "2025-03".to_owned(),
            income: 0.0,
            expense: 0.0,
        };

        assert_eq!(bucket.short_label(), "03/25");
    }

    #[test]
    fn category_totals_are_sorted_descending() {
        let totals = sum_by_category(&sample(), TransactionKind::Expense);

        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: "Alimentação".to_owned(),
                    total: 480.0
                },
                CategoryTotal {
                    category: "Transporte".to_owned(),
                    total: 50.0
                },
            ]
        );
    }

    #[test]
    fn category_ties_keep_first_seen_order() {
        use TransactionKind::Expense;
        let transactions = vec![
            transaction(1, "a", 10.0, Expense, "Lazer", date!(2025 - 01 - 01)),
            transaction(2, "b", 20.0, Expense, "Saúde", date!(2025 - 01 - 02)),
            transaction(3, "c", 10.0, Expense, "Compras", date!(2025 - 01 - 03)),
        ];

        let categories: Vec<String> = sum_by_category(&transactions, Expense)
            .into_iter()
            .map(|total| total.category)
            .collect();

        assert_eq!(categories, vec!["Saúde", "Lazer", "Compras"]);
    }

    #[test]
    fn share_of_zero_total_is_zero() {
        let total = CategoryTotal {
            category: "Lazer".to_owned(),
            total: 25.0,
        };

        assert_eq!(total.share_of(100.0), 25.0);
        assert_eq!(total.share_of(0.0), 0.0);
    }
}
