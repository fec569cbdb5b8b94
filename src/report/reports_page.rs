//! Defines the route handler and view for the reports page.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    html::{
        CARD_STYLE, ECHARTS_URL, FORM_TEXT_INPUT_STYLE, HeadElement, Tone, format_currency, page,
        summary_card,
    },
    metrics::{
        CategoryTotal, KindTotals, ReportPeriod, bucket_by_month, filter_by_period,
        sum_by_category, totals_by_kind,
    },
    report::{
        charts::{ReportChart, category_chart, chart_container, charts_script, monthly_chart},
        tables::category_ranking_table,
    },
    store::Store,
    timezone::today,
    transaction::{Transaction, TransactionKind},
};

/// The query value that selects every transaction regardless of date.
const ALL_PERIODS: &str = "all";

/// The state needed for the reports page.
#[derive(Debug, Clone)]
pub struct ReportsPageState {
    pub store: Store,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for ReportsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportsQuery {
    /// One of `1m`, `3m`, `6m`, `1y` or `all`. Defaults to three months.
    pub period: Option<String>,
}

impl ReportsQuery {
    /// The selected period, where `None` means every transaction.
    ///
    /// A missing value selects the default period. A value that names no
    /// period selects everything.
    fn period(&self) -> Option<ReportPeriod> {
        match self.period.as_deref() {
            None | Some("") => Some(ReportPeriod::default()),
            Some(text) => ReportPeriod::parse(text),
        }
    }
}

struct ReportData {
    period: Option<ReportPeriod>,
    totals: KindTotals,
    categories: Vec<CategoryTotal>,
    monthly_chart: Option<ReportChart>,
    category_chart: Option<ReportChart>,
}

/// Display the totals and charts for the transactions in the selected period.
pub async fn get_reports_page(
    State(state): State<ReportsPageState>,
    Query(query): Query<ReportsQuery>,
) -> Result<Response, Error> {
    let today = today(&state.local_timezone)?;

    let transactions: Vec<Transaction> = state
        .store
        .load()
        .inspect_err(|error| tracing::error!("could not load transactions: {error}"))?;

    let period = query.period();
    let transactions = filter_by_period(&transactions, period, today);
    let buckets = bucket_by_month(&transactions);
    let categories = sum_by_category(&transactions, TransactionKind::Expense);

    let monthly_chart = (!buckets.is_empty()).then(|| ReportChart {
        id: "monthly-chart",
        options: monthly_chart(&buckets).to_string(),
    });
    let category_chart = (!categories.is_empty()).then(|| ReportChart {
        id: "category-chart",
        options: category_chart(&categories).to_string(),
    });

    Ok(reports_view(&ReportData {
        period,
        totals: totals_by_kind(&transactions),
        categories,
        monthly_chart,
        category_chart,
    })
    .into_response())
}

fn period_selector(selected: Option<ReportPeriod>) -> Markup {
    html! {
        form method="get" action=(endpoints::REPORTS_VIEW)
        {
            label for="period" class="sr-only" { "Período" }
            select
                name="period"
                id="period"
                onchange="this.form.submit()"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for period in ReportPeriod::ALL {
                    option value=(period.as_str()) selected[selected == Some(period)]
                    {
                        (period.label())
                    }
                }
                option value=(ALL_PERIODS) selected[selected.is_none()] { "Todo o período" }
            }

            noscript
            {
                button type="submit" { "Aplicar" }
            }
        }
    }
}

fn reports_view(data: &ReportData) -> Markup {
    let balance = data.totals.balance();
    let charts: Vec<&ReportChart> = [data.monthly_chart.as_ref(), data.category_chart.as_ref()]
        .into_iter()
        .flatten()
        .collect();

    let content = html! {
        header class="flex justify-between items-center"
        {
            div
            {
                h1 class="text-3xl font-bold" { "Relatórios Financeiros" }
                p class="text-gray-500 dark:text-gray-400" { "Análise detalhada das suas finanças" }
            }

            (period_selector(data.period))
        }

        section class="grid grid-cols-1 md:grid-cols-3 gap-6"
        {
            (summary_card("Total Receitas", &format_currency(data.totals.income), Tone::Positive, None))
            (summary_card("Total Despesas", &format_currency(data.totals.expense), Tone::Negative, None))
            (summary_card(
                "Saldo Período",
                &format_currency(balance),
                if balance >= 0.0 { Tone::Info } else { Tone::Negative },
                None
            ))
        }

        div class="grid grid-cols-1 lg:grid-cols-2 gap-6"
        {
            section class=(CARD_STYLE)
            {
                h2 class="text-lg font-semibold mb-4" { "Receitas vs Despesas por Mês" }
                (chart_container(data.monthly_chart.as_ref(), "Sem dados para exibir"))
            }

            section class=(CARD_STYLE)
            {
                h2 class="text-lg font-semibold mb-4" { "Despesas por Categoria" }
                (chart_container(data.category_chart.as_ref(), "Sem despesas para exibir"))
            }
        }

        (category_ranking_table(&data.categories, data.totals.expense))
    };

    let head_elements = if charts.is_empty() {
        Vec::new()
    } else {
        vec![
            HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
            charts_script(&charts),
        ]
    };

    page("Relatórios", endpoints::REPORTS_VIEW, &head_elements, &content)
}
