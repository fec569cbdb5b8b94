//! Dashboard HTTP handler and view rendering.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error,
    backup::backup_section,
    cdb::Cdb,
    endpoints,
    goal::Goal,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, Tone, empty_state, format_currency, format_long_date,
        link, page, progress_bar, summary_card,
    },
    metrics::{KindTotals, PortfolioSummary, goal_progress, portfolio_summary, totals_by_kind},
    store::Store,
    timezone::today,
    transaction::{Transaction, transaction_list_item},
    view_state::ViewMode,
};

/// How many of the most recent transactions are listed.
const RECENT_TRANSACTIONS: usize = 5;
/// How many goals are listed.
const GOALS_SHOWN: usize = 3;

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub store: Store,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Holds all the data needed to render the dashboard.
struct DashboardData<'a> {
    today: Date,
    totals: KindTotals,
    portfolio: PortfolioSummary,
    recent_transactions: &'a [Transaction],
    goals: &'a [Goal],
}

/// Display a page with an overview of the user's data.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let today = today(&state.local_timezone)?;

    let transactions: Vec<Transaction> = state
        .store
        .load()
        .inspect_err(|error| tracing::error!("could not load transactions: {error}"))?;
    let goals: Vec<Goal> = state
        .store
        .load()
        .inspect_err(|error| tracing::error!("could not load goals: {error}"))?;
    let cdbs: Vec<Cdb> = state
        .store
        .load()
        .inspect_err(|error| tracing::error!("could not load CDBs: {error}"))?;

    let data = DashboardData {
        today,
        totals: totals_by_kind(&transactions),
        portfolio: portfolio_summary(&cdbs, today),
        recent_transactions: &transactions[..transactions.len().min(RECENT_TRANSACTIONS)],
        goals: &goals[..goals.len().min(GOALS_SHOWN)],
    };

    Ok(dashboard_view(&data).into_response())
}

fn goal_summary_item(goal: &Goal) -> Markup {
    let progress = goal_progress(goal);

    html! {
        li class="p-3 bg-gray-50 rounded-lg dark:bg-gray-700" data-goal-id=(goal.id)
        {
            div class="flex justify-between items-center mb-2"
            {
                p class="font-medium" { (goal.category.icon()) " " (goal.name) }
                span class="text-sm text-gray-500 dark:text-gray-400"
                {
                    (format_currency(goal.current_amount)) " / " (format_currency(goal.target_amount))
                }
            }

            (progress_bar(progress.percent, progress.completed))
        }
    }
}

fn dashboard_view(data: &DashboardData<'_>) -> Markup {
    let DashboardData {
        today,
        totals,
        portfolio,
        recent_transactions,
        goals,
    } = data;

    let income_detail = format!("{} transações", totals.income_count);
    let expense_detail = format!("{} transações", totals.expense_count);
    let cdb_detail = format!("{} investimentos", portfolio.count);
    let new_transaction_url = ViewMode::Idle
        .open_create()
        .href(endpoints::TRANSACTIONS_VIEW);

    let content = html! {
        header class="flex justify-between items-center"
        {
            div
            {
                h1 class="text-3xl font-bold" { "Dashboard Financeiro" }
                p class="text-gray-500 dark:text-gray-400" data-today { (format_long_date(*today)) }
            }

            a href=(new_transaction_url) class=(BUTTON_PRIMARY_STYLE) { "+ Nova Transação" }
        }

        section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6"
        {
            (summary_card("Saldo do Mês", &format_currency(totals.balance()), Tone::of(totals.balance()), None))
            (summary_card("Receitas", &format_currency(totals.income), Tone::Info, Some(&income_detail)))
            (summary_card("Despesas", &format_currency(totals.expense), Tone::Negative, Some(&expense_detail)))
            (summary_card("Total em CDBs", &format_currency(portfolio.invested), Tone::Neutral, Some(&cdb_detail)))
        }

        div class="grid grid-cols-1 lg:grid-cols-2 gap-6"
        {
            section class=(CARD_STYLE) id="recent-transactions"
            {
                div class="flex justify-between items-center mb-4"
                {
                    h2 class="text-lg font-semibold" { "Transações Recentes" }
                    (link(endpoints::TRANSACTIONS_VIEW, "Ver todas"))
                }

                @if recent_transactions.is_empty() {
                    (empty_state("Nenhuma transação encontrada"))
                } @else {
                    ul class="space-y-3"
                    {
                        @for transaction in *recent_transactions {
                            (transaction_list_item(transaction))
                        }
                    }
                }
            }

            section class=(CARD_STYLE) id="goals"
            {
                div class="flex justify-between items-center mb-4"
                {
                    h2 class="text-lg font-semibold" { "Metas Financeiras" }
                    (link(endpoints::GOALS_VIEW, "Ver todas"))
                }

                @if goals.is_empty() {
                    (empty_state("Nenhuma meta criada"))
                } @else {
                    ul class="space-y-3"
                    {
                        @for goal in *goals {
                            (goal_summary_item(goal))
                        }
                    }
                }
            }
        }

        (backup_section())
    };

    page("Dashboard", endpoints::DASHBOARD_VIEW, &[], &content)
}
