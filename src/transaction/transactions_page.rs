//! Defines the route handler for the page that lists and filters transactions.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use serde::Deserialize;

use crate::{
    AppState, Error,
    forms::optional_text,
    metrics::{TransactionFilter, filter_transactions, totals_by_kind},
    store::Store,
    timezone::today,
    transaction::{
        Transaction, TransactionKind,
        view::{TransactionsViewData, transactions_view},
    },
    view_state::{ViewMode, ViewQuery},
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    pub store: Store,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The filters and view mode for the transactions page.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionsQuery {
    /// Text to look for in descriptions.
    pub search: Option<String>,
    /// `receita` or `despesa`. Anything else shows every kind.
    pub kind: Option<String>,
    pub category: Option<String>,
    /// `create` opens the modal for a new transaction.
    pub mode: Option<String>,
}

impl TransactionsQuery {
    fn filter(&self) -> TransactionFilter {
        TransactionFilter {
            kind: self
                .kind
                .as_deref()
                .and_then(|kind| kind.parse::<TransactionKind>().ok()),
            category: optional_text(self.category.as_deref()),
            text: optional_text(self.search.as_deref()),
        }
    }

    fn view_mode(&self) -> ViewMode {
        ViewMode::from_query(&ViewQuery {
            mode: self.mode.clone(),
            edit: None,
        })
    }
}

/// Display the transactions matching the query with their totals.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Response, Error> {
    let today = today(&state.local_timezone)?;

    let transactions: Vec<Transaction> = state
        .store
        .load()
        .inspect_err(|error| tracing::error!("could not load transactions: {error}"))?;

    let filter = query.filter();
    let filtered = filter_transactions(&transactions, &filter);
    let totals = totals_by_kind(&filtered);

    Ok(transactions_view(TransactionsViewData {
        transactions: &filtered,
        totals,
        filter: &filter,
        mode: query.view_mode(),
        today,
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use axum_extra::extract::Query;
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        test_utils::{
            assert_form_input, assert_hx_endpoint, assert_status_ok, assert_valid_html,
            get_test_store, must_get_form, parse_html_document, sample_transaction,
        },
        transaction::{Transaction, TransactionKind},
    };

    use super::{TransactionsPageState, TransactionsQuery, get_transactions_page};

    fn get_state(transactions: &[Transaction]) -> TransactionsPageState {
        let store = get_test_store();
        store.save(transactions).unwrap();

        TransactionsPageState {
            store,
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn listed_ids(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("li[data-transaction-id]").unwrap())
            .filter_map(|item| item.value().attr("data-transaction-id"))
            .map(str::to_owned)
            .collect()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            sample_transaction(3, "Salário", 5000.0, TransactionKind::Income, "Salário"),
            sample_transaction(2, "Mercado", 300.0, TransactionKind::Expense, "Alimentação"),
            sample_transaction(1, "Cinema", 60.0, TransactionKind::Expense, "Lazer"),
        ]
    }

    #[tokio::test]
    async fn lists_all_transactions_in_stored_order() {
        let state = get_state(&sample());

        let response = get_transactions_page(State(state), Query(TransactionsQuery::default()))
            .await
            .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(listed_ids(&html), vec!["3", "2", "1"]);
    }

    #[tokio::test]
    async fn filters_by_kind_and_search_text() {
        let state = get_state(&sample());
        let query = TransactionsQuery {
            search: Some("cine".to_owned()),
            kind: Some("despesa".to_owned()),
            ..Default::default()
        };

        let response = get_transactions_page(State(state), Query(query))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(listed_ids(&html), vec!["1"]);
    }

    #[tokio::test]
    async fn unknown_kind_shows_everything() {
        let state = get_state(&sample());
        let query = TransactionsQuery {
            kind: Some("todos".to_owned()),
            ..Default::default()
        };

        let response = get_transactions_page(State(state), Query(query))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(listed_ids(&html).len(), 3);
    }

    #[tokio::test]
    async fn shows_empty_state_without_transactions() {
        let state = get_state(&[]);

        let response = get_transactions_page(State(state), Query(TransactionsQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let empty_state = html
            .select(&Selector::parse("[data-empty-state]").unwrap())
            .next();
        assert!(empty_state.is_some(), "want empty state message");
    }

    #[tokio::test]
    async fn create_mode_shows_form() {
        let state = get_state(&[]);
        let query = TransactionsQuery {
            mode: Some("create".to_owned()),
            ..Default::default()
        };

        let response = get_transactions_page(State(state), Query(query))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let dialog = html
            .select(&Selector::parse("[role=dialog] form").unwrap())
            .next()
            .expect("want create form inside a dialog");
        assert_hx_endpoint(&dialog, endpoints::TRANSACTIONS_API, "hx-post");
        assert_form_input(&dialog, "description", "text");
        assert_form_input(&dialog, "amount", "number");
    }

    #[tokio::test]
    async fn idle_mode_has_no_create_form() {
        let state = get_state(&[]);

        let response = get_transactions_page(State(state), Query(TransactionsQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        // The only form on the page is the filter form.
        let form = must_get_form(&html);
        assert_eq!(form.value().attr("role"), Some("search"));
        assert!(
            html.select(&Selector::parse("[role=dialog]").unwrap())
                .next()
                .is_none()
        );
    }

    #[test]
    fn filter_ignores_blank_values() {
        let query = TransactionsQuery {
            search: Some("".to_owned()),
            kind: Some("".to_owned()),
            category: Some("".to_owned()),
            mode: None,
        };

        assert_eq!(query.filter(), Default::default());
    }
}
