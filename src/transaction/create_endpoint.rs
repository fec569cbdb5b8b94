//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error, endpoints,
    forms::{date_or, required_amount, required_text},
    store::{Store, next_record_id},
    timezone::today,
    transaction::{Transaction, TransactionKind},
    view_state::ViewMode,
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    pub store: Store,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    pub description: Option<String>,
    /// The amount in reais, never negative.
    pub amount: Option<String>,
    /// `receita` or `despesa`, defaults to `despesa`.
    pub kind: Option<String>,
    pub category: Option<String>,
    /// Defaults to today.
    pub date: Option<String>,
}

impl TransactionForm {
    /// Check every field and build the transaction the form describes.
    fn into_transaction(self, id: i64, today: Date) -> Result<Transaction, Error> {
        let description = required_text(self.description.as_deref(), "description")?;
        let amount = required_amount(self.amount.as_deref(), "amount")?;
        let category = required_text(self.category.as_deref(), "category")?;

        let kind = match self.kind.as_deref().map(str::trim) {
            None | Some("") => TransactionKind::Expense,
            Some(kind) => kind.parse()?,
        };
        let date = date_or(self.date.as_deref(), "date", today)?;

        Ok(Transaction {
            id,
            description,
            amount,
            kind,
            category,
            date,
        })
    }
}

/// A route handler for creating a new transaction, redirects to transactions view on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let today = match today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let result = state.store.update(|transactions: &mut Vec<Transaction>| {
        let id = next_record_id(
            OffsetDateTime::now_utc(),
            transactions.iter().map(|transaction| transaction.id),
        );
        let transaction = form.into_transaction(id, today)?;
        transactions.insert(0, transaction);

        Ok(())
    });

    if let Err(error) = result {
        tracing::error!("could not create transaction: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(ViewMode::Creating.finish().href(endpoints::TRANSACTIONS_VIEW)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, response::Response};
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        endpoints,
        test_utils::{assert_hx_redirect, get_test_store, parse_html_fragment},
        transaction::{Transaction, TransactionKind},
    };

    use super::{CreateTransactionState, TransactionForm, create_transaction_endpoint};

    fn get_state() -> CreateTransactionState {
        CreateTransactionState {
            store: get_test_store(),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn form() -> TransactionForm {
        TransactionForm {
            description: Some("Mercado".to_owned()),
            amount: Some("152,30".to_owned()),
            kind: Some("despesa".to_owned()),
            category: Some("Alimentação".to_owned()),
            date: Some("2025-03-10".to_owned()),
        }
    }

    async fn alert_text(response: Response) -> String {
        parse_html_fragment(response)
            .await
            .root_element()
            .text()
            .collect()
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_state();

        let response = create_transaction_endpoint(State(state.clone()), Form(form())).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::TRANSACTIONS_VIEW);
        let transactions: Vec<Transaction> = state.store.load().unwrap();
        assert_eq!(transactions.len(), 1);
        let transaction = &transactions[0];
        assert_eq!(transaction.description, "Mercado");
        assert_eq!(transaction.amount, 152.3);
        assert_eq!(transaction.kind, TransactionKind::Expense);
        assert_eq!(transaction.category, "Alimentação");
        assert_eq!(transaction.date, date!(2025 - 03 - 10));
    }

    #[tokio::test]
    async fn new_transaction_is_prepended() {
        let state = get_state();
        create_transaction_endpoint(State(state.clone()), Form(form())).await;

        let second = TransactionForm {
            description: Some("Salário".to_owned()),
            kind: Some("receita".to_owned()),
            ..form()
        };
        create_transaction_endpoint(State(state.clone()), Form(second)).await;

        let transactions: Vec<Transaction> = state.store.load().unwrap();
        let descriptions: Vec<&str> = transactions
            .iter()
            .map(|transaction| transaction.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Salário", "Mercado"]);
        assert!(
            transactions[0].id > transactions[1].id,
            "newer transactions should have larger IDs"
        );
    }

    #[tokio::test]
    async fn blank_date_and_kind_use_defaults() {
        let state = get_state();
        let form = TransactionForm {
            kind: None,
            date: Some("".to_owned()),
            ..form()
        };

        create_transaction_endpoint(State(state.clone()), Form(form)).await;

        let transactions: Vec<Transaction> = state.store.load().unwrap();
        assert_eq!(transactions[0].kind, TransactionKind::Expense);
        assert_eq!(
            transactions[0].date,
            time::OffsetDateTime::now_utc().date()
        );
    }

    #[tokio::test]
    async fn empty_required_field_leaves_store_unchanged() {
        for form in [
            TransactionForm {
                description: Some("  ".to_owned()),
                ..form()
            },
            TransactionForm {
                amount: None,
                ..form()
            },
            TransactionForm {
                category: Some("".to_owned()),
                ..form()
            },
        ] {
            let state = get_state();

            let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert!(alert_text(response).await.contains("Preencha todos os campos obrigatórios"));
            assert!(state.store.load::<Transaction>().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn invalid_amount_is_rejected() {
        let state = get_state();
        let form = TransactionForm {
            amount: Some("muito".to_owned()),
            ..form()
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.store.load::<Transaction>().unwrap().is_empty());
    }

    #[tokio::test]
    async fn decodes_url_encoded_form() {
        let form: TransactionForm = serde_html_form::from_str(
            "description=Uber&amount=25.5&kind=despesa&category=Transporte&date=",
        )
        .unwrap();

        assert_eq!(form.description.as_deref(), Some("Uber"));
        assert_eq!(form.date, None);
    }
}
