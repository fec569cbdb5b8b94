//! Defines the endpoint for updating how much has been saved towards a goal.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints, forms::parse_signed_amount, goal::Goal, store::Store,
    view_state::ViewMode,
};

/// The state needed to update a goal.
#[derive(Debug, Clone)]
pub struct UpdateGoalState {
    pub store: Store,
}

impl FromRef<AppState> for UpdateGoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The form data for setting the saved amount of a goal.
#[derive(Debug, Default, Deserialize)]
pub struct CurrentAmountForm {
    /// The new saved amount. It may be negative or exceed the target.
    pub current_amount: Option<String>,
}

impl CurrentAmountForm {
    /// The submitted amount, where a blank or unparsable value counts as zero.
    fn amount(&self) -> f64 {
        self.current_amount
            .as_deref()
            .and_then(|text| parse_signed_amount(text, "current_amount").ok())
            .unwrap_or(0.0)
    }
}

/// A route handler for setting the saved amount of a goal, redirects to the goals view on success.
pub async fn update_goal_amount_endpoint(
    State(state): State<UpdateGoalState>,
    Path(goal_id): Path<i64>,
    Form(form): Form<CurrentAmountForm>,
) -> Response {
    let amount = form.amount();

    let result = state.store.update(|goals: &mut Vec<Goal>| {
        let goal = goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or(Error::GoalNotFound(goal_id))?;
        goal.current_amount = amount;

        Ok(())
    });

    match result {
        Ok(_) => (
            HxRedirect(ViewMode::Editing(goal_id).finish().href(endpoints::GOALS_VIEW)),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("could not update goal {goal_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        endpoints,
        goal::Goal,
        test_utils::{assert_hx_redirect, get_test_store, sample_goal},
    };

    use super::{CurrentAmountForm, UpdateGoalState, update_goal_amount_endpoint};

    fn get_state() -> UpdateGoalState {
        let store = get_test_store();
        store
            .save(&[
                sample_goal(2, "Carro", 40000.0, 1000.0, date!(2027 - 01 - 01)),
                sample_goal(1, "Reserva", 10000.0, 500.0, date!(2026 - 01 - 01)),
            ])
            .unwrap();

        UpdateGoalState { store }
    }

    fn amount_form(value: &str) -> Form<CurrentAmountForm> {
        Form(CurrentAmountForm {
            current_amount: Some(value.to_owned()),
        })
    }

    #[tokio::test]
    async fn updates_only_the_matching_goal() {
        let state = get_state();

        let response =
            update_goal_amount_endpoint(State(state.clone()), Path(1), amount_form("750,25")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::GOALS_VIEW);
        let goals: Vec<Goal> = state.store.load().unwrap();
        assert_eq!(goals[0].current_amount, 1000.0);
        assert_eq!(goals[1].current_amount, 750.25);
        assert_eq!(goals[1].name, "Reserva");
    }

    #[tokio::test]
    async fn unparsable_amount_counts_as_zero() {
        let state = get_state();

        update_goal_amount_endpoint(State(state.clone()), Path(2), amount_form("abc")).await;

        let goals: Vec<Goal> = state.store.load().unwrap();
        assert_eq!(goals[0].current_amount, 0.0);
    }

    #[tokio::test]
    async fn blank_amount_counts_as_zero() {
        let state = get_state();

        update_goal_amount_endpoint(
            State(state.clone()),
            Path(2),
            Form(CurrentAmountForm::default()),
        )
        .await;

        let goals: Vec<Goal> = state.store.load().unwrap();
        assert_eq!(goals[0].current_amount, 0.0);
    }

    #[tokio::test]
    async fn negative_amount_is_stored_as_given() {
        let store = get_test_store();
        store
            .save(&[sample_goal(1, "Viagem", 500.0, 100.0, date!(2030 - 01 - 01))])
            .unwrap();
        let state = UpdateGoalState { store };

        let response =
            update_goal_amount_endpoint(State(state.clone()), Path(1), amount_form("-50")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let goals: Vec<Goal> = state.store.load().unwrap();
        assert_eq!(goals[0].current_amount, -50.0);
    }

    #[tokio::test]
    async fn unknown_goal_is_not_found() {
        let state = get_state();

        let response =
            update_goal_amount_endpoint(State(state.clone()), Path(99), amount_form("10")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let goals: Vec<Goal> = state.store.load().unwrap();
        assert_eq!(goals[0].current_amount, 1000.0);
        assert_eq!(goals[1].current_amount, 500.0);
    }
}
