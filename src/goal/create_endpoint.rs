//! Defines the endpoint for creating a new savings goal.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error, endpoints,
    forms::{
        optional_text, parse_signed_amount, required_amount, required_date, required_text,
    },
    goal::{Goal, GoalCategory},
    store::{Store, next_record_id},
    timezone::today,
    view_state::ViewMode,
};

/// The state needed to create a goal.
#[derive(Debug, Clone)]
pub struct CreateGoalState {
    pub store: Store,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateGoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a goal.
#[derive(Debug, Default, Deserialize)]
pub struct GoalForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<String>,
    /// Defaults to zero. May be negative.
    pub current_amount: Option<String>,
    pub deadline: Option<String>,
    /// Defaults to [GoalCategory::Savings].
    pub category: Option<String>,
}

impl GoalForm {
    fn into_goal(self, id: i64, today: Date) -> Result<Goal, Error> {
        let name = required_text(self.name.as_deref(), "name")?;
        let target_amount = required_amount(self.target_amount.as_deref(), "target_amount")?;
        let deadline = required_date(self.deadline.as_deref(), "deadline")?;

        let current_amount = match optional_text(self.current_amount.as_deref()) {
            Some(text) => parse_signed_amount(&text, "current_amount")?,
            None => 0.0,
        };
        let category = match optional_text(self.category.as_deref()) {
            Some(text) => text.parse()?,
            None => GoalCategory::Savings,
        };

        Ok(Goal {
            id,
            name,
            description: optional_text(self.description.as_deref()),
            target_amount,
            current_amount,
            deadline,
            category,
            created_on: today,
        })
    }
}

/// A route handler for creating a new goal, redirects to the goals view on success.
pub async fn create_goal_endpoint(
    State(state): State<CreateGoalState>,
    Form(form): Form<GoalForm>,
) -> Response {
    let today = match today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let result = state.store.update(|goals: &mut Vec<Goal>| {
        let id = next_record_id(OffsetDateTime::now_utc(), goals.iter().map(|goal| goal.id));
        goals.insert(0, form.into_goal(id, today)?);

        Ok(())
    });

    if let Err(error) = result {
        tracing::error!("could not create goal: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(ViewMode::Creating.finish().href(endpoints::GOALS_VIEW)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
