//! Defines the route handler for the page that lists savings goals.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;

use crate::{
    AppState, Error,
    goal::{
        Goal,
        view::{GoalsViewData, goals_view},
    },
    metrics::goal_summary,
    store::Store,
    timezone::today,
    view_state::{ViewMode, ViewQuery},
};

/// The state needed for the goals page.
#[derive(Debug, Clone)]
pub struct GoalsPageState {
    pub store: Store,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for GoalsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display every goal with its progress and deadline.
pub async fn get_goals_page(
    State(state): State<GoalsPageState>,
    Query(query): Query<ViewQuery>,
) -> Result<Response, Error> {
    let today = today(&state.local_timezone)?;

    let goals: Vec<Goal> = state
        .store
        .load()
        .inspect_err(|error| tracing::error!("could not load goals: {error}"))?;

    Ok(goals_view(GoalsViewData {
        goals: &goals,
        summary: goal_summary(&goals),
        mode: ViewMode::from_query(&query),
        today,
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use axum_extra::extract::Query;
    use scraper::{Html, Selector};
    use time::{Duration, OffsetDateTime};

    use crate::{
        endpoints::{self, format_endpoint},
        goal::Goal,
        test_utils::{
            assert_form_input, assert_form_select, assert_hx_endpoint, assert_status_ok,
            assert_valid_html, element_text, get_test_store, parse_html_document, sample_goal,
            select_one,
        },
        view_state::ViewQuery,
    };

    use super::{GoalsPageState, get_goals_page};

    fn get_state(goals: &[Goal]) -> GoalsPageState {
        let store = get_test_store();
        store.save(goals).unwrap();

        GoalsPageState {
            store,
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn sample() -> Vec<Goal> {
        let today = OffsetDateTime::now_utc().date();

        vec![
            sample_goal(2, "Reserva", 500.0, 500.0, today + Duration::days(100)),
            sample_goal(1, "Viagem", 400.0, 100.0, today + Duration::days(10)),
        ]
    }

    async fn render(goals: &[Goal], query: ViewQuery) -> Html {
        let response = get_goals_page(State(get_state(goals)), Query(query))
            .await
            .unwrap();
        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        html
    }

    fn card_value(html: &Html, title: &str) -> String {
        let card = select_one(html, &format!("[data-card={title:?}] p"));
        element_text(&card)
    }

    #[tokio::test]
    async fn shows_summary_of_goals() {
        let html = render(&sample(), ViewQuery::default()).await;

        assert_eq!(card_value(&html, "Metas Ativas"), "1");
        assert_eq!(card_value(&html, "Concluídas"), "1");
        assert_eq!(card_value(&html, "Total Objetivos"), "R$ 900,00");
        assert_eq!(card_value(&html, "Economizado"), "R$ 600,00");
    }

    #[tokio::test]
    async fn completed_goal_has_trophy_and_no_editor_link() {
        let html = render(&sample(), ViewQuery::default()).await;

        let completed = select_one(&html, "li[data-goal-id='2']");
        assert!(
            completed
                .select(&Selector::parse("[data-trophy]").unwrap())
                .next()
                .is_some()
        );
        assert!(
            completed
                .select(&Selector::parse("a").unwrap())
                .next()
                .is_none(),
            "completed goals cannot be updated"
        );
    }

    #[tokio::test]
    async fn active_goal_shows_progress_and_days_remaining() {
        let html = render(&sample(), ViewQuery::default()).await;

        let active = select_one(&html, "li[data-goal-id='1']");
        let text = element_text(&active);
        assert!(text.contains("25,0% concluído"), "got {text:?}");
        assert!(text.contains("(10 dias restantes)"), "got {text:?}");
        assert!(text.contains("Faltam R$ 300,00"), "got {text:?}");

        let progress_bar = active
            .select(&Selector::parse("[role=progressbar]").unwrap())
            .next()
            .unwrap();
        assert_eq!(progress_bar.value().attr("aria-valuenow"), Some("25"));
    }

    #[tokio::test]
    async fn overdue_goal_shows_days_late() {
        let today = OffsetDateTime::now_utc().date();
        let goals = [sample_goal(1, "Atrasada", 100.0, 0.0, today - Duration::days(5))];

        let html = render(&goals, ViewQuery::default()).await;

        let text = element_text(&select_one(&html, "[data-deadline]"));
        assert_eq!(text, "(5 dias em atraso)");
    }

    #[tokio::test]
    async fn edit_mode_shows_amount_editor_for_goal() {
        let query = ViewQuery {
            mode: None,
            edit: Some(1),
        };

        let html = render(&sample(), query).await;

        let form = select_one(&html, "li[data-goal-id='1'] form");
        assert_hx_endpoint(
            &form,
            &format_endpoint(endpoints::GOAL_CURRENT_AMOUNT, 1),
            "hx-put",
        );
        let input = select_one(&html, "input[name=current_amount]");
        assert_eq!(input.value().attr("value"), Some("100"));
    }

    #[tokio::test]
    async fn create_mode_shows_form() {
        let query = ViewQuery {
            mode: Some("create".to_owned()),
            edit: None,
        };

        let html = render(&[], query).await;

        let form = select_one(&html, "[role=dialog] form");
        assert_hx_endpoint(&form, endpoints::GOALS_API, "hx-post");
        assert_form_input(&form, "name", "text");
        assert_form_input(&form, "target_amount", "number");
        assert_form_input(&form, "deadline", "date");
        assert_form_select(&form, "category");
    }

    #[tokio::test]
    async fn shows_empty_state_without_goals() {
        let html = render(&[], ViewQuery::default()).await;

        select_one(&html, "[data-empty-state]");
    }
}
