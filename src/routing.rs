//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{
    AppState,
    backup::{export_endpoint, import_endpoint},
    cdb::{create_cdb_endpoint, get_cdbs_page},
    dashboard::get_dashboard_page,
    endpoints,
    goal::{create_goal_endpoint, get_goals_page, update_goal_amount_endpoint},
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    report::get_reports_page,
    transaction::{create_transaction_endpoint, get_transactions_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let views = Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::GOALS_VIEW, get(get_goals_page))
        .route(endpoints::CDBS_VIEW, get(get_cdbs_page))
        .route(endpoints::REPORTS_VIEW, get(get_reports_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::GOALS_API, post(create_goal_endpoint))
        .route(
            endpoints::GOAL_CURRENT_AMOUNT,
            put(update_goal_amount_endpoint),
        )
        .route(endpoints::CDBS_API, post(create_cdb_endpoint))
        .route(endpoints::EXPORT, get(export_endpoint))
        .route(endpoints::IMPORT, post(import_endpoint));

    views
        .merge(api)
        .fallback(get_404_not_found)
        .with_state(state)
}
