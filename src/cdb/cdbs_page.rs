//! Defines the route handler for the page that lists CDB positions.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;

use crate::{
    AppState, Error,
    cdb::{
        Cdb,
        view::{CdbsViewData, cdbs_view},
    },
    metrics::portfolio_summary,
    store::Store,
    timezone::today,
    view_state::{ViewMode, ViewQuery},
};

/// The state needed for the CDBs page.
#[derive(Debug, Clone)]
pub struct CdbsPageState {
    pub store: Store,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for CdbsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display every position with its estimated value.
pub async fn get_cdbs_page(
    State(state): State<CdbsPageState>,
    Query(query): Query<ViewQuery>,
) -> Result<Response, Error> {
    let today = today(&state.local_timezone)?;

    let cdbs: Vec<Cdb> = state
        .store
        .load()
        .inspect_err(|error| tracing::error!("could not load CDBs: {error}"))?;

    Ok(cdbs_view(CdbsViewData {
        cdbs: &cdbs,
        summary: portfolio_summary(&cdbs, today),
        mode: ViewMode::from_query(&query),
        today,
    })
    .into_response())
}
