//! Defines the endpoint for recording a new CDB position.

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
    AppState, Error,
    cdb::{Cdb, RateType},
    endpoints,
    forms::{date_or, optional_text, required_amount, required_date, required_text},
    store::{Store, next_record_id},
    timezone::today,
    view_state::ViewMode,
};

/// The state needed to create a CDB.
#[derive(Debug, Clone)]
pub struct CreateCdbState {
    pub store: Store,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateCdbState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a CDB.
#[derive(Debug, Default, Deserialize)]
pub struct CdbForm {
    pub name: Option<String>,
    pub bank: Option<String>,
    pub invested_amount: Option<String>,
    /// Percentage of the benchmark rate, e.g. "120".
    pub benchmark_rate: Option<String>,
    /// Defaults to [RateType::FixedRate].
    pub rate_type: Option<String>,
    /// Defaults to today.
    pub start_date: Option<String>,
    pub maturity_date: Option<String>,
}

impl CdbForm {
    fn into_cdb(self, id: i64, today: Date) -> Result<Cdb, Error> {
        let name = required_text(self.name.as_deref(), "name")?;
        let bank = required_text(self.bank.as_deref(), "bank")?;
        let invested_amount = required_amount(self.invested_amount.as_deref(), "invested_amount")?;
        let benchmark_rate = required_amount(self.benchmark_rate.as_deref(), "benchmark_rate")?;
        let maturity_date = required_date(self.maturity_date.as_deref(), "maturity_date")?;

        let start_date = date_or(self.start_date.as_deref(), "start_date", today)?;
        let rate_type = match optional_text(self.rate_type.as_deref()) {
            Some(text) => text.parse()?,
            None => RateType::FixedRate,
        };

        Ok(Cdb {
            id,
            name,
            bank,
            invested_amount,
            benchmark_rate,
            start_date,
            maturity_date,
            rate_type,
        })
    }
}

/// A route handler for recording a new CDB, redirects to the CDBs view on success.
pub async fn create_cdb_endpoint(
    State(state): State<CreateCdbState>,
    Form(form): Form<CdbForm>,
) -> Response {
    let today = match today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let result = state.store.update(|cdbs: &mut Vec<Cdb>| {
        let id = next_record_id(OffsetDateTime::now_utc(), cdbs.iter().map(|cdb| cdb.id));
        cdbs.insert(0, form.into_cdb(id, today)?);

        Ok(())
    });

    if let Err(error) = result {
        tracing::error!("could not create CDB: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(ViewMode::Creating.finish().href(endpoints::CDBS_VIEW)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
