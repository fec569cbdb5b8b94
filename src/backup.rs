//! Export every collection as one JSON document and restore them from one.
//!
//! The import accepts both the document written by the export and a dump of
//! the browser storage the app used to keep its data in, where each
//! collection is stored under its old key as a JSON string.

use axum::{
    extract::{FromRef, Multipart, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::{
    AppState, Error,
    cdb::Cdb,
    endpoints,
    goal::Goal,
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE},
    store::Store,
    transaction::Transaction,
};

const EXPORT_FILE_NAME: &str = "financeiro-backup.json";

/// The state needed to export and import data.
#[derive(Debug, Clone)]
pub struct BackupState {
    pub store: Store,
}

impl FromRef<AppState> for BackupState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Every collection in one document. Collections that are absent are restored as empty.
#[derive(Debug, Default, Deserialize)]
struct Backup {
    #[serde(default, alias = "transacoes", deserialize_with = "records_or_json_text")]
    transactions: Vec<Transaction>,
    #[serde(default, alias = "metas", deserialize_with = "records_or_json_text")]
    goals: Vec<Goal>,
    #[serde(default, deserialize_with = "records_or_json_text")]
    cdbs: Vec<Cdb>,
}

/// Read a collection that is either a JSON array or a string holding one.
fn records_or_json_text<'de, D, R>(deserializer: D) -> Result<Vec<R>, D::Error>
where
    D: Deserializer<'de>,
    R: DeserializeOwned,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored<T> {
        Records(Vec<T>),
        Text(String),
    }

    match Stored::<R>::deserialize(deserializer)? {
        Stored::Records(records) => Ok(records),
        Stored::Text(text) => serde_json::from_str(&text).map_err(serde::de::Error::custom),
    }
}

/// Download every collection as a JSON file.
pub async fn export_endpoint(State(state): State<BackupState>) -> Result<Response, Error> {
    let document = state
        .store
        .export_json()
        .inspect_err(|error| tracing::error!("could not export data: {error}"))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        document.to_string(),
    )
        .into_response())
}

/// Replace every collection with the contents of an uploaded backup file.
///
/// Nothing is written unless the whole file is valid.
pub async fn import_endpoint(State(state): State<BackupState>, multipart: Multipart) -> Response {
    let text = match read_upload(multipart).await {
        Ok(text) => text,
        Err(error) => return error.into_alert_response(),
    };

    let backup: Backup = match serde_json::from_str(&text) {
        Ok(backup) => backup,
        Err(error) => {
            tracing::debug!("Failed to parse backup: {error}");
            return Error::from(error).into_alert_response();
        }
    };

    let result = state.store.save_all(|batch| {
        batch.save(&backup.transactions)?;
        batch.save(&backup.goals)?;
        batch.save(&backup.cdbs)?;
        Ok(())
    });

    match result {
        Ok(()) => {
            tracing::info!(
                "Imported {} transactions, {} goals and {} CDBs",
                backup.transactions.len(),
                backup.goals.len(),
                backup.cdbs.len()
            );
            (
                HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("could not import backup: {error}");
            error.into_alert_response()
        }
    }
}

/// The text of the first file in the form.
async fn read_upload(mut multipart: Multipart) -> Result<String, Error> {
    let field = multipart
        .next_field()
        .await
        .map_err(|error| {
            tracing::error!("Could not read multipart form: {error}");
            Error::MultipartError("O formulário enviado não pôde ser lido.".to_owned())
        })?
        .ok_or_else(|| Error::MultipartError("Nenhum arquivo foi enviado.".to_owned()))?;

    field.text().await.map_err(|error| {
        tracing::error!("Could not read data from multipart form field: {error}");
        Error::MultipartError("O arquivo enviado não pôde ser lido.".to_owned())
    })
}

/// Links to download a backup and a form to restore one.
pub fn backup_section() -> Markup {
    html! {
        section class=(CARD_STYLE) id="backup"
        {
            h2 class="text-lg font-semibold mb-4" { "Backup dos dados" }

            div class="flex flex-wrap items-end gap-4"
            {
                a href=(endpoints::EXPORT) download=(EXPORT_FILE_NAME) class=(BUTTON_SECONDARY_STYLE)
                {
                    "Exportar JSON"
                }

                form
                    hx-post=(endpoints::IMPORT)
                    hx-encoding="multipart/form-data"
                    hx-target-error="#alert-container"
                    hx-confirm="Importar um backup substitui todos os dados atuais. Continuar?"
                    class="flex flex-wrap items-end gap-2"
                {
                    div
                    {
                        label for="backup-file" class=(FORM_LABEL_STYLE) { "Restaurar backup" }
                        input
                            type="file"
                            name="backup"
                            id="backup-file"
                            accept=".json,application/json"
                            required
                            class="block text-sm";
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Importar" }
                }
            }
        }
    }
}
