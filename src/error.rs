//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The message shown when a form is submitted with an empty required field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Preencha todos os campos obrigatórios";

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A form was submitted without one of its required fields.
    ///
    /// The field name is for logging, the user only sees a single generic
    /// message asking them to fill in every required field.
    #[error("the required field \"{0}\" is missing")]
    RequiredFieldMissing(&'static str),

    /// A form field was filled in but could not be parsed, e.g. a date that
    /// is not in the `YYYY-MM-DD` format.
    #[error("the value {value:?} is not valid for the field \"{field}\"")]
    InvalidField {
        /// The name of the form field.
        field: &'static str,
        /// The raw value the client sent.
        value: String,
    },

    /// Tried to update a goal that is not in the store.
    #[error("the goal with ID {0} could not be found")]
    GoalNotFound(i64),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// A collection could not be serialized, or an uploaded backup could not
    /// be parsed.
    #[error("could not process JSON: {0}")]
    JsonError(String),

    /// An uploaded file could not be read from the multipart form.
    #[error("could not read the uploaded file: {0}")]
    MultipartError(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JsonError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound | Error::GoalNotFound(_) => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::RequiredFieldMissing(_) => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: REQUIRED_FIELDS_MESSAGE.to_owned(),
                },
            ),
            Error::InvalidField { field, value } => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Valor inválido".to_owned(),
                    details: format!("\"{value}\" não é um valor válido para o campo {field}."),
                },
            ),
            Error::GoalNotFound(_) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Não foi possível atualizar a meta".to_owned(),
                    details: "A meta não foi encontrada. \
                    Recarregue a página e tente novamente."
                        .to_owned(),
                },
            ),
            Error::JsonError(details) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Arquivo inválido".to_owned(),
                    details,
                },
            ),
            Error::MultipartError(details) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Não foi possível ler o arquivo".to_owned(),
                    details,
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
