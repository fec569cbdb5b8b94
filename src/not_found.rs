//! The page to display when a route or record does not exist.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// Renders the 404 page.
pub struct NotFoundError;

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        let markup = error_view(
            "Não encontrado",
            "404",
            "Página não encontrada.",
            "Verifique o endereço ou volte para o painel.",
        );

        (StatusCode::NOT_FOUND, Html(markup.into_string())).into_response()
    }
}

/// The fallback route handler.
pub async fn get_404_not_found() -> Response {
    NotFoundError.into_response()
}
