//! A personal finance dashboard for tracking income and expenses, savings
//! goals and CDB fixed-income investments.
//!
//! This library provides a web API that directly serves HTML pages. Every
//! collection is kept as a JSON document in a single SQLite key-value table.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod backup;
mod cdb;
mod dashboard;
mod db;
mod endpoints;
mod error;
mod forms;
mod goal;
mod html;
mod internal_server_error;
mod metrics;
mod navigation;
mod not_found;
mod report;
mod routing;
mod store;
mod timezone;
mod transaction;
mod view_state;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use cdb::{Cdb, RateType};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use goal::{Goal, GoalCategory};
pub use routing::build_router;
pub use store::{Collection, Record, Store};
pub use transaction::{CATEGORIES, Transaction, TransactionKind};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
