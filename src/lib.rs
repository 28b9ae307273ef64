//! A web app for recording expenses, setting monthly budgets per category and
//! viewing category totals and bar charts.
//!
//! This library serves HTML pages directly. All data lives in two CSV tables,
//! one for expenses and one for budgets, which are read in full and rewritten
//! in full by every request that touches them.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod aggregation;
mod app_state;
mod budget;
mod chart;
mod dashboard;
mod endpoints;
mod error;
mod expense;
mod form;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod table;

#[cfg(test)]
mod test_utils;

pub use aggregation::{CategoryTotals, Categorised, sum_by_category, total};
pub use app_state::AppState;
pub use budget::BudgetRecord;
pub use chart::render_bar_chart;
pub use error::Error;
pub use expense::ExpenseRecord;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use table::{
    Row, append_row, delete_row, ensure_table, get_row, load_table, replace_row, save_table,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
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
