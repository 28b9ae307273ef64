//! Defines the app level error type and conversions to rendered HTML pages.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{html::error_view, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the row ID in
    /// the URL refers to a row that is still in the table.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A row index did not refer to a row in the table.
    ///
    /// Request handlers convert this into [Error::NotFound].
    #[error("row {index} is out of range for a table with {len} rows")]
    IndexOutOfRange {
        /// The requested row index.
        index: usize,
        /// The number of rows in the table when it was read.
        len: usize,
    },

    /// A form field that must hold a number could not be parsed as a finite number.
    #[error("\"{value}\" is not a valid number for the field {field}")]
    InvalidInput {
        /// The name of the form field.
        field: &'static str,
        /// The submitted text.
        value: String,
    },

    /// A table file exists but could not be read or written.
    #[error("could not access the table file {path}: {message}")]
    TableIo {
        /// The path of the table file.
        path: String,
        /// The underlying IO error.
        message: String,
    },

    /// A table file has the wrong header or a row that cannot be parsed.
    #[error("the table file {path} is corrupt: {message}")]
    CorruptTable {
        /// The path of the table file.
        path: String,
        /// What was wrong with the file.
        message: String,
    },

    /// Summing amounts gave a number too large to represent, or the table
    /// holds an amount that is not a finite number.
    #[error("the total of {0} is not a finite number")]
    TotalOverflow(String),

    /// The chart could not be drawn or encoded as PNG.
    #[error("could not render chart: {0}")]
    ChartRender(String),
}

impl Error {
    /// Map a store level [Error::IndexOutOfRange] to [Error::NotFound], leaving
    /// other errors untouched.
    pub fn into_not_found(self) -> Self {
        match self {
            Error::IndexOutOfRange { .. } => Error::NotFound,
            error => error,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound | Error::IndexOutOfRange { .. } => NotFoundError.into_response(),
            Error::InvalidInput { field, value } => (
                StatusCode::BAD_REQUEST,
                Html(
                    error_view(
                        "Bad Request",
                        "400",
                        "Invalid input",
                        &format!("\"{value}\" is not a valid number for {field}."),
                    )
                    .into_string(),
                ),
            )
                .into_response(),
            Error::CorruptTable { path, message } => {
                tracing::error!("The table file {path} is corrupt: {message}");
                InternalServerError {
                    description: "Corrupt Data File",
                    fix: &format!(
                        "The file {path} could not be read. Fix or remove the file and try again."
                    ),
                }
                .into_response()
            }
            Error::TotalOverflow(what) => {
                tracing::error!("The total of {what} is not a finite number");
                InternalServerError {
                    description: "Totals Too Large",
                    fix: &format!(
                        "The total of {what} is too large to show. Check the table for amounts entered by mistake."
                    ),
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                InternalServerError::default().into_response()
            }
        }
    }
}
