//! Implements a struct that holds the state of the server.

use std::path::{Path, PathBuf};

use crate::{
    Error,
    budget::{BUDGETS_FILE_NAME, BudgetRecord},
    expense::{EXPENSES_FILE_NAME, ExpenseRecord},
    table::ensure_table,
};

/// The state of the server.
///
/// Handlers read the tables from disk on every request, so the only shared
/// state is where the tables live.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The path to the expenses table.
    pub expenses_path: PathBuf,
    /// The path to the budgets table.
    pub budgets_path: PathBuf,
}

impl AppState {
    /// Create a new [AppState] for the tables in `data_dir`.
    ///
    /// The directory and empty tables are created if they do not exist yet.
    ///
    /// # Errors
    /// Returns an error if the directory or tables cannot be created.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, Error> {
        let data_dir = data_dir.as_ref();
        let state = Self {
            expenses_path: data_dir.join(EXPENSES_FILE_NAME),
            budgets_path: data_dir.join(BUDGETS_FILE_NAME),
        };

        ensure_table::<ExpenseRecord>(&state.expenses_path)?;
        ensure_table::<BudgetRecord>(&state.budgets_path)?;

        Ok(state)
    }
}
