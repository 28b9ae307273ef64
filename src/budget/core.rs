//! The budget record, its form data and the state shared by the budget pages.

use std::path::PathBuf;

use axum::extract::FromRef;
use serde::{Deserialize, Serialize};

use crate::{AppState, Categorised, Error, form::parse_amount, table::Row};

/// The name of the budgets table file in the data directory.
pub const BUDGETS_FILE_NAME: &str = "budget.csv";

/// A monthly budget for a category, stored as one row of the budgets table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// A free text label for the month, e.g. "Jan" or "2024-01".
    #[serde(rename = "Month")]
    pub month: String,
    /// The spending category the budget applies to.
    #[serde(rename = "Category")]
    pub category: String,
    /// The amount budgeted.
    #[serde(rename = "Budget")]
    pub budget: f64,
}

impl Row for BudgetRecord {
    const COLUMNS: &'static [&'static str] = &["Month", "Category", "Budget"];
}

impl Categorised for BudgetRecord {
    fn category(&self) -> &str {
        &self.category
    }
}

/// The form data for adding or editing a budget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetForm {
    pub month: String,
    pub category: String,
    pub budget: String,
}

impl BudgetForm {
    /// Convert the form into a budget.
    ///
    /// # Errors
    /// Returns [Error::InvalidInput] if the budget is not a finite number.
    pub fn parse(&self) -> Result<BudgetRecord, Error> {
        Ok(BudgetRecord {
            month: self.month.clone(),
            category: self.category.clone(),
            budget: parse_amount("budget", &self.budget)?,
        })
    }
}

impl From<&BudgetRecord> for BudgetForm {
    fn from(budget: &BudgetRecord) -> Self {
        Self {
            month: budget.month.clone(),
            category: budget.category.clone(),
            budget: budget.budget.to_string(),
        }
    }
}

/// The state needed by the budget pages and endpoints.
#[derive(Debug, Clone)]
pub struct BudgetState {
    /// The path to the budgets table.
    pub budgets_path: PathBuf,
}

impl FromRef<AppState> for BudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            budgets_path: state.budgets_path.clone(),
        }
    }
}
