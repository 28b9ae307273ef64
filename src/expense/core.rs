//! The expense record, its form data and the state shared by the expense pages.

use std::path::PathBuf;

use axum::extract::FromRef;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{AppState, Categorised, Error, form::parse_amount, table::Row};

/// The name of the expenses table file in the data directory.
pub const EXPENSES_FILE_NAME: &str = "expenses.csv";

/// A single expense, stored as one row of the expenses table.
///
/// An expense is identified by its position in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// When the money was spent, as entered by the user.
    #[serde(rename = "Date")]
    pub date: String,
    /// The spending category, e.g. "Food".
    #[serde(rename = "Category")]
    pub category: String,
    /// How much was spent.
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// Free text notes about the expense.
    #[serde(rename = "Description")]
    pub description: String,
}

impl Row for ExpenseRecord {
    const COLUMNS: &'static [&'static str] = &["Date", "Category", "Amount", "Description"];
}

impl Categorised for ExpenseRecord {
    fn category(&self) -> &str {
        &self.category
    }
}

/// The form data for adding or editing an expense.
///
/// The amount is kept as text so that an invalid amount can be shown back to
/// the user as they typed it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub date: String,
    pub category: String,
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

impl ExpenseForm {
    /// A blank form with the date set to today.
    pub fn new_for_today() -> Self {
        Self {
            date: today(),
            ..Default::default()
        }
    }

    /// Convert the form into an expense.
    ///
    /// # Errors
    /// Returns [Error::InvalidInput] if the amount is not a finite number.
    pub fn parse(&self) -> Result<ExpenseRecord, Error> {
        Ok(ExpenseRecord {
            date: self.date.clone(),
            category: self.category.clone(),
            amount: parse_amount("amount", &self.amount)?,
            description: self.description.clone(),
        })
    }
}

impl From<&ExpenseRecord> for ExpenseForm {
    fn from(expense: &ExpenseRecord) -> Self {
        Self {
            date: expense.date.clone(),
            category: expense.category.clone(),
            amount: expense.amount.to_string(),
            description: expense.description.clone(),
        }
    }
}

/// The state needed by the expense pages and endpoints.
#[derive(Debug, Clone)]
pub struct ExpenseState {
    /// The path to the expenses table.
    pub expenses_path: PathBuf,
}

impl FromRef<AppState> for ExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expenses_path: state.expenses_path.clone(),
        }
    }
}

/// Today's date in the server's local timezone, or UTC if the local offset is unknown.
fn today() -> String {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
        .to_string()
}
