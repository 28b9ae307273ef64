//! Monthly budgets per category.

mod core;
mod create;
mod delete;
mod edit;
mod reports;

pub use self::core::{BUDGETS_FILE_NAME, BudgetForm, BudgetRecord, BudgetState};
pub use create::{add_budget_endpoint, get_add_budget_page};
pub use delete::delete_budget_endpoint;
pub use edit::{edit_budget_endpoint, get_edit_budget_page};
pub use reports::get_reports_page;
