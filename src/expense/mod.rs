//! Recording, listing, editing and deleting expenses.

mod core;
mod create;
mod delete;
mod edit;
mod list;

pub use self::core::{EXPENSES_FILE_NAME, ExpenseForm, ExpenseRecord, ExpenseState};
pub use create::{add_expense_endpoint, get_add_expense_page};
pub use delete::delete_expense_endpoint;
pub use edit::{edit_expense_endpoint, get_edit_expense_page};
pub use list::get_expenses_page;
