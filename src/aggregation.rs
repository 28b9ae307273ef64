//! Totals over a loaded table.

use std::collections::BTreeMap;

use crate::Error;

/// The summed amount for each category, ordered by category name.
pub type CategoryTotals = BTreeMap<String, f64>;

/// A record that belongs to a spending category.
pub trait Categorised {
    /// The category name. Categories are compared by exact string equality.
    fn category(&self) -> &str;
}

/// Sum `amount` for each category in `rows`.
///
/// `amount` picks the field to sum, e.g. `|expense| expense.amount`.
///
/// # Errors
/// Returns [Error::TotalOverflow] if a category's sum is not finite, either
/// because it overflows or because the table holds a non-finite amount.
pub fn sum_by_category<R, F>(rows: &[R], amount: F) -> Result<CategoryTotals, Error>
where
    R: Categorised,
    F: Fn(&R) -> f64,
{
    let mut totals = CategoryTotals::new();

    for row in rows {
        let sum = totals.entry(row.category().to_owned()).or_insert(0.0);
        *sum += amount(row);

        if !sum.is_finite() {
            return Err(Error::TotalOverflow(format!(
                "the category \"{}\"",
                row.category()
            )));
        }
    }

    Ok(totals)
}

/// Sum `amount` across all `rows`.
///
/// # Errors
/// Returns [Error::TotalOverflow] if the sum is not finite.
pub fn total<R, F>(rows: &[R], amount: F) -> Result<f64, Error>
where
    F: Fn(&R) -> f64,
{
    // `Iterator::sum` starts from -0.0, which would display as "-0.00".
    let sum = rows.iter().fold(0.0, |sum, row| sum + amount(row));

    if sum.is_finite() {
        Ok(sum)
    } else {
        Err(Error::TotalOverflow("all rows".to_owned()))
    }
}
