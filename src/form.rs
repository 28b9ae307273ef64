//! Helpers shared by the expense and budget forms.

use maud::{Markup, html};

use crate::{
    Error,
    html::{FORM_ERROR_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// Parse the text from the form field `field` as a finite number.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns [Error::InvalidInput] if `value` is not a number, or is NaN or infinite.
pub fn parse_amount(field: &'static str, value: &str) -> Result<f64, Error> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| Error::InvalidInput {
            field,
            value: value.to_owned(),
        })
}

/// The message shown under a form when a submitted number is invalid.
pub fn invalid_input_message(error: &Error) -> String {
    match error {
        Error::InvalidInput { field, value } => {
            format!("Error: \"{value}\" is not a valid number for {field}")
        }
        error => format!("Error: {error}"),
    }
}

/// A labelled, required text input.
pub fn text_input(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                id=(name)
                type="text"
                name=(name)
                placeholder=(label)
                value=(value)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// A labelled, required number input with a step of one cent.
pub fn amount_input(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                id=(name)
                type="number"
                name=(name)
                step="0.01"
                placeholder="0.00"
                value=(value)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// The error message paragraph, or nothing when `error_message` is empty.
pub fn error_message_view(error_message: &str) -> Markup {
    html! {
        @if !error_message.is_empty() {
            p class=(FORM_ERROR_STYLE) { (error_message) }
        }
    }
}
