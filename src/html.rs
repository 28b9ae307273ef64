use maud::{DOCTYPE, Markup, html};

// Link styles
pub const LINK_STYLE: &str = "link";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";

pub const BUTTON_DELETE_STYLE: &str = "link link-delete";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "form-container";
pub const FORM_STYLE: &str = "form";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";
pub const FORM_ERROR_STYLE: &str = "form-error";

// Table styles
pub const TABLE_STYLE: &str = "table";
pub const TABLE_HEADER_STYLE: &str = "table-header";
pub const TABLE_ROW_STYLE: &str = "table-row";
pub const TABLE_CELL_STYLE: &str = "table-cell";
pub const TABLE_AMOUNT_CELL_STYLE: &str = "table-cell amount";
pub const TABLE_EMPTY_CELL_STYLE: &str = "table-cell table-empty";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Finance Tracker" }
                link href="/static/main.css" rel="stylesheet";
            }

            body class="container"
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="error-page"
        {
            h1 class="error-code" { (header) }

            p class="error-description" { (description) }

            p class="error-fix" { (fix) }

            a href="/" class=(BUTTON_PRIMARY_STYLE) { "Back to Dashboard" }
        }
    );

    base(title, &content)
}

/// A page header with a title and a link to the page for adding a row.
pub fn page_header(title: &str, add_url: &str, add_text: &str) -> Markup {
    html! {
        header class="page-header"
        {
            h1 { (title) }

            a href=(add_url) class=(LINK_STYLE) { (add_text) }
        }
    }
}

/// The Edit and Delete links shown for each row in a table.
///
/// Deleting asks the user to confirm first since it cannot be undone.
pub fn edit_delete_action_links(edit_url: &str, delete_url: &str, confirm_message: &str) -> Markup {
    html! {
        div class="actions"
        {
            a href=(edit_url) class=(LINK_STYLE) { "Edit" }

            a
                href=(delete_url)
                class=(BUTTON_DELETE_STYLE)
                onclick=(format!("return confirm({confirm_message:?});"))
            {
                "Delete"
            }
        }
    }
}

/// A table row spanning `columns` columns, shown when a table has no rows.
pub fn empty_table_row(columns: usize, add_url: &str, add_text: &str) -> Markup {
    html! {
        tr
        {
            td colspan=(columns) class=(TABLE_EMPTY_CELL_STYLE)
            {
                "Nothing here yet. "
                (link(add_url, add_text))
            }
        }
    }
}

/// Format `amount` with two decimal places and no currency symbol.
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{amount:.2}");

    // Small negative numbers round to zero but keep their sign.
    if formatted == "-0.00" {
        "0.00".to_owned()
    } else {
        formatted
    }
}

/// A link with blue text for use in a <p> tag.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE) { (text) }
    )
}
