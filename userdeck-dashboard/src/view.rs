//! Plain-text rendering of the dashboard for the terminal front end.

use std::fmt::Write;

use userdeck_model::{
    PAGE_SIZE_OPTIONS, PageMarker, SortConfig, SortKey, SortOrder, User, UserField,
};

use crate::domains::user_management::{UserForm, VisiblePage};

const EMPTY_MESSAGE: &str = "No users found.";

fn sort_indicator(sort: SortConfig, key: SortKey) -> &'static str {
    match (sort.key, sort.order) {
        (Some(active), SortOrder::Ascending) if active == key => " ^",
        (Some(active), SortOrder::Descending) if active == key => " v",
        _ => "",
    }
}

/// Table of the current page with the active sort marked in the header.
pub fn render_table(page: &VisiblePage, sort: SortConfig) -> String {
    if page.items.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let headers: Vec<String> = SortKey::all()
        .iter()
        .map(|key| format!("{}{}", key.label(), sort_indicator(sort, *key)))
        .collect();
    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|row| {
            std::iter::once(row.id.to_string())
                .chain(UserField::all().iter().map(|f| row.field(*f).to_string()))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

/// Summary line, page selector and page-size options. Empty when there are
/// no rows to page through.
pub fn render_footer(page: &VisiblePage) -> String {
    let Some(summary) = page.summary() else {
        return String::new();
    };

    let pages = page
        .page_numbers()
        .into_iter()
        .map(|marker| match marker {
            PageMarker::Page(n) if n == page.current_page => format!("[{n}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    let sizes = PAGE_SIZE_OPTIONS
        .iter()
        .map(|size| size.to_string())
        .collect::<Vec<_>>()
        .join("/");

    let mut out = String::new();
    let _ = writeln!(out, "{summary}");
    let _ = writeln!(
        out,
        "{} Pages: {} {}",
        if page.has_previous() { "<" } else { " " },
        pages,
        if page.has_next() { ">" } else { " " },
    );
    let _ = writeln!(out, "Rows per page: {} ({sizes})", page.page_size);
    out
}

pub fn render_page(page: &VisiblePage, sort: SortConfig, filtered: bool) -> String {
    let mut out = String::new();
    if filtered {
        out.push_str("(filters active)\n");
    }
    out.push_str(&render_table(page, sort));
    out.push_str(&render_footer(page));
    out
}

/// Full record, including the attributes the table leaves out.
pub fn render_user(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", user.id, user.name);
    let _ = writeln!(out, "  Username:   {}", user.username);
    let _ = writeln!(out, "  Email:      {}", user.email);
    let _ = writeln!(out, "  Phone:      {}", user.phone);
    let _ = writeln!(out, "  Website:    {}", user.website);
    let _ = writeln!(
        out,
        "  Address:    {} {}, {} {}",
        user.address.street, user.address.suite, user.address.city, user.address.zipcode
    );
    let _ = writeln!(out, "  Department: {}", user.company.name);
    if !user.company.catch_phrase.is_empty() {
        let _ = writeln!(out, "              \"{}\"", user.company.catch_phrase);
    }
    out
}

/// One line per rejected field, in form order.
pub fn render_form_errors(form: &UserForm) -> String {
    let mut out = format!("{}: please fix the following\n", form.title());
    for error in form.errors.iter() {
        let _ = writeln!(out, "  {}: {}", error.field.label(), error.message);
    }
    out
}

pub fn render_error_banner(message: &str) -> String {
    format!("Error: {message}\n")
}
