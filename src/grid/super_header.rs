//! Grouped two-row header decoration for the payments table.
//!
//! Present in the page script but never invoked from the init path; kept as
//! an opt-in decoration for hosts that want the grouped header. The binder
//! deliberately does not apply it.

/// One cell of the grouped header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpan {
    pub title: &'static str,
    pub colspan: usize,
}

/// Column groups of the payments table: the three spot columns, the two
/// payment columns, the two receipt columns.
#[must_use]
pub fn payment_super_header() -> Vec<HeaderSpan> {
    vec![
        HeaderSpan { title: "Spot", colspan: 3 },
        HeaderSpan { title: "Payment", colspan: 2 },
        HeaderSpan { title: "Receipt", colspan: 2 },
    ]
}

/// The header row as markup, for hosts that prepend it to the table element.
#[must_use]
pub fn payment_super_header_html() -> String {
    let cells: String = payment_super_header()
        .iter()
        .map(|span| format!("<th colspan=\"{}\">{}</th>", span.colspan, span.title))
        .collect();
    format!("<tr class=\"jsgrid-header-row super-header-row\">{cells}</tr>")
}

#[cfg(test)]
#[path = "super_header_test.rs"]
mod tests;
