//! Widget options handed to the grid host.

use serde::Serialize;

pub const PAGE_SIZE: usize = 25;
pub const PAGE_BUTTON_COUNT: usize = 5;
pub const PAGER_FORMAT: &str = "{first} {prev} {pages} {next} {last} ( {itemCount} results )";
pub const PAGE_PREV_TEXT: &str = "<i class=\"fa fa-chevron-left\"></i>";
pub const PAGE_NEXT_TEXT: &str = "<i class=\"fa fa-chevron-right\"></i>";
pub const PAGE_FIRST_TEXT: &str = "First";
pub const PAGE_LAST_TEXT: &str = "Last";

/// Grid behavior flags and pager text. `Default` is the production setup:
/// everything enabled, 25 rows per page, 5 page buttons, chevron glyphs.
///
/// Serializes with the grid host's camelCase option names so it can be
/// passed to the widget verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub width: String,
    pub heading: bool,
    pub filtering: bool,
    pub inserting: bool,
    pub editing: bool,
    pub selecting: bool,
    pub sorting: bool,
    pub paging: bool,
    /// The widget issues the initial list request as soon as it attaches.
    pub autoload: bool,
    pub page_size: usize,
    pub page_button_count: usize,
    pub pager_format: String,
    pub page_prev_text: String,
    pub page_next_text: String,
    pub page_first_text: String,
    pub page_last_text: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            width: "100%".to_owned(),
            heading: true,
            filtering: true,
            inserting: true,
            editing: true,
            selecting: true,
            sorting: true,
            paging: true,
            autoload: true,
            page_size: PAGE_SIZE,
            page_button_count: PAGE_BUTTON_COUNT,
            pager_format: PAGER_FORMAT.to_owned(),
            page_prev_text: PAGE_PREV_TEXT.to_owned(),
            page_next_text: PAGE_NEXT_TEXT.to_owned(),
            page_first_text: PAGE_FIRST_TEXT.to_owned(),
            page_last_text: PAGE_LAST_TEXT.to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
