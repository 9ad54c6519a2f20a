//! Field schemas for the record tables.
//!
//! A table is described by an ordered list of [`FieldDescriptor`]s plus its
//! backend collection URL. Descriptors serialize to the exact option shape a
//! JS grid host consumes (`type`, `headercss`, `Text`/`Value` select pairs),
//! so a host can pass the merged schema to the widget verbatim.

pub mod registry;

use serde::Serialize;

// =============================================================================
// FIELD TYPES
// =============================================================================

/// Column kind understood by the grid host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free-text input column.
    Text,
    /// Numeric input column.
    Number,
    /// Dropdown column backed by [`SelectItem`] options.
    Select,
    /// Boolean checkbox column.
    Checkbox,
    /// Row action column (edit/delete buttons), no data field.
    Control,
}

/// One dropdown option — the `{Text, Value}` pair contract of the grid host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectItem {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl SelectItem {
    #[must_use]
    pub fn new(text: &str, value: &str) -> Self {
        Self { text: text.to_owned(), value: value.to_owned() }
    }
}

// =============================================================================
// FIELD DESCRIPTOR
// =============================================================================

/// A single column definition. Immutable once constructed.
///
/// `inserting`/`editing` default to true and are only serialized when false,
/// i.e. when the field is suppressed from the create/edit forms (derived
/// columns such as `sharingSpots`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SelectItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(rename = "headercss", skip_serializing_if = "Option::is_none")]
    pub header_css: Option<String>,
    #[serde(skip_serializing_if = "is_true")]
    pub inserting: bool,
    #[serde(skip_serializing_if = "is_true")]
    pub editing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_switch_button: Option<bool>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_true(flag: &bool) -> bool {
    *flag
}

impl FieldDescriptor {
    fn base(name: &str, title: &str, field_type: FieldType) -> Self {
        Self {
            name: Some(name.to_owned()),
            title: Some(title.to_owned()),
            field_type,
            items: Vec::new(),
            text_field: None,
            value_field: None,
            align: None,
            header_css: None,
            inserting: true,
            editing: true,
            edit_button: None,
            mode_switch_button: None,
        }
    }

    /// Free-text column.
    #[must_use]
    pub fn text(name: &str, title: &str) -> Self {
        Self::base(name, title, FieldType::Text)
    }

    /// Numeric column.
    #[must_use]
    pub fn number(name: &str, title: &str) -> Self {
        Self::base(name, title, FieldType::Number)
    }

    /// Checkbox column.
    #[must_use]
    pub fn checkbox(name: &str, title: &str) -> Self {
        Self::base(name, title, FieldType::Checkbox)
    }

    /// Dropdown column. Options render their `Text` and store their `Value`.
    #[must_use]
    pub fn select(name: &str, title: &str, items: Vec<SelectItem>) -> Self {
        let mut field = Self::base(name, title, FieldType::Select);
        field.items = items;
        field.text_field = Some("Text".to_owned());
        field.value_field = Some("Value".to_owned());
        field
    }

    /// Row action column: inline edit button off, mode switch button on.
    #[must_use]
    pub fn control() -> Self {
        Self {
            name: None,
            title: None,
            field_type: FieldType::Control,
            items: Vec::new(),
            text_field: None,
            value_field: None,
            align: None,
            header_css: None,
            inserting: true,
            editing: true,
            edit_button: Some(false),
            mode_switch_button: Some(true),
        }
    }

    /// Left-align cell contents.
    #[must_use]
    pub fn left_aligned(mut self) -> Self {
        self.align = Some("left".to_owned());
        self
    }

    /// Left-align the header cell.
    #[must_use]
    pub fn left_header(mut self) -> Self {
        self.header_css = Some("left-aligned-header".to_owned());
        self
    }

    /// Suppress the field from the create and edit forms.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.inserting = false;
        self.editing = false;
        self
    }
}

// =============================================================================
// TABLE CONFIGURATION
// =============================================================================

/// Backend endpoint and own columns of one record table.
///
/// `url` is the collection endpoint and keeps its trailing slash: item URLs
/// are formed by direct concatenation with the record id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableConfig {
    pub url: String,
    pub fields: Vec<FieldDescriptor>,
}

impl TableConfig {
    #[must_use]
    pub fn new(url: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self { url: url.to_owned(), fields }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
