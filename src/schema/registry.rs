//! Table configuration registry.
//!
//! Read-only mapping from table key to [`TableConfig`], plus the two shared
//! column groups every table gets: the spot columns (parcel/row/column) in
//! front and the control column at the end. Built once and handed to the
//! binder explicitly; nothing here is global or mutable after construction.

use std::collections::HashMap;

use super::{FieldDescriptor, SelectItem, TableConfig};
use crate::error::GridError;

/// Registry of table configurations keyed by the bound element's id.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: HashMap<String, TableConfig>,
    spot_fields: Vec<FieldDescriptor>,
    control_fields: Vec<FieldDescriptor>,
}

impl TableRegistry {
    /// Build a registry from explicit parts.
    #[must_use]
    pub fn new(
        tables: HashMap<String, TableConfig>,
        spot_fields: Vec<FieldDescriptor>,
        control_fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self { tables, spot_fields, control_fields }
    }

    /// The production cemetery tables: payments, burials, maintenance,
    /// ownerships and constructions, with their backend endpoints.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn cemetery() -> Self {
        let mut tables = HashMap::new();

        tables.insert(
            "payments".to_owned(),
            TableConfig::new(
                "/payments/api/",
                vec![
                    FieldDescriptor::number("year", "Year Paid").left_aligned().left_header(),
                    FieldDescriptor::number("value", "Paid Amount").left_aligned().left_header(),
                    FieldDescriptor::number("receiptNumber", "Receipt Nr").left_header(),
                    FieldDescriptor::number("receiptYear", "Receipt Year").left_header(),
                ],
            ),
        );

        tables.insert(
            "burials".to_owned(),
            TableConfig::new(
                "/burials/api/",
                vec![
                    FieldDescriptor::text("firstName", "First Name"),
                    FieldDescriptor::text("lastName", "Last Name"),
                    FieldDescriptor::select(
                        "type",
                        "Type",
                        vec![
                            SelectItem::new("", ""),
                            SelectItem::new("Burial", "bral"),
                            SelectItem::new("Exhumation", "exhm"),
                        ],
                    )
                    .left_aligned()
                    .left_header(),
                    FieldDescriptor::number("year", "Year"),
                    FieldDescriptor::text("note", "Notes"),
                ],
            ),
        );

        tables.insert(
            "maintenance".to_owned(),
            TableConfig::new(
                "/maintenance_jsgrid/api/",
                vec![
                    FieldDescriptor::number("year", "Year"),
                    FieldDescriptor::checkbox("isKept", "Kept").left_header(),
                    FieldDescriptor::text("firstName", "First Name").read_only(),
                    FieldDescriptor::text("lastName", "Last Name").read_only(),
                ],
            ),
        );

        tables.insert(
            "ownerships".to_owned(),
            TableConfig::new(
                "/ownerships_jsgrid/api/",
                vec![
                    FieldDescriptor::text("firstName", "First Name"),
                    FieldDescriptor::text("lastName", "Last Name"),
                    FieldDescriptor::text("phone", "Phone"),
                    FieldDescriptor::number("deedNumber", "Deed Nr"),
                    FieldDescriptor::number("deedYear", "Deed Year"),
                    FieldDescriptor::text("sharingSpots", "On Same Deed").read_only(),
                    FieldDescriptor::number("receiptNumber", "Receipt Nr"),
                    FieldDescriptor::number("receiptYear", "Receipt Year"),
                    FieldDescriptor::number("receiptValue", "Amount Paid"),
                ],
            ),
        );

        tables.insert(
            "constructions".to_owned(),
            TableConfig::new(
                "/constructions_jsgrid/api/",
                vec![
                    FieldDescriptor::select(
                        "constructionType",
                        "Type",
                        vec![
                            SelectItem::new("", ""),
                            SelectItem::new("Border", "brdr"),
                            SelectItem::new("Tomb", "tomb"),
                        ],
                    )
                    .left_aligned()
                    .left_header(),
                    FieldDescriptor::text("builder", "Builder"),
                    FieldDescriptor::number("authorizationNumber", "Auth Nr"),
                    FieldDescriptor::number("authorizationYear", "Auth Year"),
                    FieldDescriptor::text("sharingAuthorization", "On Same Auth").read_only(),
                ],
            ),
        );

        let spot_fields = vec![
            FieldDescriptor::text("parcel", "Parcel"),
            FieldDescriptor::text("row", "Row"),
            FieldDescriptor::text("column", "Column"),
        ];
        let control_fields = vec![FieldDescriptor::control()];

        Self::new(tables, spot_fields, control_fields)
    }

    /// Look up the configuration bound to a table key.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownTable`] when no table is registered under
    /// `key` — a configuration error, not a runtime condition.
    pub fn lookup(&self, key: &str) -> Result<&TableConfig, GridError> {
        self.tables.get(key).ok_or_else(|| GridError::UnknownTable(key.to_owned()))
    }

    /// Effective column list for a table: spot columns, then the table's own
    /// columns, then the control column. Order matters to the grid host.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownTable`] when `key` has no entry.
    pub fn merged_fields(&self, key: &str) -> Result<Vec<FieldDescriptor>, GridError> {
        let config = self.lookup(key)?;
        let mut fields = self.spot_fields.clone();
        fields.extend(config.fields.iter().cloned());
        fields.extend(self.control_fields.iter().cloned());
        Ok(fields)
    }

    /// Shared spot columns prepended to every table.
    #[must_use]
    pub fn spot_fields(&self) -> &[FieldDescriptor] {
        &self.spot_fields
    }

    /// Shared control column appended to every table.
    #[must_use]
    pub fn control_fields(&self) -> &[FieldDescriptor] {
        &self.control_fields
    }

    /// Registered table keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
