//! plotgrid — data-grid binder for the cemetery administration REST API.
//!
//! Configures the record tables of the administration backend (payments,
//! burials, maintenance, ownerships, constructions) for a data-grid host:
//! per-table field schemas merged with the shared spot and control columns,
//! a four-operation REST controller (load/insert/update/delete), and the
//! widget options the host renders with.
//!
//! The grid widget itself is an external dependency. Anything able to show a
//! [`BoundGrid`] — merged field list, options, controller — is a host; the
//! controller trait is its sole interface to the backend.

pub mod error;
pub mod grid;
pub mod net;
pub mod schema;

pub use error::GridError;
pub use grid::{Binder, BoundGrid, GridElement, GridOptions};
pub use net::config::{ClientConfig, ZeroFilterPolicy};
pub use net::types::{RecordController, Row};
pub use net::RestController;
pub use schema::registry::TableRegistry;
pub use schema::{FieldDescriptor, FieldType, SelectItem, TableConfig};
