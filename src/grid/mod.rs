//! Grid widget options and the table binder.

pub mod binder;
pub mod options;
pub mod super_header;

pub use binder::{Binder, BoundGrid, GridElement};
pub use options::GridOptions;
