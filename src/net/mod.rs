//! Backend REST plumbing: wire types, client config, filter normalization
//! and the reqwest-backed record controller.

pub mod config;
pub mod filter;
pub mod rest;
pub mod types;

pub use rest::RestController;
pub use types::{RecordController, Row};
