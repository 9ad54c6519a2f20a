//! Table binder: one grid instance per grid-marked element.

use crate::error::GridError;
use crate::net::config::ClientConfig;
use crate::net::rest::{build_http_client, RestController};
use crate::net::types::{RecordController, Row};
use crate::schema::registry::TableRegistry;
use crate::schema::FieldDescriptor;

use super::options::GridOptions;

/// The DOM-binding surface: a grid-marked element whose `id` attribute names
/// a registry table key.
pub trait GridElement {
    fn id(&self) -> &str;
}

/// Binds grid-marked elements to their table configuration and controller.
///
/// Holds the registry and client config by value and shares one HTTP client
/// across every table it binds.
pub struct Binder {
    registry: TableRegistry,
    config: ClientConfig,
    http: reqwest::Client,
}

impl Binder {
    /// # Errors
    ///
    /// Returns [`GridError::HttpClientBuild`] if the shared HTTP client
    /// cannot be constructed.
    pub fn new(registry: TableRegistry, config: ClientConfig) -> Result<Self, GridError> {
        let http = build_http_client(&config)?;
        Ok(Self { registry, config, http })
    }

    /// Bind one element by its `id` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownTable`] when the element's id has no
    /// registry entry — a configuration error.
    pub fn bind(&self, element: &impl GridElement) -> Result<BoundGrid, GridError> {
        self.bind_key(element.id())
    }

    /// Bind a table directly by registry key.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownTable`] when `key` has no registry entry.
    pub fn bind_key(&self, key: &str) -> Result<BoundGrid, GridError> {
        let config = self.registry.lookup(key)?;
        let fields = self.registry.merged_fields(key)?;
        let controller = RestController::with_client(self.http.clone(), &self.config, &config.url);

        tracing::info!(table = key, url = controller.url(), "grid bound");
        Ok(BoundGrid {
            table: key.to_owned(),
            fields,
            options: GridOptions::default(),
            controller,
        })
    }

    /// Page-ready sweep: bind every grid-marked element, skipping (with a
    /// warning) elements whose id has no registry entry.
    pub fn bind_all<'a, E, I>(&self, elements: I) -> Vec<BoundGrid>
    where
        E: GridElement + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        elements
            .into_iter()
            .filter_map(|element| match self.bind(element) {
                Ok(grid) => Some(grid),
                Err(e) => {
                    tracing::warn!(id = element.id(), error = %e, "skipping unbindable grid element");
                    None
                }
            })
            .collect()
    }
}

/// One bound grid: everything the host needs to attach the widget.
#[derive(Debug)]
pub struct BoundGrid {
    /// Registry key the grid was bound with.
    pub table: String,
    /// Merged column list: spot columns, table columns, control column.
    pub fields: Vec<FieldDescriptor>,
    pub options: GridOptions,
    controller: RestController,
}

impl BoundGrid {
    /// The backend interface the widget drives.
    #[must_use]
    pub fn controller(&self) -> &RestController {
        &self.controller
    }

    /// The initial unfiltered load the widget performs on attach. A no-op
    /// returning no rows when `options.autoload` is off.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the list request fails.
    pub async fn autoload(&self) -> Result<Vec<Row>, GridError> {
        if !self.options.autoload {
            return Ok(Vec::new());
        }
        self.controller.load_data(&Row::new()).await
    }
}

#[cfg(test)]
#[path = "binder_test.rs"]
mod tests;
