//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::table::{RecommendationTable, TableState};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration, Tera template engine, and the
/// recommendation table (or the load error captured at startup). Everything
/// here is read-only after construction, so concurrent handlers need no
/// coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub table: Arc<TableState>,
}

impl AppState {
    /// Creates a new application state from the given configuration, templates,
    /// and table load outcome.
    pub fn new(config: AppConfig, tera: Tera, table: TableState) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            table: Arc::new(table),
        }
    }

    /// The loaded table, or the service-unavailable error captured at startup.
    pub fn table(&self) -> Result<&RecommendationTable, AppError> {
        match self.table.as_ref() {
            TableState::Available(table) => Ok(table),
            TableState::Degraded(message) => Err(AppError::Unavailable(message.clone())),
        }
    }
}
