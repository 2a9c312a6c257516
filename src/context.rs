//! Process-lifetime context: the loaded graph and the configuration.

use std::sync::Arc;

use crate::config::Config;
use crate::di::{Context as ContextDerive, FromRef};
use crate::error::AppError;
use crate::graph::backends::oxigraph::{LoadReport, OxigraphClient};
use crate::graph::Graph;

/// Shared, read-only graph handle.
pub type AppGraph = Arc<Graph<OxigraphClient>>;

/// Shared configuration handle.
pub type AppConfig = Arc<Config>;

/// Root of dependency injection.
///
/// Built once at startup after every data file has been loaded. The graph is
/// never mutated afterwards, so clones can be handed to any number of
/// concurrent request handlers.
#[derive(ContextDerive, Clone)]
pub struct Context {
    pub graph: AppGraph,
    pub config: AppConfig,
}

impl Context {
    /// Wraps an already populated store.
    pub fn new(client: OxigraphClient, config: Config) -> Self {
        Self {
            graph: Arc::new(Graph::new(client)),
            config: Arc::new(config),
        }
    }

    /// Creates the store and loads the configured data files into it.
    ///
    /// Files that fail to load are skipped; see [`LoadReport`].
    pub async fn from_config(config: Config) -> Result<(Self, LoadReport), AppError> {
        let client = OxigraphClient::in_memory(config.store.query_timeout())?;
        let paths = config.store.file_paths();

        let loader = client.clone();
        let report = tokio::task::spawn_blocking(move || loader.load_files(&paths))
            .await
            .map_err(|e| AppError::Internal(format!("data loading task failed: {e}")))?;

        Ok((Self::new(client, config), report))
    }

    /// Builds any `FromContext` type.
    pub fn resolve<T: FromRef<Self>>(&self) -> T {
        T::from_ref(self)
    }
}
