use std::io;
use std::path::PathBuf;

use route_graph_core::GraphError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("output error: {0}")]
    Io(#[from] io::Error),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
