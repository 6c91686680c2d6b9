//! Subcommand implementations.

use std::path::Path;

use anyhow::Result;

use trivia_core::service::{ServiceConfig, TriviaService};
use trivia_store::TriviaConfig;

pub mod add;
pub mod categories;
pub mod delete;
pub mod init;
pub mod list;
pub mod play;
pub mod search;

/// Load configuration and open the configured store behind a service.
pub(crate) fn open_service(config_path: Option<&Path>) -> Result<(TriviaConfig, TriviaService)> {
    let config = trivia_store::load_config_from(config_path)?;
    tracing::debug!(data_file = %config.data_file.display(), "opening store");
    let store = trivia_store::open_store(&config)?;
    let service = TriviaService::new(
        store,
        ServiceConfig {
            page_size: config.page_size,
        },
    );
    Ok((config, service))
}
