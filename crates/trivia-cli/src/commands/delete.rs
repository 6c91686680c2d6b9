//! The `trivia delete` command.

use std::path::PathBuf;

use anyhow::Result;

use super::open_service;

pub async fn execute(id: u64, config_path: Option<PathBuf>) -> Result<()> {
    let (_config, service) = open_service(config_path.as_deref())?;
    service.delete(id).await?;
    println!("Deleted question {id}");
    Ok(())
}
