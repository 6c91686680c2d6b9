//! The `trivia categories` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use super::open_service;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (_config, service) = open_service(config_path.as_deref())?;
    let categories = service.categories().await?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Category"]);
    for c in &categories {
        table.add_row(vec![c.id.to_string(), c.name.clone()]);
    }
    println!("{table}");
    println!("{} categories", categories.len());

    Ok(())
}
