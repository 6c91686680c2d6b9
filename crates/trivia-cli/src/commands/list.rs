//! The `trivia list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use trivia_core::pagination::page_count;

use super::open_service;

pub async fn execute(page: usize, config_path: Option<PathBuf>) -> Result<()> {
    let (config, service) = open_service(config_path.as_deref())?;
    let listing = service.questions(page).await?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Question", "Answer", "Category", "Difficulty"]);
    for q in &listing.questions {
        let category = listing
            .categories
            .iter()
            .find(|c| c.id == q.category)
            .map(|c| c.name.as_str())
            .unwrap_or("?");
        table.add_row(vec![
            q.id.to_string(),
            q.text.clone(),
            q.answer.clone(),
            category.to_string(),
            q.difficulty.to_string(),
        ]);
    }
    println!("{table}");

    let pages = page_count(listing.total_questions, config.page_size);
    println!(
        "Page {page} of {pages} — {} questions total",
        listing.total_questions
    );

    Ok(())
}
