//! The `trivia search` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use super::open_service;

pub async fn execute(term: String, config_path: Option<PathBuf>) -> Result<()> {
    let (_config, service) = open_service(config_path.as_deref())?;
    let results = service.search(&term).await?;

    if !results.questions.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["ID", "Question", "Answer", "Difficulty"]);
        for q in &results.questions {
            table.add_row(vec![
                q.id.to_string(),
                q.text.clone(),
                q.answer.clone(),
                q.difficulty.to_string(),
            ]);
        }
        println!("{table}");
    }
    println!("{} matching question(s)", results.total_questions);

    Ok(())
}
