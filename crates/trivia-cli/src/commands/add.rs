//! The `trivia add` command.

use std::path::PathBuf;

use anyhow::Result;

use trivia_core::model::NewQuestion;

use super::open_service;

pub async fn execute(
    question: String,
    answer: String,
    category: u64,
    difficulty: u8,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (_config, service) = open_service(config_path.as_deref())?;

    let created = service
        .create(NewQuestion {
            text: question,
            answer,
            category,
            difficulty,
        })
        .await?;

    println!("Created question {}", created.id);
    Ok(())
}
