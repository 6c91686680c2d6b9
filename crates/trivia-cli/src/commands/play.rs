//! The `trivia play` command.
//!
//! The quiz host: owns the per-session question cap and the answer loop.
//! The core selector only ever sees the history this loop hands it, so the
//! cap and the session lifetime live here, not in the core.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use uuid::Uuid;

use trivia_core::model::QuizState;

use super::open_service;

/// Summary of one finished quiz session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayReport {
    id: Uuid,
    played_at: DateTime<Utc>,
    category: Option<u64>,
    questions_asked: usize,
    correct: usize,
}

pub async fn execute(
    category: Option<u64>,
    length: Option<usize>,
    seed: Option<u64>,
    report_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, service) = open_service(config_path.as_deref())?;
    let length = length.unwrap_or(config.quiz_length);

    let scope = match category {
        Some(id) => service
            .categories()
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .map(|c| c.name)
            .unwrap_or_else(|| format!("category {id}")),
        None => "all categories".to_string(),
    };
    println!("Playing up to {length} question(s) from {scope}");

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut state = match category {
        Some(id) => QuizState::in_category(id),
        None => QuizState::new(),
    };

    let stdin = io::stdin();
    let mut asked = 0;
    let mut correct = 0;

    while asked < length {
        let draw = service.next_question(&state, &mut rng).await?;
        let Some(q) = draw.question else {
            println!("\nNo more questions, the deck is exhausted.");
            break;
        };

        asked += 1;
        println!("\nQuestion {asked}/{length}: {}", q.text);
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // stdin closed mid-session
            println!();
            break;
        }

        if line.trim().eq_ignore_ascii_case(q.answer.trim()) {
            correct += 1;
            println!("Correct!");
        } else {
            println!("The answer was: {}", q.answer);
        }
        state.record(q.id);
    }

    println!("\nFinal score: {correct}/{asked}");

    if let Some(path) = report_path {
        let report = PlayReport {
            id: Uuid::new_v4(),
            played_at: Utc::now(),
            category,
            questions_asked: asked,
            correct,
        };
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
