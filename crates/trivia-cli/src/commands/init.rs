//! The `trivia init` command.

use std::path::Path;

use anyhow::Result;

use trivia_store::{seed, JsonStore};

pub fn execute() -> Result<()> {
    // Create trivia.toml
    if Path::new("trivia.toml").exists() {
        println!("trivia.toml already exists, skipping.");
    } else {
        std::fs::write("trivia.toml", SAMPLE_CONFIG)?;
        println!("Created trivia.toml");
    }

    // Create the seeded data file
    let data_path = Path::new("trivia.json");
    if data_path.exists() {
        println!("trivia.json already exists, skipping.");
    } else {
        JsonStore::init(data_path, &seed::starter_pack())?;
        println!("Created trivia.json with the starter deck");
    }

    println!("\nNext steps:");
    println!("  1. Run: trivia list");
    println!("  2. Run: trivia play");
    println!("  3. Add your own questions: trivia add --help");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# trivia configuration

data_file = "trivia.json"
page_size = 10
quiz_length = 5
"#;
