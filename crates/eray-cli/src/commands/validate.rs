//! The `eray validate` command.

use std::path::PathBuf;

use anyhow::Result;

use eray_core::parser;

pub fn execute(words_path: PathBuf) -> Result<()> {
    let sets = if words_path.is_dir() {
        parser::load_vocabulary_directory(&words_path)?
    } else {
        vec![parser::parse_vocabulary_set(&words_path)?]
    };

    let mut total_warnings = 0;

    for set in &sets {
        println!(
            "Category: {} - {} ({} words)",
            set.category.name_so,
            set.category.name_en,
            set.words.len()
        );

        let warnings = parser::validate_vocabulary_set(set);
        for w in &warnings {
            let prefix = w
                .word_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All vocabulary files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
