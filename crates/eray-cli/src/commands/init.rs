//! The `eray init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("words")?;
    let starter_path = std::path::Path::new("words/starter.toml");
    if starter_path.exists() {
        println!("words/starter.toml already exists, skipping.");
    } else {
        std::fs::write(starter_path, STARTER_WORDS)?;
        println!("Created words/starter.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your own words to words/starter.toml");
    println!("  2. Run: eray validate --words words/starter.toml");
    println!("  3. Run: eray practice --words words/starter.toml");

    Ok(())
}

const STARTER_WORDS: &str = r#"# eray vocabulary file
# One [category] per file, any number of [[words]].

[category]
id = "starter"
name_so = "Bilowga"
name_en = "Starter"

[[words]]
id = "starter-water"
word_so = "biyo"
word_en = "water"
part_of_speech = "noun"
difficulty = "beginner"

[[words.examples]]
so = "Waxaan cabbayaa biyo."
en = "I am drinking water."

[[words]]
id = "starter-milk"
word_so = "caano"
word_en = "milk"
part_of_speech = "noun"
difficulty = "beginner"

[[words]]
id = "starter-eat"
word_so = "cun"
word_en = "eat"
part_of_speech = "verb"
difficulty = "beginner"

[[words]]
id = "starter-good"
word_so = "fiican"
word_en = "good"
part_of_speech = "adjective"
difficulty = "beginner"

[[words]]
id = "starter-house"
word_so = "guri"
word_en = "house"
part_of_speech = "noun"
difficulty = "beginner"

[[words]]
id = "starter-sun"
word_so = "qorrax"
word_en = "sun"
part_of_speech = "noun"
difficulty = "intermediate"
"#;
