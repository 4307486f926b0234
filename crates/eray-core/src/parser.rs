//! TOML vocabulary file parser.
//!
//! Word lists ship as one TOML file per category: a `[category]` header
//! followed by `[[words]]` entries. Files load individually or as a whole
//! directory, and `validate_vocabulary_set` reports data problems that the
//! engine would otherwise trip over at quiz time.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::MIN_POOL_SIZE;
use crate::model::{Category, Difficulty, ExamplePair, PartOfSpeech, VocabularyEntry};

/// A parsed category and its word list.
#[derive(Debug, Clone)]
pub struct VocabularySet {
    pub category: Category,
    pub words: Vec<VocabularyEntry>,
}

/// Intermediate TOML structure for vocabulary files.
#[derive(Debug, Deserialize)]
struct TomlVocabularyFile {
    category: TomlCategory,
    #[serde(default)]
    words: Vec<TomlWord>,
}

#[derive(Debug, Deserialize)]
struct TomlCategory {
    id: String,
    name_so: String,
    name_en: String,
}

#[derive(Debug, Deserialize)]
struct TomlWord {
    id: String,
    word_so: String,
    word_en: String,
    #[serde(default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    examples: Vec<TomlExample>,
}

#[derive(Debug, Deserialize)]
struct TomlExample {
    so: String,
    en: String,
}

/// Parse a single TOML file into a `VocabularySet`.
pub fn parse_vocabulary_set(path: &Path) -> Result<VocabularySet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read vocabulary file: {}", path.display()))?;
    parse_vocabulary_set_str(&content, path)
}

/// Parse a TOML string into a `VocabularySet` (useful for testing).
pub fn parse_vocabulary_set_str(content: &str, source_path: &Path) -> Result<VocabularySet> {
    let parsed: TomlVocabularyFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let category = Category {
        id: parsed.category.id,
        name_so: parsed.category.name_so,
        name_en: parsed.category.name_en,
    };

    let words = parsed
        .words
        .into_iter()
        .map(|w| {
            let part_of_speech = w
                .part_of_speech
                .map(|s| {
                    PartOfSpeech::from_str(&s)
                        .map_err(|e| anyhow::anyhow!("word \"{}\": {e}", w.id))
                })
                .transpose()?;
            let difficulty = w
                .difficulty
                .map(|s| {
                    Difficulty::from_str(&s).map_err(|e| anyhow::anyhow!("word \"{}\": {e}", w.id))
                })
                .transpose()?;

            Ok(VocabularyEntry {
                id: w.id,
                category_id: category.id.clone(),
                word_so: w.word_so,
                word_en: w.word_en,
                part_of_speech,
                difficulty,
                examples: w
                    .examples
                    .into_iter()
                    .map(|e| ExamplePair { so: e.so, en: e.en })
                    .collect(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(VocabularySet { category, words })
}

/// Load every `.toml` vocabulary file in a directory, sorted by file name.
pub fn load_vocabulary_directory(dir: &Path) -> Result<Vec<VocabularySet>> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    paths.iter().map(|p| parse_vocabulary_set(p)).collect()
}

/// A data problem found in a vocabulary set.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending word, if the problem is word-level.
    pub word_id: Option<String>,
    pub message: String,
}

/// Check a vocabulary set for problems the engine cannot work around:
/// empty terms, duplicate ids, and pools too small to quiz from.
pub fn validate_vocabulary_set(set: &VocabularySet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.words.len() < MIN_POOL_SIZE {
        warnings.push(ValidationWarning {
            word_id: None,
            message: format!(
                "category \"{}\" has {} words; at least {MIN_POOL_SIZE} are needed to generate a quiz",
                set.category.id,
                set.words.len()
            ),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for word in &set.words {
        if word.word_so.trim().is_empty() {
            warnings.push(ValidationWarning {
                word_id: Some(word.id.clone()),
                message: "Somali term is empty".into(),
            });
        }
        if word.word_en.trim().is_empty() {
            warnings.push(ValidationWarning {
                word_id: Some(word.id.clone()),
                message: "English term is empty".into(),
            });
        }
        if !seen.insert(word.id.as_str()) {
            warnings.push(ValidationWarning {
                word_id: Some(word.id.clone()),
                message: "duplicate word id".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = r#"
[category]
id = "animals"
name_so = "Xayawaanka"
name_en = "Animals"

[[words]]
id = "w1"
word_so = "libaax"
word_en = "lion"
part_of_speech = "noun"
difficulty = "beginner"

[[words.examples]]
so = "Libaaxu waa boqorka duurka."
en = "The lion is the king of the wild."

[[words]]
id = "w2"
word_so = "geel"
word_en = "camel"
part_of_speech = "noun"

[[words]]
id = "w3"
word_so = "shimbir"
word_en = "bird"

[[words]]
id = "w4"
word_so = "kalluun"
word_en = "fish"
"#;

    #[test]
    fn parses_a_complete_file() {
        let set = parse_vocabulary_set_str(SAMPLE, &PathBuf::from("animals.toml")).unwrap();
        assert_eq!(set.category.id, "animals");
        assert_eq!(set.words.len(), 4);

        let lion = &set.words[0];
        assert_eq!(lion.word_en, "lion");
        assert_eq!(lion.part_of_speech, Some(PartOfSpeech::Noun));
        assert_eq!(lion.difficulty, Some(Difficulty::Beginner));
        assert_eq!(lion.category_id, "animals");
        assert_eq!(lion.examples.len(), 1);

        let bird = &set.words[2];
        assert_eq!(bird.part_of_speech, None);
        assert_eq!(bird.difficulty, None);
    }

    #[test]
    fn unknown_part_of_speech_is_an_error() {
        let bad = SAMPLE.replace("part_of_speech = \"noun\"", "part_of_speech = \"article\"");
        let err = parse_vocabulary_set_str(&bad, &PathBuf::from("animals.toml")).unwrap_err();
        assert!(err.to_string().contains("unknown part of speech"));
    }

    #[test]
    fn valid_set_has_no_warnings() {
        let set = parse_vocabulary_set_str(SAMPLE, &PathBuf::from("animals.toml")).unwrap();
        assert!(validate_vocabulary_set(&set).is_empty());
    }

    #[test]
    fn empty_terms_and_duplicates_are_flagged() {
        let mut set = parse_vocabulary_set_str(SAMPLE, &PathBuf::from("animals.toml")).unwrap();
        set.words[1].word_en = "  ".into();
        set.words[3].id = "w1".into();

        let warnings = validate_vocabulary_set(&set);
        assert_eq!(warnings.len(), 2);
        assert!(warnings
            .iter()
            .any(|w| w.word_id.as_deref() == Some("w2") && w.message.contains("English term")));
        assert!(warnings
            .iter()
            .any(|w| w.word_id.as_deref() == Some("w1") && w.message.contains("duplicate")));
    }

    #[test]
    fn small_pools_are_flagged() {
        let set = parse_vocabulary_set_str(
            r#"
[category]
id = "tiny"
name_so = "Yar"
name_en = "Tiny"

[[words]]
id = "w1"
word_so = "kow"
word_en = "one"
"#,
            &PathBuf::from("tiny.toml"),
        )
        .unwrap();

        let warnings = validate_vocabulary_set(&set);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("at least 4"));
    }

    #[test]
    fn loads_a_directory_sorted_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let second = SAMPLE.replace("animals", "birds");
        std::fs::write(dir.path().join("b_birds.toml"), second).unwrap();
        std::fs::write(dir.path().join("a_animals.toml"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sets = load_vocabulary_directory(dir.path()).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].category.id, "animals");
        assert_eq!(sets[1].category.id, "birds");
    }
}
