use serde::Deserialize;
use std::collections::BTreeSet;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct WordLists {
    honorific_prefixes: Vec<String>,
    credential_suffixes: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/word_lists.json")?;
    let lists: WordLists = serde_json::from_str(&json)?;

    write_set(
        &output.join("honorific_prefixes.rs"),
        &loose_keys(&lists.honorific_prefixes),
    )?;
    write_set(
        &output.join("credential_suffixes.rs"),
        &loose_keys(&lists.credential_suffixes),
    )?;

    Ok(())
}

// Lookups happen on letters-only uppercase keys, so store the data that way;
// this also drops stray whitespace and duplicates, which phf_codegen rejects
fn loose_keys(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| {
            w.chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_uppercase())
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v.as_str());
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
