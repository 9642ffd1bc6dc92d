//! Build script to generate embedded word data
//!
//! Reads the dictionary and allowed-word files and generates Rust source code
//! with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionaries(
        Path::new("data/dictionaries"),
        &Path::new(&out_dir).join("dictionaries.rs"),
    );

    generate_word_list(
        "data/allowed.txt",
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "Extra words accepted as guesses besides dictionary words",
    );

    // Rebuild if word data changes
    println!("cargo:rerun-if-changed=data/dictionaries");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

/// One `<NAME>.tsv` per dictionary, `word<TAB>meaning` per line
fn generate_dictionaries(input_dir: &Path, output_path: &Path) {
    let mut files: Vec<_> = fs::read_dir(input_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", input_dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "tsv"))
        .collect();
    files.sort();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionaries").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Embedded dictionaries as (name, [(word, meaning)])").unwrap();
    writeln!(output, "pub const DICTIONARIES: &[(&str, &[(&str, &str)])] = &[").unwrap();

    for path in files {
        println!("cargo:rerun-if-changed={}", path.display());
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

        writeln!(output, "    ({name:?}, &[").unwrap();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, meaning) = line.split_once('\t').unwrap_or((line, ""));
            writeln!(output, "        ({:?}, {:?}),", word.trim(), meaning.trim()).unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }

    writeln!(output, "];").unwrap();
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
