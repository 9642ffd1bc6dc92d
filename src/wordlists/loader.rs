//! Word data loading utilities
//!
//! Reads dictionaries and allowed-word lists from disk in the same formats the
//! build script embeds:
//! - dictionaries: `<NAME>.tsv`, one `word<TAB>meaning` per line
//! - word lists: one word per line
//!
//! Blank lines and lines starting with `#` are skipped.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Parse dictionary text
#[must_use]
pub fn parse_dictionary(name: &str, content: &str) -> Dictionary {
    let entries = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (word, meaning) = line.split_once('\t').unwrap_or((line, ""));
            (word.trim(), meaning.trim())
        });

    Dictionary::new(name, entries)
}

/// Load a dictionary named after the file stem
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_sessions::wordlists::loader::load_dictionary_file;
///
/// let dict = load_dictionary_file("words/TOEFL.tsv").unwrap();
/// assert_eq!(dict.name(), "TOEFL");
/// ```
pub fn load_dictionary_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("no file name in {}", path.display()),
            )
        })?;
    let content = fs::read_to_string(path)?;

    Ok(parse_dictionary(&name, &content))
}

/// Load every `*.tsv` dictionary in a directory, sorted by name
///
/// # Errors
///
/// Returns an I/O error if the directory or one of its dictionaries cannot be read.
pub fn load_dictionary_dir<P: AsRef<Path>>(dir: P) -> io::Result<Vec<Dictionary>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "tsv") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(load_dictionary_file).collect()
}

/// Load a plain word list
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect())
}
