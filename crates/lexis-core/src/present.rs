//! Text shown in the definition, translation and history panels.

use std::fmt::Write;

use crate::history::HistoryEntry;
use crate::types::WordRecord;

pub fn render_record(record: &WordRecord) -> String {
    let mut out = format!("Word: {}\n\n", capitalize(record.word()));

    out.push_str("Definitions:\n");
    push_numbered(&mut out, record.definitions());

    if !record.examples().is_empty() {
        out.push_str("\nExamples:\n");
        push_numbered(&mut out, record.examples());
    }

    if !record.synonyms().is_empty() {
        out.push_str("\nSynonyms:\n");
        out.push_str(&record.synonyms().join(", "));
    }

    if !record.antonyms().is_empty() {
        out.push_str("\nAntonyms:\n");
        out.push_str(&record.antonyms().join(", "));
    }

    out
}

pub fn render_translation(text: &str, pronunciation: Option<&str>) -> String {
    format!(
        "Translation: {}\nPronunciation: {}",
        text,
        pronunciation.unwrap_or(text)
    )
}

pub fn render_translation_error(error: &dyn std::fmt::Display) -> String {
    format!("Translation error: {error}")
}

/// One line per entry, newest first
pub fn render_history<'a>(
    entries: impl DoubleEndedIterator<Item = &'a HistoryEntry>,
    preview_chars: usize,
) -> Vec<String> {
    entries
        .rev()
        .map(|entry| {
            let preview: String = entry.definition.chars().take(preview_chars).collect();
            format!(
                "{} - {}: {}...",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.word,
                preview
            )
        })
        .collect()
}

/// First character upper case, the rest lower case
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn push_numbered(out: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, item);
    }
}
