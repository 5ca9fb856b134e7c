//! Entry construction
//!
//! Turns raw CSV rows into [`DictionaryEntry`] values with document-unique IDs.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::dictionary::escape::{escape_html, sanitize_id};
use crate::dictionary::model::{DictionaryEntry, IndexValue, RawRow, Record};

/// Tracks base identifiers handed out during one conversion run
///
/// The first occurrence of a base gets the base itself, the second gets
/// `base_1`, the third `base_2`, and so on. A suffixed candidate can still
/// equal another term's base (`go`, `go`, `go_1`); such candidates are
/// skipped by advancing the counter of the base being assigned.
#[derive(Debug, Default)]
pub struct IdRegistry {
    counts: HashMap<String, usize>,
    assigned: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a document-unique ID for `base`
    pub fn assign(&mut self, base: String) -> String {
        loop {
            let count = self.counts.entry(base.clone()).or_insert(0);
            let candidate = if *count == 0 {
                base.clone()
            } else {
                format!("{}_{}", base, count)
            };
            *count += 1;

            if self.assigned.insert(candidate.clone()) {
                if candidate != base {
                    debug!(base = %base, id = %candidate, "Duplicate identifier suffixed");
                }
                return candidate;
            }
            debug!(base = %base, id = %candidate, "Identifier already taken");
        }
    }

    /// How many times `base` has been requested (including skipped candidates)
    pub fn occurrences(&self, base: &str) -> usize {
        self.counts.get(base).copied().unwrap_or(0)
    }
}

/// Build the inner markup for an entry from unescaped text
pub fn render_content(term: &str, description: &str, tag: &str) -> String {
    let mut content = format!(
        "<h1>{}</h1>\n<div>\n{}\n</div>",
        escape_html(term),
        escape_html(description)
    );
    if !tag.is_empty() {
        content.push_str(&format!("\n<span class=\"tag\">{}</span>", escape_html(tag)));
    }
    content
}

/// Build one entry, registering its identifier
pub fn build_entry(record: &Record, registry: &mut IdRegistry) -> DictionaryEntry {
    let id = registry.assign(sanitize_id(&record.term));
    let escaped_term = escape_html(&record.term);

    DictionaryEntry::new(
        id,
        escaped_term.clone(),
        vec![IndexValue::new(escaped_term)],
        render_content(&record.term, &record.description, &record.tag),
    )
}

/// Build entries for all rows, in input order
///
/// Rows with fewer than two fields are skipped silently and do not touch the
/// identifier counters.
pub fn build_entries(rows: &[RawRow]) -> Vec<DictionaryEntry> {
    let mut registry = IdRegistry::new();
    let mut entries = Vec::with_capacity(rows.len());

    for row in rows {
        match Record::from_fields(&row.fields) {
            Some(record) => entries.push(build_entry(&record, &mut registry)),
            None => debug!(line = row.line, fields = row.fields.len(), "Skipping short row"),
        }
    }

    entries
}
