//! Data model for the dictionary document

/// Default XHTML namespace carried by the root element
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Apple Dictionary Services namespace, bound to the `d` prefix
pub const DICTIONARY_NAMESPACE: &str = "http://www.apple.com/DTDs/DictionaryService-1.0.rng";

/// One CSV data row, as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the input file
    pub line: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }
}

/// A validated input row with trimmed fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub term: String,
    pub description: String,
    /// Empty when the row has no third column
    pub tag: String,
}

impl Record {
    /// Build a record from raw fields
    ///
    /// Returns `None` when there are fewer than two fields. Fields past the
    /// third are ignored.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        match fields {
            [term, description, rest @ ..] => Some(Self {
                term: term.as_ref().trim().to_string(),
                description: description.as_ref().trim().to_string(),
                tag: rest
                    .first()
                    .map(|tag| tag.as_ref().trim().to_string())
                    .unwrap_or_default(),
            }),
            _ => None,
        }
    }
}

/// Lookup value attached to an entry (`<d:index d:value="..."/>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexValue {
    value: String,
}

impl IndexValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A single dictionary entry
///
/// All text is stored HTML-escaped. `content` is an inner-markup fragment
/// that is written to the document verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    id: String,
    title: String,
    index: Vec<IndexValue>,
    content: String,
}

impl DictionaryEntry {
    pub fn new(id: String, title: String, index: Vec<IndexValue>, content: String) -> Self {
        Self { id, title, index, content }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn index(&self) -> &[IndexValue] {
        &self.index
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The output document: an ordered list of entries under the root element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        Self { entries }
    }

    pub fn xmlns(&self) -> &'static str {
        XHTML_NAMESPACE
    }

    pub fn xmlns_d(&self) -> &'static str {
        DICTIONARY_NAMESPACE
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
