//! CSV to Apple Dictionary XML conversion
//!
//! The pipeline runs in three steps, each fully in memory:
//! - [`loader`] reads every CSV data row
//! - [`builder`] turns rows into entries with unique, sanitized IDs
//! - [`writer`] renders the XML document and writes it out

pub mod builder;
pub mod convert;
pub mod escape;
pub mod loader;
pub mod model;
pub mod writer;

pub use builder::{build_entries, build_entry, render_content, IdRegistry};
pub use convert::{convert, ConversionSummary};
pub use escape::{escape_html, sanitize_id};
pub use loader::{load_records, read_records};
pub use model::{
    Dictionary, DictionaryEntry, IndexValue, RawRow, Record, DICTIONARY_NAMESPACE,
    XHTML_NAMESPACE,
};
pub use writer::{render_dictionary, write_dictionary};
