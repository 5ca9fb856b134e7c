//! Apple Dictionary XML serialization
//!
//! The document is rendered into memory first and written to disk in a single
//! call, so a failed render never touches the output file.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::dictionary::model::{Dictionary, DictionaryEntry};
use crate::errors::{DictconvError, Result};

const ROOT_TAG: &str = "d:dictionary";
const ENTRY_TAG: &str = "d:entry";
const INDEX_TAG: &str = "d:index";

/// Serialize a dictionary to a complete, tab-indented XML document
pub fn render_dictionary(dictionary: &Dictionary) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
    write_document(&mut writer, dictionary)
        .map_err(|e| DictconvError::Xml(quick_xml::Error::from(e)))?;

    let mut buffer = writer.into_inner();
    buffer.push(b'\n');
    Ok(buffer)
}

fn write_document<W: Write>(writer: &mut Writer<W>, dictionary: &Dictionary) -> io::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let root = BytesStart::new(ROOT_TAG).with_attributes([
        ("xmlns", dictionary.xmlns()),
        ("xmlns:d", dictionary.xmlns_d()),
    ]);
    writer.write_event(Event::Start(root))?;

    for entry in dictionary.entries() {
        write_entry(writer, entry)?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))
}

/// Write one `<d:entry>` element
///
/// Attribute values get XML attribute escaping on top of the HTML escaping
/// already applied to the entry. The content fragment is emitted verbatim.
fn write_entry<W: Write>(writer: &mut Writer<W>, entry: &DictionaryEntry) -> io::Result<()> {
    let start = BytesStart::new(ENTRY_TAG)
        .with_attributes([("id", entry.id()), ("d:title", entry.title())]);
    writer.write_event(Event::Start(start))?;

    for index in entry.index() {
        let element = BytesStart::new(INDEX_TAG).with_attributes([("d:value", index.value())]);
        writer.write_event(Event::Empty(element))?;
    }

    writer.write_event(Event::Text(BytesText::from_escaped(entry.content())))?;
    writer.write_event(Event::End(BytesEnd::new(ENTRY_TAG)))
}

/// Render and write a dictionary to `path`, replacing any existing file
pub fn write_dictionary(dictionary: &Dictionary, path: &Path) -> Result<()> {
    let document = render_dictionary(dictionary)?;

    let mut file = File::create(path).map_err(|source| DictconvError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(&document)?;
    file.flush()?;

    info!(
        path = %path.display(),
        entries = dictionary.len(),
        bytes = document.len(),
        "Wrote dictionary XML"
    );
    Ok(())
}
