//! XML/HTML reading and writing helpers built on quick-xml.

use quick_xml::{
    Reader, Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Lenient reader for HTML: keeps whitespace and skips well-formedness checks.
#[inline]
pub fn create_xml_reader(content: &[u8]) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);
    reader
}

#[inline]
pub fn create_xml_writer(capacity: usize) -> XmlWriter {
    Writer::new(Cursor::new(Vec::with_capacity(capacity)))
}

/// Write an element whose body is emitted verbatim: `<tag attrs>body</tag>`.
///
/// The caller guarantees `body` cannot close the element early.
pub fn write_raw_element(
    writer: &mut XmlWriter,
    tag: &str,
    attrs: &[(&str, &str)],
    body: &str,
) -> std::io::Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::from_escaped(body)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Look up an attribute value on a start tag.
pub fn attr_value(elem: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    elem.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name)
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}
