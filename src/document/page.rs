use super::{Document, DocumentError, HeadNode, MARKER_ATTR, NodeId};
use crate::utils::xml::{XmlWriter, attr_value, create_xml_reader, create_xml_writer, write_raw_element};
use quick_xml::{
    Reader,
    events::{BytesStart, BytesText, Event},
    name::QName,
};

const BLANK_HTML: &str = "<!DOCTYPE html><html><head></head><body></body></html>";

/// An HTML page held in memory.
///
/// Attached head nodes are kept apart from the source and spliced in
/// before `</head>` when the page is rendered, or before `<body>` when the
/// page leaves its head open.
#[derive(Debug, Clone)]
pub struct Page {
    location: String,
    source: Vec<u8>,
    head: Vec<(NodeId, HeadNode)>,
    next_id: u64,
}

impl Page {
    /// Load a page from its HTML source.
    ///
    /// The source must open a `<head>` and then either close it or start the
    /// `<body>`. Tag names match in any case.
    pub fn parse(location: impl Into<String>, source: Vec<u8>) -> Result<Self, DocumentError> {
        if !has_head(&source)? {
            return Err(DocumentError::MissingHead);
        }
        Ok(Self {
            location: location.into(),
            source,
            head: Vec::new(),
            next_id: 0,
        })
    }

    /// An empty page with an empty head.
    pub fn blank(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            source: BLANK_HTML.as_bytes().to_vec(),
            head: Vec::new(),
            next_id: 0,
        }
    }

    /// Nodes currently attached, in insertion order.
    pub fn head_nodes(&self) -> impl Iterator<Item = &HeadNode> {
        self.head.iter().map(|(_, node)| node)
    }

    #[cfg(test)]
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.head.iter().any(|(attached, _)| *attached == id)
    }

    /// Write the page with attached nodes at the end of its head.
    ///
    /// Marked script nodes in the source are left out. Script and style
    /// bodies are copied through as raw text.
    pub fn render(&self) -> Result<Vec<u8>, DocumentError> {
        let mut reader = create_xml_reader(&self.source);
        let mut writer = create_xml_writer(self.source.len() + self.attached_len());
        let mut injected = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(elem)) if is_marked_script(&elem) => {
                    let end = elem.to_end().into_owned();
                    reader
                        .read_to_end(end.name())
                        .map_err(|source| parse_error(&reader, source))?;
                }
                Ok(Event::Empty(elem)) if is_marked_script(&elem) => {}
                Ok(Event::Start(elem)) if is_raw_text(&elem) => {
                    let end = elem.to_end().into_owned();
                    let text = reader
                        .read_text(end.name())
                        .map_err(|source| parse_error(&reader, source))?;
                    writer.write_event(Event::Start(elem))?;
                    writer.write_event(Event::Text(BytesText::from_escaped(text)))?;
                    writer.write_event(Event::End(end))?;
                }
                Ok(Event::End(elem)) if !injected && is_tag(elem.name(), b"head") => {
                    self.write_head_nodes(&mut writer)?;
                    injected = true;
                    writer.write_event(Event::End(elem))?;
                }
                // `</head>` is optional: the head ends where the body starts.
                Ok(Event::Start(elem)) if !injected && is_tag(elem.name(), b"body") => {
                    self.write_head_nodes(&mut writer)?;
                    injected = true;
                    writer.write_event(Event::Start(elem))?;
                }
                Ok(Event::Eof) => break,
                Ok(event) => writer.write_event(event)?,
                Err(source) => return Err(parse_error(&reader, source)),
            }
        }

        Ok(writer.into_inner().into_inner())
    }

    fn write_head_nodes(&self, writer: &mut XmlWriter) -> Result<(), DocumentError> {
        for node in self.head_nodes() {
            write_raw_element(
                writer,
                "script",
                &[("type", node.mime), (MARKER_ATTR, "")],
                &node.body,
            )?;
        }
        Ok(())
    }

    fn attached_len(&self) -> usize {
        self.head_nodes().map(|node| node.body.len() + 64).sum()
    }
}

impl Document for Page {
    fn append_to_head(&mut self, node: HeadNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.head.push((id, node));
        id
    }

    fn remove_from_head(&mut self, id: NodeId) -> bool {
        let before = self.head.len();
        self.head.retain(|(attached, _)| *attached != id);
        self.head.len() != before
    }

    fn location(&self) -> &str {
        &self.location
    }
}

fn has_head(source: &[u8]) -> Result<bool, DocumentError> {
    let mut reader = create_xml_reader(source);
    let mut opened = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(elem)) if is_raw_text(&elem) => {
                let end = elem.to_end().into_owned();
                reader
                    .read_to_end(end.name())
                    .map_err(|source| parse_error(&reader, source))?;
            }
            Ok(Event::Start(elem)) if is_tag(elem.name(), b"head") => opened = true,
            Ok(Event::Start(elem)) if is_tag(elem.name(), b"body") => return Ok(opened),
            Ok(Event::End(elem)) if is_tag(elem.name(), b"head") => return Ok(opened),
            Ok(Event::Eof) => return Ok(false),
            Ok(_) => {}
            Err(source) => return Err(parse_error(&reader, source)),
        }
    }
}

#[inline]
fn is_tag(name: QName<'_>, tag: &[u8]) -> bool {
    name.as_ref().eq_ignore_ascii_case(tag)
}

/// Elements whose content is text, never markup.
fn is_raw_text(elem: &BytesStart<'_>) -> bool {
    is_tag(elem.name(), b"script") || is_tag(elem.name(), b"style")
}

fn is_marked_script(elem: &BytesStart<'_>) -> bool {
    is_tag(elem.name(), b"script") && attr_value(elem, MARKER_ATTR.as_bytes()).is_some()
}

fn parse_error(reader: &Reader<&[u8]>, source: quick_xml::Error) -> DocumentError {
    DocumentError::Parse {
        position: reader.error_position(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_str(page: &Page) -> String {
        String::from_utf8(page.render().unwrap()).unwrap()
    }

    #[test]
    fn test_blank_page_renders_unchanged() {
        let page = Page::blank("https://example.com/");
        let html = render_str(&page);
        assert!(html.contains("DOCTYPE html"));
        assert!(html.ends_with("<html><head></head><body></body></html>"));
        assert_eq!(page.location(), "https://example.com/");
    }

    #[test]
    fn test_parse_requires_head() {
        let err = Page::parse("u", b"<html><body></body></html>".to_vec()).unwrap_err();
        assert!(matches!(err, DocumentError::MissingHead));
        let err = Page::parse("u", b"<html><head><title>t</title></html>".to_vec()).unwrap_err();
        assert!(matches!(err, DocumentError::MissingHead));

        assert!(Page::parse("u", b"<html><head><title>t</title></head></html>".to_vec()).is_ok());
    }

    #[test]
    fn test_append_inserts_before_head_end() {
        let mut page = Page::parse(
            "u",
            b"<html><head><title>t</title></head><body><p>x</p></body></html>".to_vec(),
        )
        .unwrap();
        page.append_to_head(HeadNode::json_ld(r#"{"a":1}"#.into()));

        assert_eq!(
            render_str(&page),
            r#"<html><head><title>t</title><script type="application/ld+json" data-ldpost="">{"a":1}</script></head><body><p>x</p></body></html>"#
        );
    }

    #[test]
    fn test_remove_from_head() {
        let mut page = Page::blank("u");
        let first = page.append_to_head(HeadNode::json_ld("1".into()));
        let second = page.append_to_head(HeadNode::json_ld("2".into()));
        assert_ne!(first, second);

        assert!(page.remove_from_head(first));
        assert!(!page.remove_from_head(first));
        assert!(!page.is_attached(first));
        assert!(page.is_attached(second));

        let bodies: Vec<_> = page.head_nodes().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, ["2"]);
    }

    #[test]
    fn test_render_drops_marked_scripts_from_source() {
        let source = concat!(
            "<html><head>",
            r#"<script type="application/ld+json">{"keep":true}</script>"#,
            r#"<script type="application/ld+json" data-ldpost="">{"old":true}</script>"#,
            "</head><body></body></html>"
        );
        let mut page = Page::parse("u", source.as_bytes().to_vec()).unwrap();
        page.append_to_head(HeadNode::json_ld(r#"{"new":true}"#.into()));

        let html = render_str(&page);
        assert!(html.contains(r#"{"keep":true}"#));
        assert!(!html.contains(r#"{"old":true}"#));
        assert_eq!(html.matches("data-ldpost").count(), 1);
        assert!(html.contains(r#"{"new":true}"#));
    }

    #[test]
    fn test_head_end_inside_inline_script_is_text() {
        let script = "<script>if (a<b && c>d) { x = '</head>'; }</script>";
        let source = format!(
            r#"<html><head><meta charset="utf-8">{script}</head><body></body></html>"#
        );
        let mut page = Page::parse("u", source.into_bytes()).unwrap();
        page.append_to_head(HeadNode::json_ld("{}".into()));

        let html = render_str(&page);
        assert_eq!(html.matches("data-ldpost").count(), 1);
        assert!(html.contains(script));
        assert!(html.ends_with(
            r#"</script><script type="application/ld+json" data-ldpost="">{}</script></head><body></body></html>"#
        ));
    }

    #[test]
    fn test_style_body_is_copied_verbatim() {
        let source = "<html><head><style>a > b { content: \"</head>&amp;\" }</style></head><body></body></html>";
        let mut page = Page::parse("u", source.as_bytes().to_vec()).unwrap();
        page.append_to_head(HeadNode::json_ld("{}".into()));

        let html = render_str(&page);
        assert!(html.contains("<style>a > b { content: \"</head>&amp;\" }</style>"));
        assert_eq!(html.matches("data-ldpost").count(), 1);
    }

    #[test]
    fn test_uppercase_tags() {
        let source = "<HTML><HEAD><TITLE>t</TITLE></HEAD><BODY></BODY></HTML>";
        let mut page = Page::parse("u", source.as_bytes().to_vec()).unwrap();
        page.append_to_head(HeadNode::json_ld("{}".into()));

        assert_eq!(
            render_str(&page),
            r#"<HTML><HEAD><TITLE>t</TITLE><script type="application/ld+json" data-ldpost="">{}</script></HEAD><BODY></BODY></HTML>"#
        );
    }

    #[test]
    fn test_unclosed_head_inserts_before_body() {
        let source = "<html><head><meta charset=utf-8><title>t</title><body><p>x</p></body></html>";
        let mut page = Page::parse("u", source.as_bytes().to_vec()).unwrap();
        page.append_to_head(HeadNode::json_ld("{}".into()));

        let html = render_str(&page);
        assert!(html.contains(
            r#"<title>t</title><script type="application/ld+json" data-ldpost="">{}</script><body><p>x</p>"#
        ));
        assert_eq!(html.matches("data-ldpost").count(), 1);
    }

    #[test]
    fn test_marked_script_in_any_case_is_dropped() {
        let source = r#"<html><head><SCRIPT type="application/ld+json" data-ldpost="">{"old":true}</SCRIPT></head><body></body></html>"#;
        let page = Page::parse("u", source.as_bytes().to_vec()).unwrap();
        assert!(!render_str(&page).contains("old"));
    }

    #[test]
    fn test_render_keeps_doctype_and_void_elements() {
        let source = r#"<!DOCTYPE html><html><head><meta charset="utf-8"/></head><body><br/></body></html>"#;
        let page = Page::parse("u", source.as_bytes().to_vec()).unwrap();
        let html = render_str(&page);
        assert!(html.contains("DOCTYPE html"));
        assert!(html.contains(r#"<meta charset="utf-8"/>"#));
        assert!(html.contains("<body><br/></body>"));
    }
}
