//! Serialización determinista del árbol canónico.

use std::borrow::Cow;

use quick_xml::Writer;
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;

use super::tree::Element;
use crate::error::CanonError;

/// Escribe la declaración UTF-8 seguida del árbol, sin indentación añadida.
pub fn write_document(root: &Element) -> Result<Vec<u8>, CanonError> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(serialization)?;
    writer
        .write_event(Event::Text(BytesText::from_escaped("\n")))
        .map_err(serialization)?;
    write_element(&mut writer, root)?;
    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), CanonError> {
    let escaped_values: Vec<String> = element
        .attributes
        .iter()
        .map(|(_, value)| escape_attribute(value))
        .collect();

    let mut start = BytesStart::new(element.name.as_str());
    for ((name, _), value) in element.attributes.iter().zip(&escaped_values) {
        start.push_attribute(Attribute {
            key: QName(name.as_bytes()),
            value: Cow::Borrowed(value.as_bytes()),
        });
    }

    let text = element.text.as_deref().filter(|text| !text.is_empty());
    if text.is_none() && element.children.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(serialization)?;
    } else {
        writer.write_event(Event::Start(start)).map_err(serialization)?;
        if let Some(text) = text {
            write_text(writer, text)?;
        }
        for child in &element.children {
            write_element(writer, child)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(element.name.as_str())))
            .map_err(serialization)?;
    }

    if let Some(tail) = element.tail.as_deref().filter(|tail| !tail.is_empty()) {
        write_text(writer, tail)?;
    }
    Ok(())
}

fn write_text(writer: &mut Writer<Vec<u8>>, content: &str) -> Result<(), CanonError> {
    let escaped = partial_escape(content);
    writer
        .write_event(Event::Text(BytesText::from_escaped(escaped)))
        .map_err(serialization)
}

// Los saltos y tabuladores se escriben como referencias para que una nueva
// lectura no los confunda con espacios.
fn escape_attribute(value: &str) -> String {
    escape(value)
        .replace('\t', "&#9;")
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
}

fn serialization(error: impl std::fmt::Display) -> CanonError {
    CanonError::Serialization(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(root: &Element) -> String {
        String::from_utf8(write_document(root).unwrap()).unwrap()
    }

    #[test]
    fn writes_declaration_and_compact_markup() {
        let mut root = Element::new("pdf");
        root.set_attribute("source", "a&b.pdf");
        let mut page = Element::new("page");
        page.set_attribute("index", "0");
        let mut line = Element::new("line");
        line.text = Some("1 < 2 & 3 > 0".to_string());
        page.children.push(line);
        root.children.push(page);
        root.children.push(Element::new("page"));

        assert_eq!(
            render(&root),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <pdf source=\"a&amp;b.pdf\"><page index=\"0\"><line>1 &lt; 2 &amp; 3 &gt; 0</line></page><page/></pdf>"
        );
    }

    #[test]
    fn keeps_text_and_tail_positions() {
        let root = Element::parse(b"<a>x<b>y</b>z<c/>w</a>").unwrap();
        assert!(render(&root).ends_with("<a>x<b>y</b>z<c/>w</a>"));
    }

    #[test]
    fn escapes_quotes_and_newlines_in_attribute_values() {
        let mut root = Element::new("a");
        root.set_attribute("v", "\"uno\"\ndos\t");
        let output = render(&root);
        assert!(output.ends_with("<a v=\"&quot;uno&quot;&#10;dos&#9;\"/>"));

        let reparsed = Element::parse(output.as_bytes()).unwrap();
        assert_eq!(reparsed.attribute("v"), Some("\"uno\"\ndos\t"));
    }
}
