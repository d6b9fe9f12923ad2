//! Forma canónica de documentos XML para comparar revisiones byte a byte.

mod clean;
mod emit;
mod rules;
mod tree;

pub use clean::{clean_element, sort_attributes};
pub use emit::write_document;
pub use rules::{
    DROP_ATTRIBUTES, DROP_TAGS, is_namespace_declaration, local_name, should_drop_attribute,
    should_drop_tag,
};
pub use tree::Element;

use crate::error::CanonError;

/// Aplica poda, orden de atributos y serialización a un árbol ya construido.
pub fn canonicalize_element(mut root: Element) -> Result<Vec<u8>, CanonError> {
    clean_element(&mut root);
    sort_attributes(&mut root);
    write_document(&root)
}

/// Convierte bytes XML en su forma canónica.
pub fn canonicalize_xml_bytes(xml: &[u8]) -> Result<Vec<u8>, CanonError> {
    canonicalize_element(Element::parse(xml)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n\
<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\" \
xmlns:w14=\"http://schemas.microsoft.com/office/word/2010/wordml\">\r\n\
  <w:body>\r\n\
    <w:p w14:paraId=\"1A2B3C4D\" w14:textId=\"77777777\" w:rsidR=\"00A1\" w:rsidRDefault=\"00A1\">\
<w:pPr><w:jc w:val=\"center\"/></w:pPr><w:r w:rsidRPr=\"0042\"><w:t xml:space=\"preserve\">Hola\r\nmundo</w:t></w:r></w:p>\r\n\
    <w:sectPr w:rsidSect=\"00B2\"><w:pgSz w:h=\"16838\" w:w=\"11906\"/></w:sectPr>\r\n\
  </w:body>\r\n\
</w:document>\r\n";

    fn canonical(xml: &str) -> String {
        String::from_utf8(canonicalize_xml_bytes(xml.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn paragraph_loses_session_ids_and_crlf() {
        let output = canonical("<w:p w:rsidR=\"001\" w:paraId=\"002\" data=\"x\"><w:t>a\r\nb</w:t></w:p>");
        assert_eq!(
            output,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<w:p data=\"x\"><w:t>a\nb</w:t></w:p>"
        );
    }

    #[test]
    fn canonicalization_is_deterministic_and_idempotent() {
        let first = canonicalize_xml_bytes(DOCUMENT_XML.as_bytes()).unwrap();
        let second = canonicalize_xml_bytes(DOCUMENT_XML.as_bytes()).unwrap();
        assert_eq!(first, second);

        let again = canonicalize_xml_bytes(&first).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn output_has_no_noise_and_sorted_attributes() {
        let output = canonical(DOCUMENT_XML);

        for noise in ["rsid", "paraId", "textId", "\r\n"] {
            assert!(!output.contains(noise), "la salida contiene {noise:?}");
        }
        assert!(output.contains("<w:t xml:space=\"preserve\">Hola\nmundo</w:t>"));
        assert!(output.contains("<w:pgSz w:h=\"16838\" w:w=\"11906\"/>"));

        let root = Element::parse(output.as_bytes()).unwrap();
        for element in root.descendants() {
            let names: Vec<&String> = element.attributes.iter().map(|(k, _)| k).collect();
            assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn core_properties_lose_every_volatile_field() {
        let core = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/">
<dc:creator>Autor Prueba</dc:creator><cp:lastModifiedBy>Editor</cp:lastModifiedBy><dcterms:created>2024-01-01T00:00:00Z</dcterms:created><cp:revision>6</cp:revision><cp:category>Informe</cp:category></cp:coreProperties>"#;
        let output = canonical(core);

        assert!(!output.contains("Autor Prueba"));
        assert!(!output.contains("revision"));
        assert!(output.contains("<cp:category>Informe</cp:category>"));
    }

    #[test]
    fn malformed_input_is_reported() {
        assert!(matches!(
            canonicalize_xml_bytes(b"PK\x03\x04 binario"),
            Err(CanonError::Parse { .. } | CanonError::NotUtf8(_))
        ));
    }
}
