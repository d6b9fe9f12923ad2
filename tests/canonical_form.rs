use canonxml::canon::{DROP_TAGS, Element, local_name, should_drop_attribute};
use canonxml::canonicalize_xml_bytes;

const SAMPLES: &[&str] = &[
    "<w:p w:rsidR=\"001\" w:paraId=\"002\" data=\"x\"><w:t>a\r\nb</w:t></w:p>",
    r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>Microsoft Word</Application><TotalTime>12</TotalTime><Pages>2</Pages><company>ACME</company></Properties>"#,
    r#"<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" office:version="1.3"><office:body><office:text><text:p text:style-name="P1" xml:id="par1">Uno&#13;
dos</text:p><meta><dc:title>Borrador</dc:title><meta:creation-date>2024-01-01</meta:creation-date></meta></office:text></office:body></office:document-content>"#,
    "<root z=\"1\" a=\"2\"><a><b><c><lastModifiedBy foo=\"bar\"><x/></lastModifiedBy></c></b></a><revision>7</revision>fin</root>",
];

fn canonical(xml: &str) -> Vec<u8> {
    canonicalize_xml_bytes(xml.as_bytes()).expect("XML de prueba válido")
}

#[test]
fn canonical_form_is_a_fixed_point() {
    for sample in SAMPLES {
        let once = canonical(sample);
        assert_eq!(canonical(sample), once);
        assert_eq!(canonicalize_xml_bytes(&once).unwrap(), once);
    }
}

#[test]
fn canonical_form_has_no_noise_and_sorted_attributes() {
    for sample in SAMPLES {
        let output = canonical(sample);
        let text = String::from_utf8(output.clone()).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(!text.contains("\r\n"));

        let root = Element::parse(&output).unwrap();
        for (depth, element) in root.descendants().into_iter().enumerate() {
            if depth > 0 {
                assert!(!DROP_TAGS.contains(&local_name(&element.name)));
            }
            let names: Vec<&str> = element.attributes.iter().map(|(k, _)| k.as_str()).collect();
            assert!(names.windows(2).all(|pair| pair[0] < pair[1]), "{names:?}");
            assert!(names.iter().all(|name| !should_drop_attribute(name)));
        }
    }
}

#[test]
fn last_modified_by_subtree_vanishes_wherever_it_is() {
    let output = String::from_utf8(canonical(SAMPLES[3])).unwrap();
    assert_eq!(
        output,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root a=\"2\" z=\"1\"><a><b><c/></b></a></root>"
    );
}

#[test]
fn capitalized_application_fields_are_not_noise() {
    let output = String::from_utf8(canonical(SAMPLES[1])).unwrap();
    assert!(output.contains("<Application>Microsoft Word</Application>"));
    assert!(output.contains("<TotalTime>12</TotalTime>"));
    assert!(!output.contains("ACME"));
}

#[test]
fn open_document_keeps_content_and_drops_xml_ids() {
    let output = String::from_utf8(canonical(SAMPLES[2])).unwrap();
    assert!(output.contains("<text:p text:style-name=\"P1\">Uno\ndos</text:p>"));
    assert!(!output.contains("par1"));
    assert!(!output.contains("Borrador"));
    assert!(output.contains("<meta:creation-date>2024-01-01</meta:creation-date>"));
}

#[test]
fn namespace_declarations_keep_their_prefixes_bound() {
    let output = String::from_utf8(canonical(
        "<a xmlns:id=\"urn:x\" xmlns:rsid=\"urn:y\" id:rsidR=\"1\"><id:foo/><rsid:bar/></a>",
    ))
    .unwrap();
    assert_eq!(
        output,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a xmlns:id=\"urn:x\" xmlns:rsid=\"urn:y\"><id:foo/><rsid:bar/></a>"
    );
}
