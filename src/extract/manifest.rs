//! Miembros XML que se extraen de cada tipo de documento ofimático.

use std::collections::HashSet;

use super::kind::OfficeKind;

pub const WORD_MEMBERS: [&str; 13] = [
    "word/document.xml",
    "word/styles.xml",
    "word/numbering.xml",
    "word/footnotes.xml",
    "word/endnotes.xml",
    "word/settings.xml",
    "word/comments.xml",
    "word/header1.xml",
    "word/header2.xml",
    "word/header3.xml",
    "word/footer1.xml",
    "word/footer2.xml",
    "word/footer3.xml",
];

pub const WORKBOOK_MEMBERS: [&str; 3] = ["xl/workbook.xml", "xl/sharedStrings.xml", "xl/styles.xml"];

/// Directorios de hojas y tablas; se toma todo `.xml` que cuelgue de ellos.
pub const WORKBOOK_PART_DIRS: [&str; 2] = ["xl/worksheets/", "xl/tables/"];

pub const OPEN_DOCUMENT_MEMBERS: [&str; 3] = ["content.xml", "styles.xml", "settings.xml"];

/// Calcula, en orden y sin repetidos, los miembros presentes que se extraerán.
pub fn resolve_manifest(kind: OfficeKind, members: &[String]) -> Vec<String> {
    let mut wanted: Vec<&str> = match kind {
        OfficeKind::WordProcessor => WORD_MEMBERS.to_vec(),
        OfficeKind::Spreadsheet => WORKBOOK_MEMBERS.to_vec(),
        OfficeKind::OpenDocumentText | OfficeKind::OpenDocumentSheet => {
            OPEN_DOCUMENT_MEMBERS.to_vec()
        }
    };

    if kind == OfficeKind::Spreadsheet {
        for dir in WORKBOOK_PART_DIRS {
            wanted.extend(
                members
                    .iter()
                    .map(String::as_str)
                    .filter(|name| name.starts_with(dir) && name.ends_with(".xml")),
            );
        }
    }

    let present: HashSet<&str> = members.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    wanted
        .into_iter()
        .filter(|name| present.contains(name) && seen.insert(*name))
        .map(str::to_string)
        .collect()
}
