//! Árbol XML mínimo con el modelo texto/cola y su lector basado en `quick-xml`.

use std::collections::HashMap;
use std::sync::LazyLock;

use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use regex::Regex;

use crate::error::CanonError;

static ENTITY_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!ENTITY\s+([^\s%"'>]+)\s+(?:"([^"]*)"|'([^']*)')\s*>"#)
        .expect("patrón de entidades válido")
});

/// Nodo XML con atributos ordenados, texto inicial, hijos y texto de cola.
///
/// `text` es el contenido previo al primer hijo; `tail` es el texto que sigue
/// al cierre del elemento dentro de su padre.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
    pub tail: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Element::default()
        }
    }

    /// Asigna un atributo, sustituyendo el valor si el nombre ya existe.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Recorre el árbol en preorden, incluido el propio elemento.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut found = vec![self];
        for child in &self.children {
            found.extend(child.descendants());
        }
        found
    }

    /// Construye el árbol a partir de bytes XML en UTF-8.
    ///
    /// Se ignoran los espacios iniciales y el BOM, la declaración, los
    /// comentarios y las instrucciones de procesamiento. Las secciones CDATA se
    /// incorporan como texto. Del DOCTYPE solo se toman las entidades internas
    /// con valor literal, que se expanden como texto.
    pub fn parse(bytes: &[u8]) -> Result<Element, CanonError> {
        let source = std::str::from_utf8(bytes)?
            .trim_start_matches(|c: char| c == '\u{feff}' || c.is_whitespace());
        let mut reader = Reader::from_str(source);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut entities: HashMap<String, String> = HashMap::new();

        loop {
            let position = reader.buffer_position() as u64;
            let event = reader
                .read_event()
                .map_err(|e| CanonError::parse(reader.error_position() as u64, e.to_string()))?;

            match event {
                Event::Start(start) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(CanonError::parse(position, "más de un elemento raíz"));
                    }
                    stack.push(open_element(&start, position)?);
                }
                Event::Empty(start) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(CanonError::parse(position, "más de un elemento raíz"));
                    }
                    let element = open_element(&start, position)?;
                    attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| CanonError::parse(position, "cierre sin apertura"))?;
                    attach(&mut stack, &mut root, element);
                }
                Event::Text(text) => {
                    let decoded = text
                        .decode()
                        .map_err(|e| CanonError::parse(position, e.to_string()))?;
                    let content =
                        unescape(&decoded).map_err(|e| CanonError::parse(position, e.to_string()))?;
                    push_text(&mut stack, &content, position)?;
                }
                Event::CData(cdata) => {
                    let bytes = cdata.into_inner();
                    let content = std::str::from_utf8(&bytes)?;
                    push_text(&mut stack, content, position)?;
                }
                Event::DocType(doctype) => {
                    let declaration = doctype
                        .decode()
                        .map_err(|e| CanonError::parse(position, e.to_string()))?;
                    entities.extend(declared_entities(&declaration, position)?);
                }
                Event::GeneralRef(reference) => {
                    let name = reference
                        .decode()
                        .map_err(|e| CanonError::parse(position, e.to_string()))?;
                    let resolved = resolve_reference(&name)
                        .or_else(|| entities.get(&*name).cloned())
                        .ok_or_else(|| {
                            CanonError::parse(position, format!("entidad desconocida &{name};"))
                        })?;
                    push_text(&mut stack, &resolved, position)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(CanonError::parse(
                reader.buffer_position() as u64,
                "documento truncado: hay etiquetas sin cerrar",
            ));
        }

        root.ok_or(CanonError::NoRoot)
    }
}

fn open_element(start: &BytesStart<'_>, position: u64) -> Result<Element, CanonError> {
    let mut element = Element::new(std::str::from_utf8(start.name().as_ref())?);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| CanonError::parse(position, e.to_string()))?;
        let key = std::str::from_utf8(attribute.key.as_ref())?;
        let raw = std::str::from_utf8(&attribute.value)?;
        let value = unescape(raw).map_err(|e| CanonError::parse(position, e.to_string()))?;
        if element.attribute(key).is_some() {
            return Err(CanonError::parse(
                position,
                format!("atributo duplicado {key}"),
            ));
        }
        element.attributes.push((key.to_string(), value.into_owned()));
    }
    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], content: &str, position: u64) -> Result<(), CanonError> {
    let Some(current) = stack.last_mut() else {
        if content.trim().is_empty() {
            return Ok(());
        }
        return Err(CanonError::parse(
            position,
            "texto fuera del elemento raíz",
        ));
    };

    let slot = match current.children.last_mut() {
        Some(last) => &mut last.tail,
        None => &mut current.text,
    };
    slot.get_or_insert_with(String::new).push_str(content);
    Ok(())
}

// Referencias de carácter y las cinco entidades predefinidas. Un código
// fuera de la producción `Char` de XML 1.0 no se resuelve.
fn resolve_reference(name: &str) -> Option<String> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return char::from_u32(code)
            .filter(|&c| is_xml_char(c))
            .map(String::from);
    }
    resolve_predefined_entity(name).map(str::to_string)
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Entidades generales internas declaradas en el DOCTYPE.
///
/// Solo se admiten valores literales; las referencias dentro del valor deben
/// ser de carácter o predefinidas. Las entidades externas y de parámetro se
/// ignoran, así que usarlas deja el documento con una entidad desconocida.
fn declared_entities(
    declaration: &str,
    position: u64,
) -> Result<HashMap<String, String>, CanonError> {
    let mut entities = HashMap::new();
    for captures in ENTITY_DECLARATION.captures_iter(declaration) {
        let Some(raw) = captures.get(2).or_else(|| captures.get(3)) else {
            continue;
        };
        let value = unescape(raw.as_str()).map_err(|e| CanonError::parse(position, e.to_string()))?;
        if value.contains(|c: char| !is_xml_char(c)) {
            return Err(CanonError::parse(
                position,
                format!("carácter no válido en la entidad {}", &captures[1]),
            ));
        }
        entities
            .entry(captures[1].to_string())
            .or_insert_with(|| value.into_owned());
    }
    Ok(entities)
}
