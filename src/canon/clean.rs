//! Poda de ruido y ordenación de atributos sobre un árbol ya construido.

use super::rules::{should_drop_attribute, should_drop_tag};
use super::tree::Element;

/// Elimina atributos y subárboles volátiles y normaliza los saltos de línea.
///
/// La raíz nunca se descarta por su nombre; solo sus descendientes.
pub fn clean_element(element: &mut Element) {
    element
        .attributes
        .retain(|(name, _)| !should_drop_attribute(name));

    let children = std::mem::take(&mut element.children);
    element.children = children
        .into_iter()
        .filter(|child| !should_drop_tag(&child.name))
        .map(|mut child| {
            clean_element(&mut child);
            child
        })
        .collect();

    normalize_newlines(&mut element.text);
    normalize_newlines(&mut element.tail);
}

/// Ordena los atributos de cada elemento por nombre, de forma recursiva.
pub fn sort_attributes(element: &mut Element) {
    element.attributes.sort_by(|a, b| a.0.cmp(&b.0));
    for child in &mut element.children {
        sort_attributes(child);
    }
}

fn normalize_newlines(content: &mut Option<String>) {
    if let Some(value) = content
        && value.contains("\r\n")
    {
        *value = value.replace("\r\n", "\n");
    }
}
