//! Reglas estáticas que identifican nodos y atributos volátiles.
//!
//! Las etiquetas listadas corresponden a metadata que cambia en cada guardado
//! (fechas, autoría, revisiones) y se descartan con todo su subárbol. Los
//! atributos son identificadores de sesión de edición que no aportan contenido.

use regex::Regex;
use std::sync::LazyLock;

/// Nombres locales de elementos que se eliminan junto con su subárbol.
pub const DROP_TAGS: [&str; 15] = [
    "created",
    "modified",
    "lastPrinted",
    "revision",
    "totalTime",
    "creator",
    "lastModifiedBy",
    "keywords",
    "description",
    "subject",
    "title",
    "application",
    "appVersion",
    "company",
    "manager",
];

/// Nombres locales exactos de atributos que se eliminan.
pub const DROP_ATTRIBUTES: [&str; 10] = [
    "id",
    "Id",
    "ID",
    "rsid",
    "rsidR",
    "rsidRDefault",
    "rsidP",
    "rsidRPr",
    "paraId",
    "textId",
];

static DROP_ATTRIBUTE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)^.*rsid.*$").expect("patrón rsid válido"),
        Regex::new(r"(?i)^.*paraId.*$").expect("patrón paraId válido"),
        Regex::new(r"(?i)^.*textId.*$").expect("patrón textId válido"),
    ]
});

/// Devuelve el nombre local de un nombre cualificado.
///
/// Acepta tanto la forma `{namespace}local` como `prefijo:local`.
pub fn local_name(name: &str) -> &str {
    if let Some((_, local)) = name.split_once('}') {
        return local;
    }
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

/// Indica si un elemento debe eliminarse con todo su contenido.
pub fn should_drop_tag(name: &str) -> bool {
    DROP_TAGS.contains(&local_name(name))
}

/// Indica si el atributo declara un espacio de nombres (`xmlns` o `xmlns:p`).
pub fn is_namespace_declaration(name: &str) -> bool {
    name == "xmlns" || name.starts_with("xmlns:")
}

/// Indica si un atributo es ruido y debe eliminarse.
///
/// Las declaraciones de espacio de nombres nunca lo son, aunque el prefijo
/// declarado coincida con un nombre volátil.
pub fn should_drop_attribute(name: &str) -> bool {
    if is_namespace_declaration(name) {
        return false;
    }
    let local = local_name(name);
    DROP_ATTRIBUTES.contains(&local)
        || DROP_ATTRIBUTE_PATTERNS
            .iter()
            .any(|pattern| pattern.is_match(local))
}
