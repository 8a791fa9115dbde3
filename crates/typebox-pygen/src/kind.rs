//! Schema kind resolution.
//!
//! TypeBox changed how it tags schema nodes across releases: older trees
//! carry a `modifier`/`kind` marker field whose token embeds a
//! `"Kind"`/`"Modifier"` suffix (`"StringKind"`, `"OptionalModifier"`),
//! newer trees just have a lowercase JSON Schema `type`. [`resolve_kind`]
//! normalizes all three encodings to one [`Kind`].

use serde_json::Value;

/// Canonical shape of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Undefined,
    Object,
    Array,
    Union,
    Enum,
    Literal,
    Optional,
    Record,
}

impl Kind {
    /// Look up a kind by its bare name (already suffix-stripped, capitalized).
    pub fn from_name(name: &str) -> Option<Kind> {
        Some(match name {
            "String" => Kind::String,
            "Number" => Kind::Number,
            "Integer" => Kind::Integer,
            "Boolean" => Kind::Boolean,
            "Null" => Kind::Null,
            "Undefined" => Kind::Undefined,
            "Object" => Kind::Object,
            "Array" => Kind::Array,
            "Union" => Kind::Union,
            "Enum" => Kind::Enum,
            "Literal" => Kind::Literal,
            "Optional" => Kind::Optional,
            "Record" => Kind::Record,
            _ => return None,
        })
    }
}

/// Resolve the kind of a schema node.
///
/// Resolution order, one tier wins, tiers never merge:
/// 1. a `const` field (any value, including `0`/`""`/`false`) forces
///    [`Kind::Literal`],
/// 2. a `modifier` marker naming a known kind (how `Optional` is tagged),
/// 3. a `kind` marker naming a known kind,
/// 4. the plain `type` field, capitalized (`"string"` → `String`).
///
/// A marker that is present but unrecognized falls through to the next
/// tier. Returns `None` for non-object nodes and nodes no tier resolves.
pub fn resolve_kind(node: &Value) -> Option<Kind> {
    let obj = node.as_object()?;

    if obj.contains_key("const") {
        return Some(Kind::Literal);
    }

    if let Some(kind) = marker_kind(obj.get("modifier")) {
        return Some(kind);
    }
    if let Some(kind) = marker_kind(obj.get("kind")) {
        return Some(kind);
    }

    obj.get("type")
        .and_then(Value::as_str)
        .and_then(|t| Kind::from_name(&capitalize(t)))
}

/// Shallow copy of `node` with the marker field that tagged it `Optional`
/// removed, so re-dispatch sees the wrapped type. Caller input is never
/// mutated.
pub fn strip_optional(node: &Value) -> Value {
    let mut obj = node.as_object().cloned().unwrap_or_default();
    if marker_kind(obj.get("modifier")) == Some(Kind::Optional) {
        obj.remove("modifier");
    } else if marker_kind(obj.get("kind")) == Some(Kind::Optional) {
        obj.remove("kind");
    }
    Value::Object(obj)
}

fn marker_kind(marker: Option<&Value>) -> Option<Kind> {
    marker
        .and_then(Value::as_str)
        .map(strip_marker_suffix)
        .and_then(Kind::from_name)
}

/// Drop the legacy `"Kind"`/`"Modifier"` suffix from a marker token.
fn strip_marker_suffix(token: &str) -> &str {
    token
        .strip_suffix("Kind")
        .or_else(|| token.strip_suffix("Modifier"))
        .unwrap_or(token)
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
