//! Python typing backend.
//!
//! Renders TypeBox-style schema nodes to `typing` expressions and assembles
//! whole modules of `Name = <type>` declarations. Rendering is a pure
//! depth-first walk; the only configuration is the target Python version
//! fixed at construction.

use indexmap::IndexMap;
use serde_json::Value;

use crate::kind::{Kind, capitalize, resolve_kind, strip_optional};
use crate::traits::Backend;
use crate::version::{TargetVersion, VersionError};

/// Fallback for nodes whose kind cannot be resolved.
const ANY: &str = "typing.Any";

/// Options for Python type generation.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PythonOptions {
    /// Python version the emitted module targets. Defaults to 3.10.0.
    pub target_version: TargetVersion,
}

/// Python type declaration generator.
#[derive(Debug, Clone, Default)]
pub struct PythonBackend {
    options: PythonOptions,
}

impl PythonBackend {
    pub fn new(options: PythonOptions) -> Self {
        Self { options }
    }

    /// Build a backend targeting the given Python version string.
    ///
    /// Fails if the string is not a `major.minor.patch` version.
    pub fn with_target_version(version: &str) -> Result<Self, VersionError> {
        Ok(Self::new(PythonOptions {
            target_version: TargetVersion::parse(version)?,
        }))
    }

    /// Render one schema node to a Python type expression.
    ///
    /// `name` is advisory: it labels nested anonymous types (TypedDict
    /// titles, `<name>.<key>` / `<name>.<i>` children) and need not be
    /// unique. Never fails; unresolvable nodes render as `typing.Any`.
    /// Recursion is unbounded, so the schema graph must be acyclic.
    //
    // TODO: support $ref nodes by emitting the referenced declaration name
    pub fn render_type(&self, name: &str, node: &Value) -> String {
        let Some(kind) = resolve_kind(node) else {
            return ANY.to_string();
        };

        match kind {
            Kind::String => "str".to_string(),
            Kind::Number => "float".to_string(),
            Kind::Integer => "int".to_string(),
            Kind::Boolean => "bool".to_string(),
            Kind::Null | Kind::Undefined => "None".to_string(),
            Kind::Literal => render_literal(node),
            Kind::Object => self.render_object(name, node),
            Kind::Array => {
                let items = node.get("items").unwrap_or(&Value::Null);
                format!("list[{}]", self.render_type(&format!("{name}.items"), items))
            }
            Kind::Union => {
                format!("typing.Union[\n{}\n]", self.render_members(name, node))
            }
            Kind::Enum => {
                format!("typing.Literal[\n{}\n]", self.render_members(name, node))
            }
            Kind::Optional => {
                let inner = self.render_type(name, &strip_optional(node));
                if self.options.target_version.needs_not_required_shim() {
                    format!("NotRequired[{inner}]")
                } else {
                    format!("typing.NotRequired[{inner}]")
                }
            }
            Kind::Record => {
                let value = node
                    .get("patternProperties")
                    .and_then(Value::as_object)
                    .and_then(|patterns| patterns.values().next());
                let rendered = match value {
                    Some(schema) => self.render_type(&format!("{name}.value"), schema),
                    None => ANY.to_string(),
                };
                format!("dict[str, {rendered}]")
            }
        }
    }

    fn render_object(&self, name: &str, node: &Value) -> String {
        let fields: Vec<String> = node
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(key, schema)| {
                        let child = self.render_type(&format!("{name}.{key}"), schema);
                        format!("'{key}': {child}")
                    })
                    .collect()
            })
            .unwrap_or_default();

        format!("typing.TypedDict('{name}',{{\n{}\n}})", fields.join(",\n"))
    }

    fn render_members(&self, name: &str, node: &Value) -> String {
        node.get("anyOf")
            .and_then(Value::as_array)
            .map(|members| {
                members
                    .iter()
                    .enumerate()
                    .map(|(i, member)| self.render_type(&format!("{name}.{i}"), member))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
            .join(",\n")
    }

    /// Assemble a complete module: import lines, then one declaration per
    /// entry in iteration order.
    pub fn generate_module(&self, schemas: &IndexMap<String, Value>) -> Vec<String> {
        let mut lines = vec!["import typing".to_string()];

        if self.options.target_version.needs_not_required_shim() {
            lines.push("from typing_extensions import NotRequired".to_string());
        }

        for (name, schema) in schemas {
            let decl = capitalize(name);
            let rendered = self.render_type(&decl, schema);
            lines.push(format!("{decl} = {rendered}"));
        }

        lines
    }
}

impl Backend for PythonBackend {
    fn name(&self) -> &'static str {
        "python"
    }

    fn language(&self) -> &'static str {
        "python"
    }

    fn extension(&self) -> &'static str {
        "py"
    }

    fn generate(&self, schemas: &IndexMap<String, Value>) -> String {
        self.generate_module(schemas).join("\n")
    }
}

/// Generate Python typing declarations from a named-schema mapping.
pub fn generate_python_types(
    schemas: &IndexMap<String, Value>,
    options: &PythonOptions,
) -> Vec<String> {
    PythonBackend::new(options.clone()).generate_module(schemas)
}

fn render_literal(node: &Value) -> String {
    match node.get("const") {
        Some(Value::String(s)) => format!("typing.Literal['{s}']"),
        Some(Value::Number(n)) => format!("typing.Literal[{n}]"),
        Some(Value::Bool(true)) => "typing.Literal[True]".to_string(),
        Some(Value::Bool(false)) => "typing.Literal[False]".to_string(),
        _ => ANY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn backend() -> PythonBackend {
        PythonBackend::default()
    }

    #[test]
    fn primitives() {
        let b = backend();
        assert_eq!(b.render_type("T", &json!({ "type": "string" })), "str");
        assert_eq!(b.render_type("T", &json!({ "type": "number" })), "float");
        assert_eq!(b.render_type("T", &json!({ "type": "integer" })), "int");
        assert_eq!(b.render_type("T", &json!({ "type": "boolean" })), "bool");
        assert_eq!(b.render_type("T", &json!({ "type": "null" })), "None");
        assert_eq!(b.render_type("T", &json!({ "kind": "UndefinedKind" })), "None");
    }

    #[test]
    fn string_literal_quoted_exactly_once() {
        let b = backend();
        let out = b.render_type("T", &json!({ "kind": "Literal", "const": "x" }));
        assert_eq!(out, "typing.Literal['x']");
        assert_eq!(out.matches('\'').count(), 2);
    }

    #[test]
    fn internal_quotes_pass_through_unescaped() {
        // documented existing behavior, not escaped
        let b = backend();
        let out = b.render_type("T", &json!({ "const": "it's" }));
        assert_eq!(out, "typing.Literal['it's']");
    }

    #[test]
    fn numeric_literal_stays_bare() {
        let b = backend();
        assert_eq!(b.render_type("T", &json!({ "const": 0 })), "typing.Literal[0]");
        assert_eq!(
            b.render_type("T", &json!({ "const": 2.5 })),
            "typing.Literal[2.5]"
        );
    }

    #[test]
    fn object_lists_properties_in_input_order() {
        let b = backend();
        let node = json!({
            "kind": "Object",
            "properties": {
                "a": { "type": "string" },
                "b": { "type": "integer" }
            }
        });
        assert_eq!(
            b.render_type("Pair", &node),
            "typing.TypedDict('Pair',{\n'a': str,\n'b': int\n})"
        );
    }

    #[test]
    fn object_without_properties_renders_empty_body() {
        let b = backend();
        assert_eq!(
            b.render_type("Empty", &json!({ "kind": "ObjectKind" })),
            "typing.TypedDict('Empty',{\n\n})"
        );
    }

    #[test]
    fn array_of_integers() {
        let b = backend();
        let node = json!({ "kind": "Array", "items": { "type": "integer" } });
        assert_eq!(b.render_type("Nums", &node), "list[int]");
    }

    #[test]
    fn array_missing_items_degrades_to_any() {
        let b = backend();
        assert_eq!(
            b.render_type("Nums", &json!({ "kind": "Array" })),
            "list[typing.Any]"
        );
    }

    #[test]
    fn union_preserves_member_order() {
        let b = backend();
        let node = json!({
            "kind": "Union",
            "anyOf": [{ "type": "string" }, { "type": "integer" }]
        });
        assert_eq!(
            b.render_type("Id", &node),
            "typing.Union[\nstr,\nint\n]"
        );
    }

    #[test]
    fn enum_is_a_literal_set() {
        let b = backend();
        let node = json!({
            "kind": "Enum",
            "anyOf": [{ "const": "on" }, { "const": "off" }]
        });
        assert_eq!(
            b.render_type("Switch", &node),
            "typing.Literal[\ntyping.Literal['on'],\ntyping.Literal['off']\n]"
        );
    }

    #[test]
    fn optional_wraps_inner_type() {
        let node = json!({ "modifier": "OptionalModifier", "type": "string" });

        let old = PythonBackend::with_target_version("3.10.0").unwrap();
        assert_eq!(old.render_type("T", &node), "NotRequired[str]");

        let new = PythonBackend::with_target_version("3.11.0").unwrap();
        assert_eq!(new.render_type("T", &node), "typing.NotRequired[str]");
    }

    #[test]
    fn record_uses_first_pattern_value() {
        let b = backend();
        let node = json!({
            "kind": "Record",
            "patternProperties": {
                "^.*$": { "type": "number" },
                "^x-": { "type": "string" }
            }
        });
        assert_eq!(b.render_type("Scores", &node), "dict[str, float]");
    }

    #[test]
    fn record_without_patterns_degrades_to_any() {
        let b = backend();
        assert_eq!(
            b.render_type("Scores", &json!({ "kind": "Record" })),
            "dict[str, typing.Any]"
        );
    }

    #[test]
    fn unresolvable_node_renders_any() {
        let b = backend();
        assert_eq!(b.render_type("T", &json!({})), ANY);
        assert_eq!(b.render_type("T", &json!({ "type": "wibble" })), ANY);
    }

    #[test]
    fn input_nodes_are_never_mutated() {
        let node = json!({ "modifier": "OptionalModifier", "type": "string" });
        let before = node.clone();
        backend().render_type("T", &node);
        assert_eq!(node, before);
    }

    #[test]
    fn module_declarations_are_capitalized_in_input_order() {
        let mut schemas = IndexMap::new();
        schemas.insert("zebra".to_string(), json!({ "type": "string" }));
        schemas.insert("alpha".to_string(), json!({ "type": "integer" }));

        let lines = PythonBackend::with_target_version("3.11.0")
            .unwrap()
            .generate_module(&schemas);
        assert_eq!(lines, ["import typing", "Zebra = str", "Alpha = int"]);
    }

    #[test]
    fn shim_import_tracks_target_version() {
        let schemas = IndexMap::from([("flag".to_string(), json!({ "type": "boolean" }))]);

        let old = PythonBackend::with_target_version("3.10.9").unwrap();
        assert_eq!(
            old.generate_module(&schemas),
            [
                "import typing",
                "from typing_extensions import NotRequired",
                "Flag = bool"
            ]
        );

        // shim is version-gated, not usage-gated: present even though no
        // Optional appears, absent at exactly 3.11.0
        let new = PythonBackend::with_target_version("3.11.0").unwrap();
        assert_eq!(new.generate_module(&schemas), ["import typing", "Flag = bool"]);
    }

    #[test]
    fn construction_rejects_bad_versions() {
        assert!(PythonBackend::with_target_version("not-a-version").is_err());
        assert!(PythonBackend::with_target_version("3.11.0").is_ok());
        assert!(PythonBackend::with_target_version("3.10.9").is_ok());
    }

    #[test]
    fn nested_composite_module() {
        let mut schemas = IndexMap::new();
        schemas.insert(
            "user".to_string(),
            json!({
                "kind": "Object",
                "properties": {
                    "id": { "type": "string" },
                    "tags": { "kind": "Array", "items": { "type": "string" } },
                    "nickname": { "modifier": "OptionalModifier", "type": "string" }
                }
            }),
        );
        schemas.insert(
            "id".to_string(),
            json!({
                "kind": "Union",
                "anyOf": [{ "type": "string" }, { "type": "integer" }]
            }),
        );

        let module = generate_python_types(&schemas, &PythonOptions::default()).join("\n");
        insta::assert_snapshot!(module, @r"
        import typing
        from typing_extensions import NotRequired
        User = typing.TypedDict('User',{
        'id': str,
        'tags': list[str],
        'nickname': NotRequired[str]
        })
        Id = typing.Union[
        str,
        int
        ]
        ");
    }
}
