//! Traits for code generation backends.

use indexmap::IndexMap;
use serde_json::Value;

/// A code generation backend.
///
/// Backends transform a named-schema mapping into source code for a target
/// language. The mapping iterates in insertion order; declaration order in
/// the output mirrors it.
pub trait Backend {
    /// Unique backend identifier (e.g., "python").
    fn name(&self) -> &'static str;

    /// Target language.
    fn language(&self) -> &'static str;

    /// File extension for generated code (e.g., "py").
    fn extension(&self) -> &'static str;

    /// Generate a complete module from the named schemas.
    fn generate(&self, schemas: &IndexMap<String, Value>) -> String;
}
