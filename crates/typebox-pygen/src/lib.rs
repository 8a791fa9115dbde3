//! Python typing declarations generated from TypeBox-style schemas.
//!
//! `typebox-pygen` converts a named mapping of schema nodes (the JSON tree
//! a runtime schema builder like TypeBox produces) into a Python module of
//! equivalent `typing` declarations.
//!
//! # Architecture
//!
//! ```text
//! Named schemas                Kind               Output
//! ─────────────────        ─────────────      ─────────────────
//! IndexMap<String,   ───>  resolve_kind  ───> PythonBackend
//!   serde_json::Value>     (kind.rs)          render_type / generate_module
//!                                             (output/python.rs)
//! ```
//!
//! Rendering is a depth-first walk over the schema tree: each node's kind
//! is normalized from the builder's marker fields (`modifier`, `kind`,
//! `type` — three encodings across builder releases), then dispatched to a
//! type expression, recursing into composite children. The whole run is
//! pure; the only configuration is the target Python version fixed at
//! construction, which decides where `NotRequired` is imported from.
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use serde_json::json;
//! use typebox_pygen::{PythonOptions, generate_python_types};
//!
//! let mut schemas = IndexMap::new();
//! schemas.insert(
//!     "user".to_string(),
//!     json!({
//!         "kind": "Object",
//!         "properties": {
//!             "id": { "type": "string" },
//!             "age": { "type": "integer" }
//!         }
//!     }),
//! );
//!
//! let lines = generate_python_types(&schemas, &PythonOptions::default());
//! assert_eq!(lines[0], "import typing");
//! // default target is 3.10.0, below the native-NotRequired threshold
//! assert_eq!(lines[1], "from typing_extensions import NotRequired");
//! assert!(lines[2].starts_with("User = typing.TypedDict('User',"));
//! ```

pub mod kind;
pub mod output;
pub mod traits;
pub mod version;

pub use kind::{Kind, resolve_kind, strip_optional};
pub use output::{PythonBackend, PythonOptions, generate_python_types};
pub use traits::Backend;
pub use version::{TargetVersion, VersionError};
