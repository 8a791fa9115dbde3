//! Output backends for code generation.
//!
//! Each backend takes a named-schema mapping and produces code. Backends
//! implement the [`Backend`](crate::traits::Backend) trait for uniform
//! access.

pub mod python;

pub use python::{PythonBackend, PythonOptions, generate_python_types};
