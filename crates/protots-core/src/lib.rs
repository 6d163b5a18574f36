//! protots-core - Schema tree model and TypeScript generators
//!
//! This crate turns a parsed protobuf schema tree into TypeScript source
//! declarations. It is pure: no I/O, no parser dependency, and the same
//! tree with the same options always produces byte-identical output.
//!
//! The main pieces:
//! - [`SchemaNode`] and friends: the in-memory schema tree
//! - [`GenerationOptions`]: output configuration with documented defaults
//! - [`map_type`]: protobuf scalar -> TypeScript type mapping
//! - [`generate`]: the tree walker producing one output document
//!
//! Loading `.proto` files into a [`Namespace`] is the CLI crate's job;
//! this crate only consumes the tree.

mod declarations;
mod emitter;
mod naming;
mod options;
mod schema;
mod services;
mod typemap;

pub use declarations::{emit_enum, emit_message};
pub use emitter::generate;
pub use naming::to_camel_case;
pub use options::GenerationOptions;
pub use schema::{EnumDecl, EnumValue, Field, Message, Method, Namespace, SchemaNode, Service};
pub use services::emit_service;
pub use typemap::{array_of, map_type, SCALAR_TYPES};
