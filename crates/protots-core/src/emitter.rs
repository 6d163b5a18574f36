//! Tree walker assembling the output document.

use tracing::debug;

use crate::declarations::{emit_enum, emit_message};
use crate::options::GenerationOptions;
use crate::schema::{Namespace, SchemaNode};
use crate::services::emit_service;

/// Generate the full output document for one schema tree.
///
/// Walks `root` depth-first in pre-order and concatenates the
/// per-node declarations in traversal order, separated by blank lines.
/// Namespaces are structural grouping only and emit no text themselves.
///
/// When `opts.package_filter` is set, the walk starts at the resolved
/// subtree instead of `root`; an unresolvable path produces an empty
/// document, never an error.
pub fn generate(root: &Namespace, opts: &GenerationOptions) -> String {
    let start = match &opts.package_filter {
        Some(filter) => match root.resolve(filter) {
            Some(ns) => ns,
            None => {
                debug!(filter = %filter, "package filter did not resolve; emitting nothing");
                return String::new();
            }
        },
        None => root,
    };

    let fragments = walk(start, opts);
    fragments.join("\n")
}

/// Collect declaration fragments for one subtree.
///
/// Pure: returns owned text per node; the caller concatenates. No
/// deduplication or reordering happens here.
fn walk(ns: &Namespace, opts: &GenerationOptions) -> Vec<String> {
    let mut fragments = Vec::new();

    for child in &ns.children {
        match child {
            SchemaNode::Namespace(inner) => fragments.extend(walk(inner, opts)),
            SchemaNode::Message(msg) => fragments.push(emit_message(msg, opts)),
            SchemaNode::Enum(decl) => fragments.push(emit_enum(decl, opts)),
            SchemaNode::Service(svc) => fragments.push(emit_service(svc, opts)),
        }
    }

    fragments
}
