//! Generation configuration.

/// Options controlling what the generators emit.
///
/// Built once at the CLI boundary and passed by reference through the
/// whole pipeline; nothing downstream re-inspects raw flags.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Emit source doc comments as `/** ... */` blocks (default: true).
    pub emit_comments: bool,

    /// Emit `class` declarations instead of structural `interface`
    /// declarations (default: false). Field lists and types are
    /// identical in both forms.
    pub emit_classes: bool,

    /// Emit a client-facing interface per service alongside the
    /// server-facing one (default: true).
    pub emit_client_interfaces: bool,

    /// When set, restrict emission to the namespace subtree at this
    /// dotted path. An unresolvable path yields an empty document.
    pub package_filter: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            emit_comments: true,
            emit_classes: false,
            emit_client_interfaces: true,
            package_filter: None,
        }
    }
}
