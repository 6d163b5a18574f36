//! Protobuf scalar -> TypeScript type mapping.

/// The protobuf scalar vocabulary the mapper is total over.
pub const SCALAR_TYPES: &[&str] = &[
    "double", "float", "int32", "int64", "uint32", "uint64", "sint32", "sint64", "fixed32",
    "fixed64", "sfixed32", "sfixed64", "bool", "string", "bytes",
];

/// Map a schema type name to a TypeScript type.
///
/// Scalars go through a fixed table; any other name is treated as a
/// reference to a message or enum and passes through unchanged, so
/// forward and cross-file references never fail. `repeated` wraps the
/// mapped base type in array notation.
///
/// # Examples
///
/// ```
/// use protots_core::map_type;
///
/// assert_eq!(map_type("int32", false), "number");
/// assert_eq!(map_type("string", true), "string[]");
/// assert_eq!(map_type("ListRequest", false), "ListRequest");
/// assert_eq!(map_type("a.b.Item", true), "a.b.Item[]");
/// ```
pub fn map_type(schema_type: &str, repeated: bool) -> String {
    let base = scalar(schema_type).unwrap_or(schema_type);
    if repeated {
        array_of(base)
    } else {
        base.to_string()
    }
}

/// Wrap a TypeScript type in array notation.
pub fn array_of(base: &str) -> String {
    format!("{base}[]")
}

/// Fixed scalar table. All integer and float widths collapse to
/// `number`; 64-bit values wider than 2^53 lose precision, which
/// matches the protobuf JSON mapping callers already live with.
fn scalar(schema_type: &str) -> Option<&'static str> {
    match schema_type {
        "double" | "float" | "int32" | "int64" | "uint32" | "uint64" | "sint32" | "sint64"
        | "fixed32" | "fixed64" | "sfixed32" | "sfixed64" => Some("number"),
        "bool" => Some("boolean"),
        "string" => Some("string"),
        "bytes" => Some("Uint8Array"),
        _ => None,
    }
}
