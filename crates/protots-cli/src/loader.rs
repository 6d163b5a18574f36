//! External schema loading: `.proto` file -> schema tree.
//!
//! protox compiles the file (with source info, so doc comments survive)
//! into a `prost-types` descriptor set; this module converts the
//! descriptors into the node-variant tree the generators consume. The
//! core crate never sees a descriptor type.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
    MethodDescriptorProto, ServiceDescriptorProto, SourceCodeInfo,
};
use protots_core::{EnumDecl, EnumValue, Field, Message, Method, Namespace, SchemaNode, Service};

/// Leading comments keyed by descriptor path (see `SourceCodeInfo`).
type CommentMap = HashMap<Vec<i32>, String>;

// FileDescriptorProto field numbers used as comment-path segments.
const FILE_MESSAGE: i32 = 4;
const FILE_ENUM: i32 = 5;
const FILE_SERVICE: i32 = 6;
const MESSAGE_FIELD: i32 = 2;
const MESSAGE_NESTED: i32 = 3;
const MESSAGE_ENUM: i32 = 4;
const SERVICE_METHOD: i32 = 2;

/// Compile one `.proto` file and convert it into a schema tree.
///
/// The file's parent directory is the include root, so sibling imports
/// resolve. Returns an unnamed root namespace whose children are the
/// package namespace chain (or the file's declarations directly when
/// the file has no package).
pub fn load_schema(path: &Path) -> Result<Namespace> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("input path has no file name: {}", path.display()))?;

    let mut compiler = protox::Compiler::new([parent])
        .with_context(|| format!("failed to initialize compiler for {}", path.display()))?;
    compiler.include_source_info(true);
    compiler.include_imports(true);
    compiler
        .open_file(file_name)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let set = compiler.file_descriptor_set();
    let file = set
        .file
        .iter()
        .find(|file| file.name() == file_name)
        .with_context(|| format!("descriptor set is missing {file_name}"))?;

    Ok(build_tree(file))
}

/// Convert one file descriptor into the schema tree.
fn build_tree(file: &FileDescriptorProto) -> Namespace {
    let comments = comment_map(file.source_code_info.as_ref());
    let package = file.package();

    let mut children = Vec::new();
    for (i, message) in file.message_type.iter().enumerate() {
        push_message(&mut children, message, package, &[FILE_MESSAGE, i as i32], &comments);
    }
    for (i, decl) in file.enum_type.iter().enumerate() {
        children.push(SchemaNode::Enum(convert_enum(
            decl,
            &[FILE_ENUM, i as i32],
            &comments,
        )));
    }
    for (i, svc) in file.service.iter().enumerate() {
        children.push(SchemaNode::Service(convert_service(
            svc,
            package,
            &[FILE_SERVICE, i as i32],
            &comments,
        )));
    }

    let mut root = Namespace::default();
    if package.is_empty() {
        root.children = children;
        return root;
    }

    // Wrap the declarations in one namespace per package segment,
    // innermost first.
    let mut segments = package.split('.').rev();
    let mut node = Namespace {
        name: segments.next().unwrap_or_default().to_string(),
        children,
    };
    for segment in segments {
        node = Namespace {
            name: segment.to_string(),
            children: vec![SchemaNode::Namespace(node)],
        };
    }
    root.children.push(SchemaNode::Namespace(node));
    root
}

/// Convert a message and surface its nested declarations.
///
/// Nested messages and enums land in a sibling namespace named after the
/// enclosing message, so dotted references like `Outer.Inner` resolve in
/// the emitted TypeScript. Synthetic map-entry types are skipped.
fn push_message(
    out: &mut Vec<SchemaNode>,
    desc: &DescriptorProto,
    package: &str,
    path: &[i32],
    comments: &CommentMap,
) {
    out.push(SchemaNode::Message(convert_message(
        desc, package, path, comments,
    )));

    let mut nested = Vec::new();
    for (i, inner) in desc.nested_type.iter().enumerate() {
        if inner.options.as_ref().is_some_and(|opts| opts.map_entry()) {
            continue;
        }
        let mut inner_path = path.to_vec();
        inner_path.extend([MESSAGE_NESTED, i as i32]);
        push_message(&mut nested, inner, package, &inner_path, comments);
    }
    for (i, decl) in desc.enum_type.iter().enumerate() {
        let mut decl_path = path.to_vec();
        decl_path.extend([MESSAGE_ENUM, i as i32]);
        nested.push(SchemaNode::Enum(convert_enum(decl, &decl_path, comments)));
    }

    if !nested.is_empty() {
        out.push(SchemaNode::Namespace(Namespace {
            name: desc.name().to_string(),
            children: nested,
        }));
    }
}

fn convert_message(
    desc: &DescriptorProto,
    package: &str,
    path: &[i32],
    comments: &CommentMap,
) -> Message {
    let fields = desc
        .field
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let mut field_path = path.to_vec();
            field_path.extend([MESSAGE_FIELD, i as i32]);
            convert_field(field, package, &field_path, comments)
        })
        .collect();

    Message {
        name: desc.name().to_string(),
        doc: comments.get(path).cloned(),
        fields,
    }
}

fn convert_field(
    field: &FieldDescriptorProto,
    package: &str,
    path: &[i32],
    comments: &CommentMap,
) -> Field {
    Field {
        name: field.name().to_string(),
        type_name: field_type_name(field, package),
        repeated: field.label() == Label::Repeated,
        // Only the proto2 `required` label drops the optionality marker;
        // proto3 fields are all emitted as optional.
        required: field.label() == Label::Required,
        doc: comments.get(path).cloned(),
    }
}

/// Schema type name for a field: the proto scalar keyword, or the
/// package-relative reference for message/enum/group types.
fn field_type_name(field: &FieldDescriptorProto, package: &str) -> String {
    match field.r#type() {
        Type::Message | Type::Enum | Type::Group => trim_reference(field.type_name(), package),
        Type::Double => "double".to_string(),
        Type::Float => "float".to_string(),
        Type::Int64 => "int64".to_string(),
        Type::Uint64 => "uint64".to_string(),
        Type::Int32 => "int32".to_string(),
        Type::Fixed64 => "fixed64".to_string(),
        Type::Fixed32 => "fixed32".to_string(),
        Type::Bool => "bool".to_string(),
        Type::String => "string".to_string(),
        Type::Bytes => "bytes".to_string(),
        Type::Uint32 => "uint32".to_string(),
        Type::Sfixed32 => "sfixed32".to_string(),
        Type::Sfixed64 => "sfixed64".to_string(),
        Type::Sint32 => "sint32".to_string(),
        Type::Sint64 => "sint64".to_string(),
    }
}

/// Strip the leading dot and the file's own package prefix from a fully
/// qualified type reference. References into other packages keep their
/// dotted path and pass through the type mapper unchanged.
fn trim_reference(fq_name: &str, package: &str) -> String {
    let name = fq_name.strip_prefix('.').unwrap_or(fq_name);
    if !package.is_empty() {
        if let Some(local) = name.strip_prefix(package).and_then(|n| n.strip_prefix('.')) {
            return local.to_string();
        }
    }
    name.to_string()
}

fn convert_enum(desc: &EnumDescriptorProto, path: &[i32], comments: &CommentMap) -> EnumDecl {
    EnumDecl {
        name: desc.name().to_string(),
        doc: comments.get(path).cloned(),
        values: desc
            .value
            .iter()
            .map(|value| EnumValue {
                name: value.name().to_string(),
                number: value.number(),
            })
            .collect(),
    }
}

fn convert_service(
    desc: &ServiceDescriptorProto,
    package: &str,
    path: &[i32],
    comments: &CommentMap,
) -> Service {
    let methods = desc
        .method
        .iter()
        .enumerate()
        .map(|(i, method)| {
            let mut method_path = path.to_vec();
            method_path.extend([SERVICE_METHOD, i as i32]);
            convert_method(method, package, &method_path, comments)
        })
        .collect();

    Service {
        name: desc.name().to_string(),
        doc: comments.get(path).cloned(),
        methods,
    }
}

fn convert_method(
    method: &MethodDescriptorProto,
    package: &str,
    path: &[i32],
    comments: &CommentMap,
) -> Method {
    Method {
        name: method.name().to_string(),
        request_type: trim_reference(method.input_type(), package),
        response_type: trim_reference(method.output_type(), package),
        request_stream: method.client_streaming(),
        response_stream: method.server_streaming(),
        doc: comments.get(path).cloned(),
    }
}

/// Index leading doc comments by descriptor path.
fn comment_map(info: Option<&SourceCodeInfo>) -> CommentMap {
    let mut map = CommentMap::new();
    let Some(info) = info else {
        return map;
    };

    for location in &info.location {
        if let Some(raw) = &location.leading_comments {
            let text = normalize_comment(raw);
            if !text.is_empty() {
                map.insert(location.path.clone(), text);
            }
        }
    }
    map
}

/// Strip the single leading space protoc-style comments carry per line
/// and drop surrounding blank lines.
fn normalize_comment(raw: &str) -> String {
    let lines: Vec<&str> = raw
        .lines()
        .map(|line| line.strip_prefix(' ').unwrap_or(line).trim_end())
        .collect();
    lines.join("\n").trim_matches('\n').to_string()
}
