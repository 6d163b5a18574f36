//! Message and enum declaration generation.
//!
//! Each function turns one schema node into one TypeScript declaration.
//! There are no error conditions at this layer: an empty field or value
//! list yields a valid empty declaration.

use crate::options::GenerationOptions;
use crate::schema::{EnumDecl, Message};
use crate::typemap::map_type;

/// Emit one data-structure declaration for a message.
///
/// Structural (`interface`) by default; nominal (`class`) when
/// `opts.emit_classes` is set. Both forms carry the identical member
/// list, only the declaration keyword differs.
pub fn emit_message(msg: &Message, opts: &GenerationOptions) -> String {
    let mut code = String::new();

    if opts.emit_comments {
        if let Some(doc) = &msg.doc {
            code.push_str(&doc_block(doc, ""));
        }
    }

    let keyword = if opts.emit_classes {
        "class"
    } else {
        "interface"
    };

    if msg.fields.is_empty() {
        code.push_str(&format!("export {} {} {{}}\n", keyword, msg.name));
        return code;
    }

    code.push_str(&format!("export {} {} {{\n", keyword, msg.name));

    for field in &msg.fields {
        if opts.emit_comments {
            if let Some(doc) = &field.doc {
                code.push_str(&doc_block(doc, "  "));
            }
        }

        let ts_type = map_type(&field.type_name, field.repeated);
        let marker = if field.required { "" } else { "?" };
        code.push_str(&format!("  {}{}: {};\n", field.name, marker, ts_type));
    }

    code.push_str("}\n");
    code
}

/// Emit one enumeration declaration.
///
/// Every value keeps its explicit integer; values are never renumbered
/// or assumed sequential.
pub fn emit_enum(decl: &EnumDecl, opts: &GenerationOptions) -> String {
    let mut code = String::new();

    if opts.emit_comments {
        if let Some(doc) = &decl.doc {
            code.push_str(&doc_block(doc, ""));
        }
    }

    if decl.values.is_empty() {
        code.push_str(&format!("export enum {} {{}}\n", decl.name));
        return code;
    }

    code.push_str(&format!("export enum {} {{\n", decl.name));
    for value in &decl.values {
        code.push_str(&format!("  {} = {},\n", value.name, value.number));
    }
    code.push_str("}\n");
    code
}

/// Render a doc comment as a `/** ... */` block at the given indent.
pub(crate) fn doc_block(doc: &str, indent: &str) -> String {
    let mut block = String::new();
    block.push_str(indent);
    block.push_str("/**\n");
    for line in doc.lines() {
        if line.is_empty() {
            block.push_str(&format!("{indent} *\n"));
        } else {
            block.push_str(&format!("{indent} * {line}\n"));
        }
    }
    block.push_str(indent);
    block.push_str(" */\n");
    block
}
