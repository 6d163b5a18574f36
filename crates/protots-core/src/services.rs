//! Service interface generation.

use crate::declarations::doc_block;
use crate::naming::to_camel_case;
use crate::options::GenerationOptions;
use crate::schema::{Method, Service};
use crate::typemap::map_type;

/// Emit the interfaces for one service.
///
/// Always emits the server-facing interface, named exactly after the
/// service. When `opts.emit_client_interfaces` is set, a client-facing
/// `<Name>Client` interface with the same method shapes follows;
/// otherwise it is omitted entirely. Method order matches declaration
/// order in the source.
pub fn emit_service(svc: &Service, opts: &GenerationOptions) -> String {
    let mut code = emit_interface(svc, &svc.name, opts);

    if opts.emit_client_interfaces {
        code.push('\n');
        code.push_str(&emit_interface(svc, &format!("{}Client", svc.name), opts));
    }

    code
}

fn emit_interface(svc: &Service, interface_name: &str, opts: &GenerationOptions) -> String {
    let mut code = String::new();

    if opts.emit_comments {
        if let Some(doc) = &svc.doc {
            code.push_str(&doc_block(doc, ""));
        }
    }

    if svc.methods.is_empty() {
        code.push_str(&format!("export interface {interface_name} {{}}\n"));
        return code;
    }

    code.push_str(&format!("export interface {interface_name} {{\n"));
    for method in &svc.methods {
        if opts.emit_comments {
            if let Some(doc) = &method.doc {
                code.push_str(&doc_block(doc, "  "));
            }
        }
        code.push_str(&format!("  {};\n", method_signature(method)));
    }
    code.push_str("}\n");
    code
}

/// Build one method signature.
///
/// The return shape depends only on `response_stream`: a stream becomes
/// `AsyncIterable<T>`, anything else a single deferred `Promise<T>`.
/// A streaming request keeps the plain request type reference as its
/// parameter type; the caller supplies a producer for it.
fn method_signature(method: &Method) -> String {
    let name = to_camel_case(&method.name);
    let request = map_type(&method.request_type, false);
    let response = map_type(&method.response_type, false);

    let return_type = if method.response_stream {
        format!("AsyncIterable<{response}>")
    } else {
        format!("Promise<{response}>")
    };

    format!("{name}(request: {request}): {return_type}")
}
