#![allow(non_snake_case)]
#![allow(clippy::unwrap_used)]

use super::*;
use std::fs;

const CATALOG: &str = r#"
    syntax = "proto3";
    package acme.catalog;

    message Item {
      string sku = 1;
      repeated string tags = 2;
    }

    service Catalog {
      rpc List(Item) returns (stream Item);
    }
"#;

const USERS: &str = r#"
    syntax = "proto2";

    message User {
      required string id = 1;
      repeated string tags = 2;
    }
"#;

fn fixture() -> (tempfile::TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().unwrap();
    let inputs_dir = dir.path().join("proto");
    fs::create_dir(&inputs_dir).unwrap();
    fs::write(inputs_dir.join("catalog.proto"), CATALOG).unwrap();
    fs::write(inputs_dir.join("users.proto"), USERS).unwrap();
    let inputs = vec![
        inputs_dir.join("catalog.proto"),
        inputs_dir.join("users.proto"),
    ];
    (dir, inputs)
}

#[test]
fn run_once___valid_inputs___one_output_per_input() {
    let (dir, inputs) = fixture();
    let out = dir.path().join("generated");

    let summary = run_once(&inputs, &out, &GenerationOptions::default()).unwrap();

    assert_eq!(summary, RunSummary { succeeded: 2, failed: 0 });
    let catalog = fs::read_to_string(out.join("catalog.ts")).unwrap();
    let users = fs::read_to_string(out.join("users.ts")).unwrap();

    assert!(catalog.starts_with("// Generated by protots. DO NOT EDIT.\n// Source: catalog.proto\n"));
    assert!(catalog.contains("export interface Catalog {"));
    assert!(catalog.contains("list(request: Item): AsyncIterable<Item>;"));
    assert!(users.contains("  id: string;"));
    assert!(users.contains("  tags?: string[];"));
}

#[test]
fn run_once___one_malformed_of_three___others_still_written() {
    let (dir, mut inputs) = fixture();
    let bad = dir.path().join("proto").join("broken.proto");
    fs::write(&bad, "definitely not protobuf {{{").unwrap();
    inputs.insert(0, bad);
    let out = dir.path().join("generated");

    let summary = run_once(&inputs, &out, &GenerationOptions::default()).unwrap();

    assert_eq!(summary, RunSummary { succeeded: 2, failed: 1 });
    assert!(out.join("catalog.ts").is_file());
    assert!(out.join("users.ts").is_file());
    assert!(!out.join("broken.ts").exists());
}

#[test]
fn run_once___every_file_malformed___all_files_failed_error() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("broken.proto");
    fs::write(&bad, "nope").unwrap();
    let out = dir.path().join("generated");

    let result = run_once(&[bad], &out, &GenerationOptions::default());
    assert!(matches!(
        result,
        Err(CliError::AllFilesFailed { failed: 1 })
    ));
}

#[test]
fn run_once___repeated_runs___byte_identical_output() {
    let (dir, inputs) = fixture();
    let out = dir.path().join("generated");
    let opts = GenerationOptions::default();

    run_once(&inputs, &out, &opts).unwrap();
    let first = fs::read_to_string(out.join("catalog.ts")).unwrap();
    run_once(&inputs, &out, &opts).unwrap();
    let second = fs::read_to_string(out.join("catalog.ts")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn run_once___package_filter___restricts_output() {
    let (dir, inputs) = fixture();
    let out = dir.path().join("generated");
    let opts = GenerationOptions {
        package_filter: Some("acme.catalog".to_string()),
        ..GenerationOptions::default()
    };

    run_once(&inputs, &out, &opts).unwrap();

    let catalog = fs::read_to_string(out.join("catalog.ts")).unwrap();
    assert!(catalog.contains("export interface Item"));

    // users.proto has no package; the filter resolves nothing there and
    // the document is banner-only, not an error.
    let users = fs::read_to_string(out.join("users.ts")).unwrap();
    assert!(!users.contains("export"));
    assert!(users.starts_with("// Generated by protots."));
}

#[test]
fn run_once___unwritable_output_dir___fatal() {
    let (dir, inputs) = fixture();
    // A file where the output directory should be.
    let out = dir.path().join("blocked");
    fs::write(&out, "in the way").unwrap();

    let result = run_once(&inputs, &out, &GenerationOptions::default());
    assert!(matches!(result, Err(CliError::OutputDir { .. })));
}

#[test]
fn run_once___comments_flow_from_source_to_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.proto");
    fs::write(
        &input,
        r#"
            syntax = "proto3";

            // A documented message.
            message Doc {
              // A documented field.
              string text = 1;
            }
        "#,
    )
    .unwrap();
    let out = dir.path().join("generated");

    run_once(&[input.clone()], &out, &GenerationOptions::default()).unwrap();
    let code = fs::read_to_string(out.join("doc.ts")).unwrap();
    assert!(code.contains(" * A documented message."));
    assert!(code.contains("   * A documented field."));

    let silent = GenerationOptions {
        emit_comments: false,
        ..GenerationOptions::default()
    };
    run_once(&[input], &out, &silent).unwrap();
    let code = fs::read_to_string(out.join("doc.ts")).unwrap();
    assert!(!code.contains("A documented message."));
}
