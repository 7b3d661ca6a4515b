/*
[INPUT]:  Operation names, request/response documents, service config
[OUTPUT]: Printable text for each CLI command
[POS]:    Command layer - drives the model crate's registry and codec
[UPDATE]: When adding commands or changing output layout
*/

use anyhow::{Context, Result};
use comprehend_model::{OPERATIONS, ServiceConfig, ServiceError, WireRequest, decode_error, find_operation};
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of `decode`: rendered output, or the service error for a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Output(String),
    Failed(ServiceError),
}

/// One line per operation: name, target, and `*` for token-generating calls.
pub fn list_operations() -> String {
    let width = OPERATIONS.iter().map(|entry| entry.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in OPERATIONS {
        let marker = if entry.idempotent { " *" } else { "" };
        let _ = writeln!(out, "{:width$}  {}{marker}", entry.name, entry.target);
    }
    out
}

/// Read a YAML or JSON request document and encode it for `operation`.
pub fn encode(operation: &str, input: &Path, config: &ServiceConfig) -> Result<String> {
    let entry = find_operation(operation)?;
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("read request document {}", input.display()))?;
    let document: serde_json::Value =
        serde_yaml::from_str(&content).context("parse request document")?;
    let document = match document {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };

    let wire = entry.encode(document, config).context("encode request")?;
    info!(operation = entry.name, url = %wire.url, "request encoded");
    format_wire(&wire)
}

fn format_wire(wire: &WireRequest) -> Result<String> {
    let mut out = format!("{} {}\n", wire.method, wire.url);
    for (name, value) in wire.headers() {
        let _ = writeln!(out, "{name}: {value}");
    }
    // Members come back in sorted order.
    let body: serde_json::Value = serde_json::from_str(&wire.body).context("reparse body")?;
    let _ = writeln!(out, "\n{}", serde_json::to_string_pretty(&body)?);
    Ok(out)
}

/// Read a response body and decode it for `operation`.
pub fn decode(operation: &str, input: &Path, status: u16) -> Result<Decoded> {
    let entry = find_operation(operation)?;
    let body = std::fs::read(input)
        .with_context(|| format!("read response body {}", input.display()))?;
    debug!(operation = entry.name, status, bytes = body.len(), "decoding");

    if (200..300).contains(&status) {
        let rendered = entry.render(&body).context("decode response")?;
        Ok(Decoded::Output(rendered))
    } else {
        Ok(Decoded::Failed(decode_error(status, &body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn document(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write document");
        file
    }

    #[test]
    fn test_operations_listing() {
        let listing = list_operations();
        assert_eq!(listing.lines().count(), OPERATIONS.len());
        assert!(
            listing
                .lines()
                .any(|line| line.starts_with("DetectSentiment ") && line.ends_with("Comprehend_20171127.DetectSentiment"))
        );
        assert!(
            listing
                .lines()
                .any(|line| line.starts_with("CreateEndpoint ") && line.ends_with(" *"))
        );
    }

    #[test]
    fn test_encode_yaml_document() {
        let file = document("Text: hello world\nLanguageCode: en\n");
        let out = encode("DetectSyntax", file.path(), &ServiceConfig::default()).unwrap();

        assert_eq!(
            out,
            "POST https://comprehend.us-east-1.amazonaws.com/\n\
             Content-Type: application/x-amz-json-1.1\n\
             X-Amz-Target: Comprehend_20171127.DetectSyntax\n\
             \n\
             {\n  \"LanguageCode\": \"en\",\n  \"Text\": \"hello world\"\n}\n"
        );
    }

    #[test]
    fn test_encode_unknown_operation() {
        let file = document("{}");
        let err = encode("DetectMood", file.path(), &ServiceConfig::default()).unwrap_err();
        assert!(err.to_string().contains("DetectMood"));
    }

    #[test]
    fn test_decode_success_and_failure() {
        let ok = document(r#"{"Languages":[{"LanguageCode":"fr","Score":0.5}]}"#);
        assert_eq!(
            decode("DetectDominantLanguage", ok.path(), 200).unwrap(),
            Decoded::Output("{Languages: [{LanguageCode: fr, Score: 0.5}]}".to_string())
        );

        let failed = document(r#"{"__type":"UnsupportedLanguageException","Message":"no"}"#);
        match decode("DetectSyntax", failed.path(), 400).unwrap() {
            Decoded::Failed(err) => assert_eq!(err.to_string(), "UnsupportedLanguageException (HTTP 400): no"),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
