//! Canonical pretty-printing of parsed documents.
//!
//! Keys keep their encounter order (serde_json `preserve_order`) and non-ASCII
//! text is written as-is.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Default indentation width in spaces
pub const DEFAULT_INDENT: usize = 2;

/// Render `value` with `indent` spaces per nesting level
pub fn pretty_print(value: &Value, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);

    // Writing into a Vec cannot fail and Value always serializes
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}
