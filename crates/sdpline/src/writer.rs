//! SDP writer.
//!
//! Re-serializes a typed session description by walking the grammar table
//! in a configured line-type order and emitting one line per populated
//! slot. The typed schema is first rendered to JSON, so the writer sees
//! exactly the shapes the parser's tree produces: strings for scalars,
//! objects for records, arrays of objects for lists.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::grammar::{self, Render, Rule, Target};
use crate::tree::Fields;
use crate::types::SessionDescription;

/// Session-scope line types in RFC 4566 order.
pub const DEFAULT_OUTER_ORDER: &[char] = &[
    'v', 'o', 's', 'i', 'u', 'e', 'p', 'c', 'b', 't', 'r', 'z', 'a',
];

/// Media-scope line types in RFC 4566 order; the m= line itself always
/// comes first and is not part of the order.
pub const DEFAULT_INNER_ORDER: &[char] = &['i', 'c', 'b', 'a'];

/// Line ordering configuration for [`write`].
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Session-scope type order; an empty vector falls back to the default.
    pub outer_order: Vec<char>,
    /// Media-scope type order; an empty vector falls back to the default.
    pub inner_order: Vec<char>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            outer_order: DEFAULT_OUTER_ORDER.to_vec(),
            inner_order: DEFAULT_INNER_ORDER.to_vec(),
        }
    }
}

/// Serializes a session description to SDP text, CRLF separated and CRLF
/// terminated.
///
/// Output is deterministic: within a scope, lines follow the grammar
/// table's rule order, not the order anything was parsed in, so
/// parse-then-write canonicalizes a document. A missing version and
/// missing media payload lists are normalized to empty-but-present, which
/// keeps line shapes stable.
pub fn write(session: &SessionDescription, options: Option<&WriteOptions>) -> Result<String> {
    let defaults = WriteOptions::default();
    let options = options.unwrap_or(&defaults);
    let outer: &[char] = if options.outer_order.is_empty() {
        DEFAULT_OUTER_ORDER
    } else {
        &options.outer_order
    };
    let inner: &[char] = if options.inner_order.is_empty() {
        DEFAULT_INNER_ORDER
    } else {
        &options.inner_order
    };

    let mut root = match serde_json::to_value(session)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    root.entry("version".to_string())
        .or_insert_with(|| Value::String(String::new()));
    let media = match root.remove("media") {
        Some(Value::Array(list)) => list,
        _ => Vec::new(),
    };

    let mut lines: Vec<String> = Vec::new();
    for &ty in outer {
        emit_scope(&mut lines, ty, &root);
    }

    for entry in media {
        let Value::Object(mut scope) = entry else {
            continue;
        };
        scope
            .entry("payloads".to_string())
            .or_insert_with(|| Value::String(String::new()));
        if let Render::Fields(format) = grammar::media_rule().render {
            lines.push(format!("m={}", format(&Fields::from_object(&scope))));
        }
        for &ty in inner {
            emit_scope(&mut lines, ty, &scope);
        }
    }

    let mut sdp = lines.join("\r\n");
    sdp.push_str("\r\n");
    Ok(sdp)
}

/// Emits every populated slot of one scope for one line type, walking the
/// type's rules in table order.
fn emit_scope(lines: &mut Vec<String>, ty: char, scope: &Map<String, Value>) {
    for rule in grammar::rules_for(ty) {
        match rule.target {
            Target::Field(key) => {
                if let Some(line) = scope.get(key).and_then(|slot| make_line(ty, rule, slot)) {
                    lines.push(line);
                }
            }
            Target::List(key) => {
                if let Some(Value::Array(items)) = scope.get(key) {
                    for item in items {
                        if let Some(line) = make_line(ty, rule, item) {
                            lines.push(line);
                        }
                    }
                }
            }
            Target::Media => {}
        }
    }
}

/// One line from one slot; slots whose shape does not fit the rule's
/// render produce nothing.
fn make_line(ty: char, rule: &Rule, slot: &Value) -> Option<String> {
    let text = match (&rule.render, slot) {
        (Render::Verbatim, Value::String(value)) => value.clone(),
        (Render::Prefixed(prefix), Value::String(value)) => format!("{prefix}{value}"),
        (Render::Fields(format), Value::Object(object)) => format(&Fields::from_object(object)),
        _ => return None,
    };
    Some(format!("{ty}={text}"))
}
