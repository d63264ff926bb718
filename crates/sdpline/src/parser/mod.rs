//! SDP document parser.
//!
//! Walks the document line by line, keeps a current scope (the session
//! until the first m= line, the newest media section after that) and lets
//! the grammar table decide where each line's captures land. The finished
//! attribute tree is projected onto the typed schema through serde_json.
//!
//! Malformed input is never fatal here: unknown attributes are preserved
//! under the catch-all, other unmatched lines are dropped with a trace log.

mod line;
pub mod values;

use regex::Captures;
use tracing::trace;

use crate::error::Result;
use crate::grammar::{self, Rule, Target};
use crate::tree::{Fields, Scope, SessionTree};
use crate::types::SessionDescription;

/// Parses an SDP document into a typed session description.
///
/// Line separators may be `\n` or `\r\n`. Lines that do not look like
/// `<type>=value`, and non-attribute lines no grammar rule recognizes, are
/// skipped; unrecognized `a=` lines are preserved verbatim in `invalid`.
pub fn parse(sdp: &str) -> Result<SessionDescription> {
    let tree = parse_tree(sdp);
    let session = serde_json::from_value(tree.into_json())?;
    Ok(session)
}

pub(crate) fn parse_tree(sdp: &str) -> SessionTree {
    let mut tree = SessionTree::default();

    for raw in sdp.lines() {
        let raw = raw.trim_end_matches('\r');
        if raw.is_empty() {
            continue;
        }
        let (ty, content) = match line::split(raw) {
            Ok((_, parsed)) => parsed,
            Err(_) => {
                trace!(line = raw, "skipping line without a type=value shape");
                continue;
            }
        };

        // Each m= line opens a fresh media scope, even when its content
        // does not fully match the m rule.
        if ty == 'm' {
            tree.media.push(Scope::media());
        }
        let scope = tree.media.last_mut().unwrap_or(&mut tree.session);
        apply(scope, ty, content);
    }

    tree
}

/// First matching rule wins; later rules are never consulted.
fn apply(scope: &mut Scope, ty: char, content: &str) {
    for rule in grammar::rules_for(ty) {
        if let Some(caps) = rule.pattern.captures(content) {
            attach(scope, rule, &caps);
            return;
        }
    }
    trace!(%ty, line = content, "no grammar rule matched, line dropped");
}

fn attach(scope: &mut Scope, rule: &Rule, caps: &Captures<'_>) {
    match rule.target {
        Target::Field(key) if rule.names.is_empty() => {
            // Scalar slot: the first capture, or the whole match for a
            // captureless pattern. Stored even when empty.
            let value = caps
                .get(1)
                .or_else(|| caps.get(0))
                .map_or("", |m| m.as_str());
            scope.set_scalar(key, value);
        }
        Target::Field(key) => {
            scope.set_record(key, named_fields(rule, caps));
        }
        Target::List(key) => {
            scope.push_record(key, named_fields(rule, caps));
        }
        Target::Media => {
            // m= captures sit directly on the media scope
            for (i, name) in rule.names.iter().enumerate() {
                if let Some(m) = caps.get(i + 1) {
                    if !m.as_str().is_empty() {
                        scope.set_scalar(name, m.as_str());
                    }
                }
            }
        }
    }
}

/// Named captures become record fields; names whose capture is missing or
/// empty are omitted so the writer can key optional segments on presence.
fn named_fields(rule: &Rule, caps: &Captures<'_>) -> Fields {
    let mut fields = Fields::new();
    for (i, name) in rule.names.iter().enumerate() {
        if let Some(m) = caps.get(i + 1) {
            if !m.as_str().is_empty() {
                fields.insert(name, m.as_str());
            }
        }
    }
    fields
}
