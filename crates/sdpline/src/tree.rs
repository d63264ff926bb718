//! Generic attribute tree built by the parser.
//!
//! Every line that matches a grammar rule lands here before typed
//! projection: scalar rules fill a single string slot, record rules fill a
//! named-field slot, push rules append to a list slot. Media scopes hang
//! off the session scope in wire order. The tree converts losslessly into
//! a `serde_json::Value`, which is the bridge to the typed schema.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Named captures of a single matched line.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Fields(HashMap<String, String>);

impl Fields {
    pub fn new() -> Self {
        Fields(HashMap::new())
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }

    /// True when the field is present with a non-empty value. Renderers key
    /// their optional segments on this.
    pub fn has(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(|v| !v.is_empty())
    }

    /// The field's text, or `""` when absent.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map_or("", |v| v.as_str())
    }

    /// Renderable view of a JSON object. String leaves pass through;
    /// numeric leaves are written in decimal so externally built JSON
    /// stays usable. Nested values are not renderable and are skipped.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let mut fields = Fields::new();
        for (name, value) in object {
            match value {
                Value::String(s) => fields.insert(name, s),
                Value::Number(n) => fields.insert(name, &n.to_string()),
                _ => {}
            }
        }
        fields
    }

    fn into_json(self) -> Value {
        Value::Object(
            self.0
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect(),
        )
    }
}

/// Storage for one grammar key inside a scope.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Slot {
    /// Singleton string value; re-matching the rule overwrites it.
    Scalar(String),
    /// Singleton named-field record; re-matching replaces the whole record.
    Record(Fields),
    /// Record list appended to in wire order.
    List(Vec<Fields>),
}

/// One attribute scope: the session, or a single media section.
#[derive(Debug, Clone, Default)]
pub(crate) struct Scope {
    slots: HashMap<String, Slot>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Fresh media scope. `rtp` and `fmtp` start as empty lists so they are
    /// always present on the projected media record.
    pub fn media() -> Self {
        let mut scope = Scope::new();
        scope.slots.insert("rtp".to_string(), Slot::List(Vec::new()));
        scope.slots.insert("fmtp".to_string(), Slot::List(Vec::new()));
        scope
    }

    pub fn set_scalar(&mut self, key: &str, value: &str) {
        self.slots
            .insert(key.to_string(), Slot::Scalar(value.to_string()));
    }

    pub fn set_record(&mut self, key: &str, fields: Fields) {
        self.slots.insert(key.to_string(), Slot::Record(fields));
    }

    pub fn push_record(&mut self, key: &str, fields: Fields) {
        match self
            .slots
            .entry(key.to_string())
            .or_insert_with(|| Slot::List(Vec::new()))
        {
            Slot::List(items) => items.push(fields),
            other => *other = Slot::List(vec![fields]),
        }
    }

    #[cfg(test)]
    pub fn slot(&self, key: &str) -> Option<&Slot> {
        self.slots.get(key)
    }

    fn into_json(self) -> Map<String, Value> {
        let mut object = Map::new();
        for (key, slot) in self.slots {
            let value = match slot {
                Slot::Scalar(s) => Value::String(s),
                Slot::Record(fields) => fields.into_json(),
                Slot::List(items) => {
                    Value::Array(items.into_iter().map(Fields::into_json).collect())
                }
            };
            object.insert(key, value);
        }
        object
    }
}

/// A parsed document: one session scope plus media scopes in wire order.
#[derive(Debug, Clone, Default)]
pub(crate) struct SessionTree {
    pub session: Scope,
    pub media: Vec<Scope>,
}

impl SessionTree {
    /// Lossless JSON rendering; `media` is always present, even when empty.
    pub fn into_json(self) -> Value {
        let mut root = self.session.into_json();
        let media = self
            .media
            .into_iter()
            .map(|scope| Value::Object(scope.into_json()))
            .collect();
        root.insert("media".to_string(), Value::Array(media));
        Value::Object(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_overwrites() {
        let mut scope = Scope::new();
        scope.set_scalar("setup", "actpass");
        scope.set_scalar("setup", "passive");
        assert_eq!(
            scope.slot("setup"),
            Some(&Slot::Scalar("passive".to_string()))
        );
    }

    #[test]
    fn test_push_keeps_wire_order() {
        let mut scope = Scope::new();
        let mut first = Fields::new();
        first.insert("payload", "111");
        let mut second = Fields::new();
        second.insert("payload", "103");
        scope.push_record("rtp", first);
        scope.push_record("rtp", second);

        match scope.slot("rtp") {
            Some(Slot::List(items)) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].get("payload"), "111");
                assert_eq!(items[1].get("payload"), "103");
            }
            other => panic!("expected a list slot, got {:?}", other),
        }
    }

    #[test]
    fn test_has_requires_non_empty_value() {
        let mut fields = Fields::new();
        fields.insert("rate", "");
        fields.insert("codec", "PCMU");
        assert!(!fields.has("rate"));
        assert!(!fields.has("encoding"));
        assert!(fields.has("codec"));
        assert_eq!(fields.get("rate"), "");
        assert_eq!(fields.get("codec"), "PCMU");
    }

    #[test]
    fn test_media_scope_preseeds_rtp_and_fmtp() {
        let tree = SessionTree {
            session: Scope::new(),
            media: vec![Scope::media()],
        };
        let value = tree.into_json();
        assert_eq!(value["media"][0]["rtp"], json!([]));
        assert_eq!(value["media"][0]["fmtp"], json!([]));
    }

    #[test]
    fn test_into_json_shapes() {
        let mut session = Scope::new();
        session.set_scalar("version", "0");
        let mut timing = Fields::new();
        timing.insert("start", "0");
        timing.insert("stop", "0");
        session.set_record("timing", timing);

        let tree = SessionTree {
            session,
            media: Vec::new(),
        };
        let value = tree.into_json();
        assert_eq!(value["version"], json!("0"));
        assert_eq!(value["timing"], json!({ "start": "0", "stop": "0" }));
        assert_eq!(value["media"], json!([]));
    }

    #[test]
    fn test_fields_from_object_stringifies_numbers() {
        let object = json!({ "port": 9, "type": "audio", "rtp": [] });
        let fields = match object {
            Value::Object(map) => Fields::from_object(&map),
            _ => unreachable!(),
        };
        assert_eq!(fields.get("port"), "9");
        assert_eq!(fields.get("type"), "audio");
        assert!(!fields.has("rtp"));
    }
}
