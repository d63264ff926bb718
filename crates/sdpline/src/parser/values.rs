//! Decoders for attribute payload strings.
//!
//! The line engine stores attribute values as opaque text; these helpers
//! decode the common composite payloads (fmtp configs, imageattr groups,
//! remote candidates, simulcast stream lists, payload type lists) when a
//! caller actually needs the structure. Nothing here is invoked during
//! `parse` or `write`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered key to optional-value mapping decoded from `key=value;...`
/// strings. Keys without a value are boolean-style flags; use
/// [`ParamMap::contains`] to distinguish a flag from an absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamMap(Vec<(String, Option<String>)>);

impl ParamMap {
    /// The value for a key, if the key is present with a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits one `key=value` fragment; a fragment without an `=` becomes
    /// a flag key, and empty fragments are dropped as separator noise.
    fn insert_fragment(&mut self, fragment: &str) {
        match fragment.split_once('=') {
            Some((key, value)) => self.0.push((key.to_string(), Some(value.to_string()))),
            None if !fragment.is_empty() => self.0.push((fragment.to_string(), None)),
            None => {}
        }
    }
}

/// Decodes a `;`-separated parameter string, e.g. an fmtp config like
/// `profile-level-id=42e034;packetization-mode=1` or `maxplaybackrate=48000; cbr`.
/// One space after each `;` is tolerated; values keep any further `=`.
pub fn parse_params(params: &str) -> ParamMap {
    let mut map = ParamMap::default();
    for part in params.split(';') {
        let part = part.strip_prefix(|c: char| c.is_whitespace()).unwrap_or(part);
        map.insert_fragment(part);
    }
    map
}

/// Historical name for [`parse_params`]: fmtp configuration strings use
/// the same shape.
pub fn parse_fmtp_config(config: &str) -> ParamMap {
    parse_params(config)
}

/// Decodes a whitespace-separated payload type list, e.g. the tail of
/// `m=audio 9 UDP/TLS/RTP/SAVPF 111 103 0`.
pub fn parse_payloads(payloads: &str) -> Result<Vec<u32>> {
    payloads
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| Error::InvalidPayload(token.to_string()))
        })
        .collect()
}

/// One entry of an `a=remote-candidates:` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCandidate {
    pub component: u32,
    pub ip: String,
    pub port: u32,
}

/// Decodes `component ip port` triples, e.g.
/// `1 203.0.113.1 54400 2 203.0.113.1 54401`.
pub fn parse_remote_candidates(value: &str) -> Result<Vec<RemoteCandidate>> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    if tokens.len() % 3 != 0 {
        return Err(Error::InvalidRemoteCandidates(format!(
            "expected component/ip/port triples, got {} token(s)",
            tokens.len()
        )));
    }

    let mut candidates = Vec::with_capacity(tokens.len() / 3);
    for chunk in tokens.chunks_exact(3) {
        let &[component, ip, port] = chunk else {
            continue;
        };
        let component = component
            .parse::<u32>()
            .map_err(|_| Error::InvalidRemoteCandidates(format!("bad component {component:?}")))?;
        let port = port
            .parse::<u32>()
            .map_err(|_| Error::InvalidRemoteCandidates(format!("bad port {port:?}")))?;
        candidates.push(RemoteCandidate {
            component,
            ip: ip.to_string(),
            port,
        });
    }
    Ok(candidates)
}

/// Decodes an imageattr attribute set like
/// `[x=1280,y=720] [x=320,y=180]` into one map per bracket group.
pub fn parse_image_attributes(attrs: &str) -> Vec<ParamMap> {
    attrs
        .split_whitespace()
        .map(|group| {
            let group = group.strip_prefix('[').unwrap_or(group);
            let group = group.strip_suffix(']').unwrap_or(group);
            let mut map = ParamMap::default();
            for item in group.split(',') {
                map.insert_fragment(item);
            }
            map
        })
        .collect()
}

/// One simulcast stream alternative; `paused` reflects a leading `~`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulcastStream {
    pub scid: String,
    pub paused: bool,
}

/// Decodes a simulcast stream list like `1,~4;2,~5`: `;` separates the
/// simulcast streams, `,` the alternative formats within each.
pub fn parse_simulcast_stream_list(streams: &str) -> Vec<Vec<SimulcastStream>> {
    streams
        .split(';')
        .map(|alternatives| {
            alternatives
                .split(',')
                .map(|format| {
                    let (scid, paused) = match format.strip_prefix('~') {
                        Some(rest) => (rest, true),
                        None => (format, false),
                    };
                    SimulcastStream {
                        scid: scid.to_string(),
                        paused,
                    }
                })
                .collect()
        })
        .collect()
}
