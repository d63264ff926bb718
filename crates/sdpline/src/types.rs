//! Typed session description schema.
//!
//! A direct structural rendering of the attribute tree once line types are
//! known: every grammar storage key has a field at the scope(s) where the
//! line may occur, singleton records become structs, push rules become
//! vectors. All leaf values stay strings, exactly as captured from the
//! wire; numeric interpretation is left to callers (see
//! [`crate::parser::values`]).
//!
//! Serde renames give the wire-JSON names (camelCase plus the hyphenated
//! `encrypt-uri`, `network-id`, `network-cost` and the underscored
//! `simulcast_03`), so descriptions interchange cleanly with other
//! implementations of this JSON shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// o= line: originator and session identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Origin {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub session_version: String,
    #[serde(default)]
    pub net_type: String,
    #[serde(default)]
    pub ip_ver: String,
    #[serde(default)]
    pub address: String,
}

/// t= line: session start and stop time, NTP seconds as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub stop: String,
}

/// c= line: connection address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// IP version, `4` or `6`.
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub ip: String,
}

/// b= line: bandwidth limit of one type (AS, TIAS, CT, RR or RS).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bandwidth {
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub limit: String,
}

/// a=rtpmap: payload type to codec mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rtp {
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub codec: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

/// a=fmtp: format parameters, kept as opaque text (decode with
/// [`crate::parser::values::parse_params`] when needed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fmtp {
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub config: String,
}

/// a=rtcp: explicit RTCP port, optionally with an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rtcp {
    #[serde(default)]
    pub port: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_ver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// a=rtcp-fb: RTCP feedback capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RtcpFb {
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

/// a=rtcp-fb ... trr-int: minimum regular RTCP interval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RtcpFbTrrInt {
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub value: String,
}

/// a=extmap: RTP header extension mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ext {
    #[serde(default)]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(rename = "encrypt-uri", skip_serializing_if = "Option::is_none")]
    pub encrypt_uri: Option<String>,
    #[serde(default)]
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
}

/// a=crypto: SDES key parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crypto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub config: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_config: Option<String>,
}

/// a=fingerprint: certificate fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub hash: String,
}

/// a=candidate: one ICE candidate; the trailing extensions are optional
/// and `raddr`/`rport` travel together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub foundation: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub transport: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub port: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raddr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcptype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<String>,
    #[serde(rename = "network-id", skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(rename = "network-cost", skip_serializing_if = "Option::is_none")]
    pub network_cost: Option<String>,
}

/// a=ssrc: one source-level attribute line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ssrc {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub attribute: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// a=ssrc-group: grouped sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SsrcGroup {
    #[serde(default)]
    pub semantics: String,
    #[serde(default)]
    pub ssrcs: String,
}

/// a=msid-semantic: media stream identification semantic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MsidSemantic {
    #[serde(default)]
    pub semantic: String,
    #[serde(default)]
    pub token: String,
}

/// a=group: grouping of media sections, e.g. `BUNDLE audio video`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub mids: String,
}

/// a=sctpmap: SCTP stream mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sctpmap {
    #[serde(default)]
    pub sctpmap_number: String,
    #[serde(default)]
    pub app: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_message_size: Option<String>,
}

/// a=rid: one restriction identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rid {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub direction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
}

/// a=imageattr: image size negotiation; the second direction pair is
/// optional and the attribute sets stay as written (decode with
/// [`crate::parser::values::parse_image_attributes`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAttr {
    #[serde(default)]
    pub pt: String,
    #[serde(default)]
    pub dir1: String,
    #[serde(default)]
    pub attrs1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs2: Option<String>,
}

/// a=simulcast: rid-based simulcast streams (decode the lists with
/// [`crate::parser::values::parse_simulcast_stream_list`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Simulcast {
    #[serde(default)]
    pub dir1: String,
    #[serde(default)]
    pub list1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list2: Option<String>,
}

/// a=simulcast, draft 03 syntax.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Simulcast03 {
    #[serde(default)]
    pub value: String,
}

/// a=source-filter: source address filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFilter {
    #[serde(default)]
    pub filter_mode: String,
    #[serde(default)]
    pub net_type: String,
    #[serde(default)]
    pub address_types: String,
    #[serde(default)]
    pub dest_address: String,
    #[serde(default)]
    pub src_list: String,
}

/// a=ts-refclk: timestamp reference clock source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsRefClock {
    #[serde(default)]
    pub clksrc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clksrc_ext: Option<String>,
}

/// a=mediaclk: media clock source and rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaClk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub media_clock_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_clock_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_numerator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_denominator: Option<String>,
}

/// a=floorid: BFCP floor to stream binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BfcpFloorId {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub m_stream: String,
}

/// An attribute line no grammar rule recognized, preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invalid {
    #[serde(default)]
    pub value: String,
}

/// One m= section and its attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub port: String,
    #[serde(default)]
    pub protocol: String,
    /// Payload list of the m= line, as one space-separated string (decode
    /// with [`crate::parser::values::parse_payloads`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payloads: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<Connection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bandwidth: Vec<Bandwidth>,

    /// Always present, possibly empty: every media section carries its
    /// rtpmap list, even when no rtpmap line appeared.
    #[serde(default)]
    pub rtp: Vec<Rtp>,
    /// Always present like `rtp`.
    #[serde(default)]
    pub fmtp: Vec<Fmtp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtcp: Option<Rtcp>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rtcp_fb: Vec<RtcpFb>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rtcp_fb_trr_int: Vec<RtcpFbTrrInt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ext: Vec<Ext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extmap_allow_mixed: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crypto: Vec<Crypto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ptime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxptime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ice_ufrag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ice_pwd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ice_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_of_candidates: Option<String>,
    /// Kept as the raw token list (decode with
    /// [`crate::parser::values::parse_remote_candidates`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_candidates: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssrcs: Vec<Ssrc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssrc_groups: Vec<SsrcGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtcp_mux: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtcp_rsize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sctpmap: Option<Sctpmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sctp_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_message_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_google_flag: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rids: Vec<Rid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imageattrs: Vec<ImageAttr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulcast: Option<Simulcast>,
    #[serde(rename = "simulcast_03", skip_serializing_if = "Option::is_none")]
    pub simulcast_03: Option<Simulcast03>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_filter: Option<SourceFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_only: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ts_ref_clocks: Vec<TsRefClock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_clk: Option<MediaClk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfcp_floor_ctrl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfcp_conf_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfcp_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfcp_floor_id: Option<BfcpFloorId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid: Vec<Invalid>,
}

impl Media {
    /// A media section carrying just its m= essentials.
    pub fn new(
        media_type: impl Into<String>,
        port: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Media {
            r#type: media_type.into(),
            port: port.into(),
            protocol: protocol.into(),
            ..Default::default()
        }
    }
}

/// A whole session description: the session-scope lines plus the media
/// sections in wire order.
///
/// Obtained from [`crate::parser::parse`] (or `str::parse`) and rendered
/// back by [`crate::writer::write`] (or `to_string`). Field values are
/// wire text; absent lines are `None`/empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezones: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeats: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<Connection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bandwidth: Vec<Bandwidth>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ext: Vec<Ext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extmap_allow_mixed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ice_ufrag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ice_pwd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ice_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icelite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_filter: Option<SourceFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msid_semantic: Option<MsidSemantic>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ts_ref_clocks: Vec<TsRefClock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_clk: Option<MediaClk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid: Vec<Invalid>,

    /// Media sections in wire order; always serialized.
    #[serde(default)]
    pub media: Vec<Media>,
}

impl SessionDescription {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for SessionDescription {
    /// Renders with default line ordering; equivalent to
    /// [`crate::writer::write`] with no options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sdp = crate::writer::write(self, None).map_err(|_| fmt::Error)?;
        f.write_str(&sdp)
    }
}

impl FromStr for SessionDescription {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse(s)
    }
}
