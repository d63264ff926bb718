//! The grammar rule table.
//!
//! One immutable, process-wide table maps each SDP line type character to
//! an ordered list of rules. A rule's regex both recognizes a line and
//! decomposes it into captures; the same rule tells the writer how to put
//! the line back together. Parser and writer are two interpreters over
//! this table, which is what keeps the codec bidirectional.
//!
//! Rule order is significant twice over: the parser takes the first rule
//! whose pattern matches, and the writer emits a scope's lines in table
//! order. The `a` list ends in a catch-all that preserves unrecognized
//! attributes verbatim.

mod render;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::tree::Fields;

/// Where a rule's captures are stored, and how they aggregate.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Target {
    /// Singleton slot under the key; a re-match overwrites.
    Field(&'static str),
    /// List slot under the key; every match appends.
    List(&'static str),
    /// The m= rule only: captures attach directly onto the media scope.
    Media,
}

/// How the writer turns a stored slot back into line text.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Render {
    /// Scalar value emitted as-is after `<type>=`.
    Verbatim,
    /// Scalar value emitted after a fixed keyword prefix.
    Prefixed(&'static str),
    /// Record formatted by a presence-driven function.
    Fields(fn(&Fields) -> String),
}

/// A single line grammar rule.
#[derive(Debug)]
pub(crate) struct Rule {
    pub target: Target,
    pub pattern: Regex,
    /// Capture names for record rules; empty for scalar rules, whose value
    /// is the first capture group.
    pub names: &'static [&'static str],
    pub render: Render,
}

impl Rule {
    fn field(key: &'static str, pattern: &str, render: Render) -> Self {
        Rule {
            target: Target::Field(key),
            pattern: compile(pattern),
            names: &[],
            render,
        }
    }

    fn record(
        key: &'static str,
        pattern: &str,
        names: &'static [&'static str],
        format: fn(&Fields) -> String,
    ) -> Self {
        Rule {
            target: Target::Field(key),
            pattern: compile(pattern),
            names,
            render: Render::Fields(format),
        }
    }

    fn list(
        key: &'static str,
        pattern: &str,
        names: &'static [&'static str],
        format: fn(&Fields) -> String,
    ) -> Self {
        Rule {
            target: Target::List(key),
            pattern: compile(pattern),
            names,
            render: Render::Fields(format),
        }
    }

    fn media(pattern: &str, names: &'static [&'static str], format: fn(&Fields) -> String) -> Self {
        Rule {
            target: Target::Media,
            pattern: compile(pattern),
            names,
            render: Render::Fields(format),
        }
    }
}

/// A pattern that fails to compile is a table bug, caught the first time
/// anything touches the grammar.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("grammar pattern must compile")
}

static GRAMMAR: Lazy<HashMap<char, Vec<Rule>>> = Lazy::new(build_grammar);

/// Ordered candidate rules for a line type; empty for unmodeled types.
pub(crate) fn rules_for(ty: char) -> &'static [Rule] {
    GRAMMAR.get(&ty).map(Vec::as_slice).unwrap_or(&[])
}

/// The dedicated m= rule, used by the writer to open each media section.
pub(crate) fn media_rule() -> &'static Rule {
    rules_for('m')
        .first()
        .expect("grammar always defines the m= rule")
}

fn build_grammar() -> HashMap<char, Vec<Rule>> {
    let mut table = HashMap::new();

    // v=0
    table.insert(
        'v',
        vec![Rule::field("version", r"^(\d*)$", Render::Verbatim)],
    );

    // o=- 20518 0 IN IP4 203.0.113.1
    table.insert(
        'o',
        vec![Rule::record(
            "origin",
            r"^(\S*) (\d*) (\d*) (\S*) IP(\d) (\S*)",
            &["username", "sessionId", "sessionVersion", "netType", "ipVer", "address"],
            render::origin,
        )],
    );

    // s=-
    table.insert('s', vec![Rule::field("name", r"(.*)", Render::Verbatim)]);
    // i=foo
    table.insert(
        'i',
        vec![Rule::field("description", r"(.*)", Render::Verbatim)],
    );
    // u=https://foo.com
    table.insert('u', vec![Rule::field("uri", r"(.*)", Render::Verbatim)]);
    // e=alice@foo.com
    table.insert('e', vec![Rule::field("email", r"(.*)", Render::Verbatim)]);
    // p=+12345678
    table.insert('p', vec![Rule::field("phone", r"(.*)", Render::Verbatim)]);
    // z=<adjustment time> <offset> ...
    table.insert(
        'z',
        vec![Rule::field("timezones", r"(.*)", Render::Verbatim)],
    );
    // r=<repeat interval> <active duration> <offsets from start-time>
    table.insert('r', vec![Rule::field("repeats", r"(.*)", Render::Verbatim)]);

    // t=0 0
    table.insert(
        't',
        vec![Rule::record(
            "timing",
            r"^(\d*) (\d*)",
            &["start", "stop"],
            render::timing,
        )],
    );

    // c=IN IP4 10.47.197.26
    table.insert(
        'c',
        vec![Rule::record(
            "connection",
            r"^IN IP(\d) (\S*)",
            &["version", "ip"],
            render::connection,
        )],
    );

    // b=AS:4000
    table.insert(
        'b',
        vec![Rule::list(
            "bandwidth",
            r"^(TIAS|AS|CT|RR|RS):(\d*)",
            &["type", "limit"],
            render::bandwidth,
        )],
    );

    // m=video 51744 RTP/AVP 126 97 98 34 31
    table.insert(
        'm',
        vec![Rule::media(
            r"^(\w*) (\d*) ([\w/]*)(?: (.*))?",
            &["type", "port", "protocol", "payloads"],
            render::media_line,
        )],
    );

    table.insert('a', attribute_rules());

    debug!(line_types = table.len(), "grammar table built");
    table
}

fn attribute_rules() -> Vec<Rule> {
    vec![
        // a=rtpmap:110 opus/48000/2
        Rule::list(
            "rtp",
            r"^rtpmap:(\d*) ([\w\-.]*)(?:\s*/(\d*)(?:\s*/(\S*))?)?",
            &["payload", "codec", "rate", "encoding"],
            render::rtpmap,
        ),
        // a=fmtp:108 profile-level-id=24;object=23;bitrate=64000
        Rule::list(
            "fmtp",
            r"^fmtp:(\d*) ([\S| ]*)",
            &["payload", "config"],
            render::fmtp,
        ),
        // a=control:streamid=0
        Rule::field("control", r"^control:(.*)", Render::Prefixed("control:")),
        // a=rtcp:65179 IN IP4 193.84.77.194
        Rule::record(
            "rtcp",
            r"^rtcp:(\d*)(?: (\S*) IP(\d) (\S*))?",
            &["port", "netType", "ipVer", "address"],
            render::rtcp,
        ),
        // a=rtcp-fb:98 trr-int 100
        Rule::list(
            "rtcpFbTrrInt",
            r"^rtcp-fb:(\*|\d*) trr-int (\d*)",
            &["payload", "value"],
            render::rtcp_fb_trr_int,
        ),
        // a=rtcp-fb:98 nack rpsi
        Rule::list(
            "rtcpFb",
            r"^rtcp-fb:(\*|\d*) ([\w_-]*)(?: ([\w_-]*))?",
            &["payload", "type", "subtype"],
            render::rtcp_fb,
        ),
        // a=extmap:1/recvonly URI-gps-string
        // a=extmap:3 urn:ietf:params:rtp-hdrext:encrypt urn:ietf:params:rtp-hdrext:smpte-tc 25@600/24
        Rule::list(
            "ext",
            r"^extmap:(\d+)(?:/(\w+))?(?: (urn:ietf:params:rtp-hdrext:encrypt))? (\S*)(?: (\S*))?",
            &["value", "direction", "encrypt-uri", "uri", "config"],
            render::extmap,
        ),
        // a=extmap-allow-mixed
        Rule::field(
            "extmapAllowMixed",
            r"^(extmap-allow-mixed)",
            Render::Verbatim,
        ),
        // a=crypto:1 AES_CM_128_HMAC_SHA1_80 inline:PS1uQCVeeCFCanVmcjkpPywjNWhcYD0mXXtxaVBR|2^20|1:32
        Rule::list(
            "crypto",
            r"^crypto:(\d*) ([\w_]*) (\S*)(?: (\S*))?",
            &["id", "suite", "config", "sessionConfig"],
            render::crypto,
        ),
        // a=setup:actpass
        Rule::field("setup", r"^setup:(\w*)", Render::Prefixed("setup:")),
        // a=connection:new
        Rule::field(
            "connectionType",
            r"^connection:(new|existing)",
            Render::Prefixed("connection:"),
        ),
        // a=mid:1
        Rule::field("mid", r"^mid:([^\s]*)", Render::Prefixed("mid:")),
        // a=msid:0c8b064d-d807-43b4-b434-f92a889d8587 98178685-d409-46e0-8e16-7ef0db0db64a
        Rule::field("msid", r"^msid:(.*)", Render::Prefixed("msid:")),
        // a=ptime:20
        Rule::field("ptime", r"^ptime:(\d*(?:\.\d*)*)", Render::Prefixed("ptime:")),
        // a=maxptime:60
        Rule::field(
            "maxptime",
            r"^maxptime:(\d*(?:\.\d*)*)",
            Render::Prefixed("maxptime:"),
        ),
        // a=sendrecv
        Rule::field(
            "direction",
            r"^(sendrecv|recvonly|sendonly|inactive)",
            Render::Verbatim,
        ),
        // a=ice-lite
        Rule::field("icelite", r"^(ice-lite)", Render::Verbatim),
        // a=ice-ufrag:F7gI
        Rule::field(
            "iceUfrag",
            r"^ice-ufrag:(\S*)",
            Render::Prefixed("ice-ufrag:"),
        ),
        // a=ice-pwd:x9cml/YzichV2+XlhiMu8g
        Rule::field("icePwd", r"^ice-pwd:(\S*)", Render::Prefixed("ice-pwd:")),
        // a=fingerprint:SHA-1 00:11:22:33:44:55:66:77:88:99:AA:BB:CC:DD:EE:FF:00:11:22:33
        Rule::record(
            "fingerprint",
            r"^fingerprint:(\S*) (\S*)",
            &["type", "hash"],
            render::fingerprint,
        ),
        // a=candidate:0 1 UDP 2113667327 203.0.113.1 54400 typ host
        // a=candidate:1162875081 1 udp 2113937151 192.168.34.75 60017 typ host generation 0 network-id 3 network-cost 10
        // a=candidate:229815620 1 tcp 1518280447 192.168.150.19 60017 typ host tcptype active generation 0 network-id 3 network-cost 10
        Rule::list(
            "candidates",
            r"^candidate:(\S*) (\d*) (\S*) (\d*) (\S*) (\d*) typ (\S*)(?: raddr (\S*) rport (\d*))?(?: tcptype (\S*))?(?: generation (\d*))?(?: network-id (\d*))?(?: network-cost (\d*))?",
            &[
                "foundation", "component", "transport", "priority", "ip", "port", "type",
                "raddr", "rport", "tcptype", "generation", "network-id", "network-cost",
            ],
            render::candidate,
        ),
        // a=end-of-candidates
        Rule::field("endOfCandidates", r"^(end-of-candidates)", Render::Verbatim),
        // a=remote-candidates:1 203.0.113.1 54400 2 203.0.113.1 54401
        Rule::field(
            "remoteCandidates",
            r"^remote-candidates:(.*)",
            Render::Prefixed("remote-candidates:"),
        ),
        // a=ice-options:google-ice
        Rule::field(
            "iceOptions",
            r"^ice-options:(\S*)",
            Render::Prefixed("ice-options:"),
        ),
        // a=ssrc:2566107569 cname:t9YU8M1UxTF8Y1A1
        Rule::list(
            "ssrcs",
            r"^ssrc:(\d*) ([\w_-]*)(?::(.*))?",
            &["id", "attribute", "value"],
            render::ssrc,
        ),
        // a=ssrc-group:FEC 1 2
        // a=ssrc-group:FEC-FR 3004364195 1080772241
        Rule::list(
            "ssrcGroups",
            r"^ssrc-group:([\x21\x23\x24\x25\x26\x27\x2A\x2B\x2D\x2E\w]*) (.*)",
            &["semantics", "ssrcs"],
            render::ssrc_group,
        ),
        // a=msid-semantic: WMS Jvlam5X3SX1OP6pn20zWogvaKJz5Hjf9OnlV
        Rule::record(
            "msidSemantic",
            r"^msid-semantic:\s?(\w*) (\S*)",
            &["semantic", "token"],
            render::msid_semantic,
        ),
        // a=group:BUNDLE audio video
        Rule::list(
            "groups",
            r"^group:(\w*) (.*)",
            &["type", "mids"],
            render::group,
        ),
        // a=rtcp-mux
        Rule::field("rtcpMux", r"^(rtcp-mux)", Render::Verbatim),
        // a=rtcp-rsize
        Rule::field("rtcpRsize", r"^(rtcp-rsize)", Render::Verbatim),
        // a=sctpmap:5000 webrtc-datachannel 1024
        Rule::record(
            "sctpmap",
            r"^sctpmap:([\w_/]*) (\S*)(?: (\S*))?",
            &["sctpmapNumber", "app", "maxMessageSize"],
            render::sctpmap,
        ),
        // a=x-google-flag:conference
        Rule::field(
            "xGoogleFlag",
            r"^x-google-flag:([^\s]*)",
            Render::Prefixed("x-google-flag:"),
        ),
        // a=rid:1 send max-width=1280;max-height=720;max-fps=30;depend=0
        Rule::list(
            "rids",
            r"^rid:([\d\w]+) (\w+)(?: ([\S| ]*))?",
            &["id", "direction", "params"],
            render::rid,
        ),
        // a=imageattr:97 send [x=800,y=640,sar=1.1,q=0.6] [x=480,y=320] recv [x=330,y=250]
        // a=imageattr:* send [x=800,y=640] recv *
        Rule::list(
            "imageattrs",
            r"^imageattr:(\d+|\*)[\s\t]+(send|recv)[\s\t]+(\*|\[\S+\](?:[\s\t]+\[\S+\])*)(?:[\s\t]+(recv|send)[\s\t]+(\*|\[\S+\](?:[\s\t]+\[\S+\])*))?",
            &["pt", "dir1", "attrs1", "dir2", "attrs2"],
            render::imageattr,
        ),
        // a=simulcast:send 1,2,3;~4,~5 recv 6;~7,~8
        Rule::record(
            "simulcast",
            r"^simulcast:(send|recv) ([a-zA-Z0-9\-_~;,]+)(?:\s?(send|recv) ([a-zA-Z0-9\-_~;,]+))?$",
            &["dir1", "list1", "dir2", "list2"],
            render::simulcast,
        ),
        // a=simulcast: recv pt=97;98 send pt=97  (draft 03 syntax)
        Rule::record(
            "simulcast_03",
            r"^simulcast:[\s\t]+([\S+\s\t]+)$",
            &["value"],
            render::simulcast_03,
        ),
        // a=framerate:29.97
        Rule::field(
            "framerate",
            r"^framerate:(\d+(?:$|\.\d+))",
            Render::Prefixed("framerate:"),
        ),
        // a=source-filter: incl IN IP4 239.5.2.31 10.1.15.5
        Rule::record(
            "sourceFilter",
            r"^source-filter: *(excl|incl) (\S*) (IP4|IP6|\*) (\S*) (.*)",
            &["filterMode", "netType", "addressTypes", "destAddress", "srcList"],
            render::source_filter,
        ),
        // a=bundle-only
        Rule::field("bundleOnly", r"^(bundle-only)", Render::Verbatim),
        // a=label:1
        Rule::field("label", r"^label:(.+)", Render::Prefixed("label:")),
        // a=sctp-port:5000
        Rule::field(
            "sctpPort",
            r"^sctp-port:(\d+)$",
            Render::Prefixed("sctp-port:"),
        ),
        // a=max-message-size:261840
        Rule::field(
            "maxMessageSize",
            r"^max-message-size:(\d+)$",
            Render::Prefixed("max-message-size:"),
        ),
        // a=ts-refclk:ptp=IEEE1588-2008:39-A7-94-FF-FE-07-CB-D0:37
        Rule::list(
            "tsRefClocks",
            r"^ts-refclk:([^\s=]*)(?:=(\S*))?",
            &["clksrc", "clksrcExt"],
            render::ts_ref_clock,
        ),
        // a=mediaclk:direct=963214424
        Rule::record(
            "mediaClk",
            r"^mediaclk:(?:id=(\S*))? *([^\s=]*)(?:=(\S*))?(?: *rate=(\d+)/(\d+))?",
            &["id", "mediaClockName", "mediaClockValue", "rateNumerator", "rateDenominator"],
            render::media_clk,
        ),
        // a=keywds:keywords
        Rule::field("keywords", r"^keywds:(.+)$", Render::Prefixed("keywds:")),
        // a=content:main
        Rule::field("content", r"^content:(.+)", Render::Prefixed("content:")),
        // a=floorctrl:c-s
        Rule::field(
            "bfcpFloorCtrl",
            r"^floorctrl:(c-only|s-only|c-s)",
            Render::Prefixed("floorctrl:"),
        ),
        // a=confid:1
        Rule::field("bfcpConfId", r"^confid:(\d+)", Render::Prefixed("confid:")),
        // a=userid:1
        Rule::field("bfcpUserId", r"^userid:(\d+)", Render::Prefixed("userid:")),
        // a=floorid:1 mstrm:1 3
        Rule::record(
            "bfcpFloorId",
            r"^floorid:(.+) (?:m-stream|mstrm):(.+)",
            &["id", "mStream"],
            render::bfcp_floor_id,
        ),
        // Catch-all: any attribute nothing above recognized, kept verbatim
        Rule::list("invalid", r"(.*)", &["value"], render::invalid),
    ]
}
