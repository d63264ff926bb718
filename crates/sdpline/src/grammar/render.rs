//! Line renderers for record-valued grammar rules.
//!
//! Each function assembles the text after `<type>=` from one record's
//! fields. Optional segments are keyed on field presence, mirroring what
//! the corresponding parse pattern can produce; absent mandatory fields
//! render as empty text so field positions stay stable.

use crate::tree::Fields;

pub(super) fn origin(f: &Fields) -> String {
    format!(
        "{} {} {} {} IP{} {}",
        f.get("username"),
        f.get("sessionId"),
        f.get("sessionVersion"),
        f.get("netType"),
        f.get("ipVer"),
        f.get("address")
    )
}

pub(super) fn timing(f: &Fields) -> String {
    format!("{} {}", f.get("start"), f.get("stop"))
}

pub(super) fn connection(f: &Fields) -> String {
    format!("IN IP{} {}", f.get("version"), f.get("ip"))
}

pub(super) fn bandwidth(f: &Fields) -> String {
    format!("{}:{}", f.get("type"), f.get("limit"))
}

/// m= body; all four positions are always rendered, an absent payload list
/// leaves the last position empty.
pub(super) fn media_line(f: &Fields) -> String {
    format!(
        "{} {} {} {}",
        f.get("type"),
        f.get("port"),
        f.get("protocol"),
        f.get("payloads")
    )
}

/// a=rtpmap; an encoding keeps the rate slot rendered even when the rate
/// itself is absent.
pub(super) fn rtpmap(f: &Fields) -> String {
    if f.has("encoding") {
        format!(
            "rtpmap:{} {}/{}/{}",
            f.get("payload"),
            f.get("codec"),
            f.get("rate"),
            f.get("encoding")
        )
    } else if f.has("rate") {
        format!(
            "rtpmap:{} {}/{}",
            f.get("payload"),
            f.get("codec"),
            f.get("rate")
        )
    } else {
        format!("rtpmap:{} {}", f.get("payload"), f.get("codec"))
    }
}

pub(super) fn fmtp(f: &Fields) -> String {
    format!("fmtp:{} {}", f.get("payload"), f.get("config"))
}

pub(super) fn rtcp(f: &Fields) -> String {
    if f.has("address") {
        format!(
            "rtcp:{} {} IP{} {}",
            f.get("port"),
            f.get("netType"),
            f.get("ipVer"),
            f.get("address")
        )
    } else {
        format!("rtcp:{}", f.get("port"))
    }
}

pub(super) fn rtcp_fb_trr_int(f: &Fields) -> String {
    format!("rtcp-fb:{} trr-int {}", f.get("payload"), f.get("value"))
}

pub(super) fn rtcp_fb(f: &Fields) -> String {
    if f.has("subtype") {
        format!(
            "rtcp-fb:{} {} {}",
            f.get("payload"),
            f.get("type"),
            f.get("subtype")
        )
    } else {
        format!("rtcp-fb:{} {}", f.get("payload"), f.get("type"))
    }
}

/// a=extmap; the direction suffix and the encrypt URI segment are
/// independent of each other.
pub(super) fn extmap(f: &Fields) -> String {
    let mut line = format!("extmap:{}", f.get("value"));
    if f.has("direction") {
        line.push('/');
        line.push_str(f.get("direction"));
    }
    if f.has("encrypt-uri") {
        line.push(' ');
        line.push_str(f.get("encrypt-uri"));
    }
    line.push(' ');
    line.push_str(f.get("uri"));
    if f.has("config") {
        line.push(' ');
        line.push_str(f.get("config"));
    }
    line
}

pub(super) fn crypto(f: &Fields) -> String {
    if f.has("sessionConfig") {
        format!(
            "crypto:{} {} {} {}",
            f.get("id"),
            f.get("suite"),
            f.get("config"),
            f.get("sessionConfig")
        )
    } else {
        format!(
            "crypto:{} {} {}",
            f.get("id"),
            f.get("suite"),
            f.get("config")
        )
    }
}

pub(super) fn fingerprint(f: &Fields) -> String {
    format!("fingerprint:{} {}", f.get("type"), f.get("hash"))
}

/// a=candidate; raddr implies the rport segment, the remaining extensions
/// render independently in their wire order.
pub(super) fn candidate(f: &Fields) -> String {
    let mut line = format!(
        "candidate:{} {} {} {} {} {} typ {}",
        f.get("foundation"),
        f.get("component"),
        f.get("transport"),
        f.get("priority"),
        f.get("ip"),
        f.get("port"),
        f.get("type")
    );
    if f.has("raddr") {
        line.push_str(&format!(" raddr {} rport {}", f.get("raddr"), f.get("rport")));
    }
    if f.has("tcptype") {
        line.push_str(&format!(" tcptype {}", f.get("tcptype")));
    }
    if f.has("generation") {
        line.push_str(&format!(" generation {}", f.get("generation")));
    }
    if f.has("network-id") {
        line.push_str(&format!(" network-id {}", f.get("network-id")));
    }
    if f.has("network-cost") {
        line.push_str(&format!(" network-cost {}", f.get("network-cost")));
    }
    line
}

/// a=ssrc; the space separator still renders when only the value side of
/// the attribute pair is present.
pub(super) fn ssrc(f: &Fields) -> String {
    let mut line = format!("ssrc:{}", f.get("id"));
    if f.has("attribute") {
        line.push(' ');
        line.push_str(f.get("attribute"));
    }
    if f.has("value") {
        if !f.has("attribute") {
            line.push(' ');
        }
        line.push(':');
        line.push_str(f.get("value"));
    }
    line
}

pub(super) fn ssrc_group(f: &Fields) -> String {
    format!("ssrc-group:{} {}", f.get("semantics"), f.get("ssrcs"))
}

/// The space after the colon is part of the established wire form.
pub(super) fn msid_semantic(f: &Fields) -> String {
    format!("msid-semantic: {} {}", f.get("semantic"), f.get("token"))
}

pub(super) fn group(f: &Fields) -> String {
    format!("group:{} {}", f.get("type"), f.get("mids"))
}

pub(super) fn sctpmap(f: &Fields) -> String {
    if f.has("maxMessageSize") {
        format!(
            "sctpmap:{} {} {}",
            f.get("sctpmapNumber"),
            f.get("app"),
            f.get("maxMessageSize")
        )
    } else {
        format!("sctpmap:{} {}", f.get("sctpmapNumber"), f.get("app"))
    }
}

pub(super) fn rid(f: &Fields) -> String {
    if f.has("params") {
        format!(
            "rid:{} {} {}",
            f.get("id"),
            f.get("direction"),
            f.get("params")
        )
    } else {
        format!("rid:{} {}", f.get("id"), f.get("direction"))
    }
}

pub(super) fn imageattr(f: &Fields) -> String {
    let mut line = format!(
        "imageattr:{} {} {}",
        f.get("pt"),
        f.get("dir1"),
        f.get("attrs1")
    );
    if f.has("dir2") {
        line.push_str(&format!(" {} {}", f.get("dir2"), f.get("attrs2")));
    }
    line
}

pub(super) fn simulcast(f: &Fields) -> String {
    let mut line = format!("simulcast:{} {}", f.get("dir1"), f.get("list1"));
    if f.has("dir2") {
        line.push_str(&format!(" {} {}", f.get("dir2"), f.get("list2")));
    }
    line
}

/// Draft-03 simulcast keeps its space after the colon.
pub(super) fn simulcast_03(f: &Fields) -> String {
    format!("simulcast: {}", f.get("value"))
}

pub(super) fn source_filter(f: &Fields) -> String {
    format!(
        "source-filter: {} {} {} {} {}",
        f.get("filterMode"),
        f.get("netType"),
        f.get("addressTypes"),
        f.get("destAddress"),
        f.get("srcList")
    )
}

pub(super) fn ts_ref_clock(f: &Fields) -> String {
    let mut line = format!("ts-refclk:{}", f.get("clksrc"));
    if f.has("clksrcExt") {
        line.push('=');
        line.push_str(f.get("clksrcExt"));
    }
    line
}

pub(super) fn media_clk(f: &Fields) -> String {
    let mut line = String::from("mediaclk:");
    if f.has("id") {
        line.push_str("id=");
        line.push_str(f.get("id"));
        line.push(' ');
    }
    line.push_str(f.get("mediaClockName"));
    if f.has("mediaClockValue") {
        line.push('=');
        line.push_str(f.get("mediaClockValue"));
    }
    if f.has("rateNumerator") {
        line.push_str(" rate=");
        line.push_str(f.get("rateNumerator"));
    }
    if f.has("rateDenominator") {
        line.push('/');
        line.push_str(f.get("rateDenominator"));
    }
    line
}

pub(super) fn bfcp_floor_id(f: &Fields) -> String {
    format!("floorid:{} mstrm:{}", f.get("id"), f.get("mStream"))
}

/// Catch-all attributes re-emit exactly the text they preserved.
pub(super) fn invalid(f: &Fields) -> String {
    f.get("value").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        let mut f = Fields::new();
        for (name, value) in pairs {
            f.insert(name, value);
        }
        f
    }

    #[test]
    fn test_rtpmap_shapes() {
        let full = fields(&[
            ("payload", "111"),
            ("codec", "opus"),
            ("rate", "48000"),
            ("encoding", "2"),
        ]);
        assert_eq!(rtpmap(&full), "rtpmap:111 opus/48000/2");

        let no_encoding = fields(&[("payload", "0"), ("codec", "PCMU"), ("rate", "8000")]);
        assert_eq!(rtpmap(&no_encoding), "rtpmap:0 PCMU/8000");

        let bare = fields(&[("payload", "98"), ("codec", "telephone-event")]);
        assert_eq!(rtpmap(&bare), "rtpmap:98 telephone-event");

        // an absent rate still renders its slot ahead of the encoding
        let dangling = fields(&[("payload", "98"), ("codec", "x"), ("encoding", "2")]);
        assert_eq!(rtpmap(&dangling), "rtpmap:98 x//2");
    }

    #[test]
    fn test_candidate_optional_segments() {
        let host = fields(&[
            ("foundation", "0"),
            ("component", "1"),
            ("transport", "UDP"),
            ("priority", "2113667327"),
            ("ip", "203.0.113.1"),
            ("port", "54400"),
            ("type", "host"),
            ("generation", "0"),
        ]);
        assert_eq!(
            candidate(&host),
            "candidate:0 1 UDP 2113667327 203.0.113.1 54400 typ host generation 0"
        );

        let srflx = fields(&[
            ("foundation", "1"),
            ("component", "1"),
            ("transport", "tcp"),
            ("priority", "1518280447"),
            ("ip", "198.51.100.7"),
            ("port", "9"),
            ("type", "srflx"),
            ("raddr", "10.0.1.1"),
            ("rport", "8998"),
            ("tcptype", "active"),
            ("generation", "0"),
            ("network-id", "3"),
            ("network-cost", "10"),
        ]);
        assert_eq!(
            candidate(&srflx),
            "candidate:1 1 tcp 1518280447 198.51.100.7 9 typ srflx raddr 10.0.1.1 rport 8998 \
             tcptype active generation 0 network-id 3 network-cost 10"
        );
    }

    #[test]
    fn test_extmap_segments_are_independent() {
        let plain = fields(&[("value", "1"), ("uri", "URI-toffset")]);
        assert_eq!(extmap(&plain), "extmap:1 URI-toffset");

        let directed = fields(&[("value", "2"), ("direction", "recvonly"), ("uri", "URI-gps")]);
        assert_eq!(extmap(&directed), "extmap:2/recvonly URI-gps");

        let encrypted = fields(&[
            ("value", "3"),
            ("encrypt-uri", "urn:ietf:params:rtp-hdrext:encrypt"),
            ("uri", "URI-frametype"),
            ("config", "short"),
        ]);
        assert_eq!(
            extmap(&encrypted),
            "extmap:3 urn:ietf:params:rtp-hdrext:encrypt URI-frametype short"
        );
    }

    #[test]
    fn test_rtcp_with_and_without_address() {
        let full = fields(&[
            ("port", "65179"),
            ("netType", "IN"),
            ("ipVer", "4"),
            ("address", "10.23.34.567"),
        ]);
        assert_eq!(rtcp(&full), "rtcp:65179 IN IP4 10.23.34.567");
        assert_eq!(rtcp(&fields(&[("port", "65179")])), "rtcp:65179");
    }

    #[test]
    fn test_ssrc_attribute_and_value() {
        let flag = fields(&[("id", "2566107569"), ("attribute", "cname")]);
        assert_eq!(ssrc(&flag), "ssrc:2566107569 cname");

        let valued = fields(&[
            ("id", "2566107569"),
            ("attribute", "cname"),
            ("value", "t9YU8M1UxTF8Y1A1"),
        ]);
        assert_eq!(ssrc(&valued), "ssrc:2566107569 cname:t9YU8M1UxTF8Y1A1");

        let value_only = fields(&[("id", "2566107569"), ("value", "tail")]);
        assert_eq!(ssrc(&value_only), "ssrc:2566107569 :tail");
    }

    #[test]
    fn test_mediaclk_forms() {
        let direct = fields(&[("mediaClockName", "direct"), ("mediaClockValue", "963214424")]);
        assert_eq!(media_clk(&direct), "mediaclk:direct=963214424");

        let with_id = fields(&[
            ("id", "ptp-clock"),
            ("mediaClockName", "sender"),
            ("rateNumerator", "90000"),
            ("rateDenominator", "1"),
        ]);
        assert_eq!(media_clk(&with_id), "mediaclk:id=ptp-clock sender rate=90000/1");
    }

    #[test]
    fn test_msid_semantic_keeps_colon_space() {
        let f = fields(&[("semantic", "WMS"), ("token", "ma")]);
        assert_eq!(msid_semantic(&f), "msid-semantic: WMS ma");
    }
}
