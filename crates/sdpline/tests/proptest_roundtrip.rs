// Property tests: rendered documents are a parse/write fixpoint.

use proptest::prelude::*;
use sdpline::{parse, write, Bandwidth, Candidate, Fmtp, Media, Origin, Rtp, SessionDescription, Timing};

prop_compose! {
    fn origin_strategy()(
        username in "[a-zA-Z0-9-]{1,10}",
        session_id in "[0-9]{1,12}",
        session_version in "[0-9]{1,3}",
        ip_ver in prop::sample::select(vec!["4", "6"]),
        address in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
    ) -> Origin {
        Origin {
            username,
            session_id,
            session_version,
            net_type: "IN".to_string(),
            ip_ver: ip_ver.to_string(),
            address,
        }
    }
}

prop_compose! {
    fn rtp_strategy()(
        payload in "[0-9]{1,3}",
        codec in "[a-zA-Z][a-zA-Z0-9]{0,8}",
        rate in proptest::option::of("[0-9]{3,5}"),
        encoding in proptest::option::of("[12]"),
    ) -> Rtp {
        Rtp { payload, codec, rate, encoding }
    }
}

prop_compose! {
    fn fmtp_strategy()(
        payload in "[0-9]{1,3}",
        config in "[a-z]{1,8}=[a-z0-9]{1,6}(;[a-z]{1,8}=[a-z0-9]{1,6}){0,2}",
    ) -> Fmtp {
        Fmtp { payload, config }
    }
}

prop_compose! {
    fn bandwidth_strategy()(
        kind in prop::sample::select(vec!["AS", "TIAS", "CT", "RR", "RS"]),
        limit in "[0-9]{1,6}",
    ) -> Bandwidth {
        Bandwidth { r#type: kind.to_string(), limit }
    }
}

prop_compose! {
    fn candidate_strategy()(
        foundation in "[0-9]{1,6}",
        component in prop::sample::select(vec!["1", "2"]),
        transport in prop::sample::select(vec!["UDP", "TCP", "udp", "tcp"]),
        priority in "[0-9]{1,10}",
        ip in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        port in "[0-9]{1,5}",
        kind in prop::sample::select(vec!["host", "srflx", "prflx", "relay"]),
        relay in proptest::option::of((
            "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
            "[0-9]{1,5}",
        )),
        generation in proptest::option::of("[0-9]"),
    ) -> Candidate {
        let (raddr, rport) = match relay {
            Some((addr, port)) => (Some(addr), Some(port)),
            None => (None, None),
        };
        Candidate {
            foundation,
            component: component.to_string(),
            transport: transport.to_string(),
            priority,
            ip,
            port,
            r#type: kind.to_string(),
            raddr,
            rport,
            generation,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn media_strategy()(
        kind in prop::sample::select(vec!["audio", "video", "application"]),
        port in "[0-9]{1,5}",
        protocol in prop::sample::select(vec!["RTP/AVP", "RTP/SAVPF", "UDP/TLS/RTP/SAVPF"]),
        payloads in proptest::option::of("[0-9]{1,3}( [0-9]{1,3}){0,3}"),
        rtp in proptest::collection::vec(rtp_strategy(), 0..3),
        fmtp in proptest::collection::vec(fmtp_strategy(), 0..2),
        bandwidth in proptest::collection::vec(bandwidth_strategy(), 0..2),
        candidates in proptest::collection::vec(candidate_strategy(), 0..3),
        direction in proptest::option::of(prop::sample::select(vec![
            "sendrecv", "sendonly", "recvonly", "inactive",
        ])),
        mid in proptest::option::of("[a-z0-9]{1,4}"),
    ) -> Media {
        Media {
            payloads,
            rtp,
            fmtp,
            bandwidth,
            candidates,
            direction: direction.map(str::to_string),
            mid,
            ..Media::new(kind, port, protocol)
        }
    }
}

prop_compose! {
    fn session_strategy()(
        origin in proptest::option::of(origin_strategy()),
        name in proptest::option::of("[a-zA-Z0-9 -]{1,16}"),
        timing in proptest::option::of(("[0-9]{1,10}", "[0-9]{1,10}")),
        ice_ufrag in proptest::option::of("[a-zA-Z0-9+/]{4,8}"),
        ice_pwd in proptest::option::of("[a-zA-Z0-9+/]{8,24}"),
        media in proptest::collection::vec(media_strategy(), 0..3),
    ) -> SessionDescription {
        SessionDescription {
            version: Some("0".to_string()),
            origin,
            name,
            timing: timing.map(|(start, stop)| Timing { start, stop }),
            ice_ufrag,
            ice_pwd,
            media,
            ..Default::default()
        }
    }
}

proptest! {
    /// Rendering, reparsing and rendering again reproduces the first text.
    #[test]
    fn render_then_parse_is_fixpoint(session in session_strategy()) {
        let first = write(&session, None).unwrap();
        let reparsed = parse(&first).unwrap();
        let second = write(&reparsed, None).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The typed value stabilizes after one trip as well.
    #[test]
    fn reparse_is_typed_fixpoint(session in session_strategy()) {
        let text = write(&session, None).unwrap();
        let once = parse(&text).unwrap();
        let twice = parse(&write(&once, None).unwrap()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Arbitrary printable input never makes the parser fail.
    #[test]
    fn parse_accepts_arbitrary_lines(lines in proptest::collection::vec("[ -~]{0,40}", 0..16)) {
        let text = lines.join("\r\n");
        prop_assert!(parse(&text).is_ok());
    }
}
