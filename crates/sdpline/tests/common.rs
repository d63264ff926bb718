// Common test utilities for sdpline

/// Joins SDP lines with CRLF and terminates the document with CRLF.
pub fn sdp(lines: &[&str]) -> String {
    let mut text = lines.join("\r\n");
    text.push_str("\r\n");
    text
}

/// A two-section WebRTC offer whose lines already sit in the writer's
/// canonical order, so it survives a parse/write round trip byte for byte.
pub fn webrtc_offer() -> String {
    sdp(&[
        "v=0",
        "o=- 4962303333179871722 2 IN IP4 203.0.113.1",
        "s=-",
        "t=0 0",
        "a=fingerprint:sha-256 19:E2:1C:3B:4B:9F:81:E6:B8:5C:F4:A5:A8:D8:73:04:BB:05:2F:70:9F:04:A9:0E:05:E9:26:33:E8:70:88:A2",
        "a=ice-options:trickle",
        "a=msid-semantic: WMS 5Y2wZK8nANNAoVw6dSAHVjNxrD1ObBM2kBPy",
        "a=group:BUNDLE audio video",
        "m=audio 54609 UDP/TLS/RTP/SAVPF 109 0 8",
        "c=IN IP4 203.0.113.1",
        "a=rtpmap:109 opus/48000/2",
        "a=rtpmap:0 PCMU/8000",
        "a=rtpmap:8 PCMA/8000",
        "a=fmtp:109 maxplaybackrate=48000;stereo=1;useinbandfec=1",
        "a=rtcp:60065 IN IP4 203.0.113.1",
        "a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level",
        "a=extmap:2/recvonly urn:ietf:params:rtp-hdrext:csrc-audio-level",
        "a=setup:actpass",
        "a=mid:audio",
        "a=msid:5Y2wZK8nANNAoVw6dSAHVjNxrD1ObBM2kBPy d6a67436-1743-4b43-a771-a027e8b71b0e",
        "a=ptime:20",
        "a=sendrecv",
        "a=ice-ufrag:8hhY",
        "a=ice-pwd:asd88fgpdd777uzjYhagZg",
        "a=candidate:0 1 UDP 2122252543 192.0.2.3 54609 typ host",
        "a=candidate:1 1 UDP 1686052863 203.0.113.1 54609 typ srflx raddr 192.0.2.3 rport 54609",
        "a=end-of-candidates",
        "a=ssrc:2655508255 cname:KIXaNxUlU5DP3fVS",
        "a=rtcp-mux",
        "m=video 54610 UDP/TLS/RTP/SAVPF 120 121",
        "c=IN IP4 203.0.113.1",
        "a=rtpmap:120 VP8/90000",
        "a=rtpmap:121 VP9/90000",
        "a=fmtp:120 max-fs=12288;max-fr=60",
        "a=rtcp-fb:120 nack",
        "a=rtcp-fb:120 nack pli",
        "a=rtcp-fb:120 ccm fir",
        "a=rtcp-fb:121 goog-remb",
        "a=setup:actpass",
        "a=mid:video",
        "a=sendrecv",
        "a=ice-ufrag:8hhY",
        "a=ice-pwd:asd88fgpdd777uzjYhagZg",
        "a=ssrc:1366781084 cname:KIXaNxUlU5DP3fVS",
        "a=ssrc:1366781084 msid:5Y2wZK8nANNAoVw6dSAHVjNxrD1ObBM2kBPy 4ea4d4a1-2fda-4511-a9cc-1b32c2e59552",
        "a=ssrc-group:FID 1366781084 1366781085",
        "a=rtcp-mux",
        "a=rtcp-rsize",
    ])
}
