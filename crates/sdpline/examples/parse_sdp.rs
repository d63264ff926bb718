//! Parse SDP Demo
//!
//! Reads an SDP file (or a built-in WebRTC offer when no path is given),
//! parses it, prints a media summary and the JSON form, then renders the
//! session back to SDP text.
//!
//! Usage: cargo run --example parse_sdp [path/to/file.sdp]
//!
//! Set RUST_LOG=sdpline=trace to see which lines the parser drops.

use std::env;
use std::fs;

use sdpline::{parse, write};

const SAMPLE: &str = "v=0\r\n\
                      o=- 4962303333179871722 1 IN IP4 0.0.0.0\r\n\
                      s=-\r\n\
                      t=0 0\r\n\
                      a=group:BUNDLE audio video\r\n\
                      a=msid-semantic: WMS stream\r\n\
                      m=audio 9 UDP/TLS/RTP/SAVPF 111 0\r\n\
                      c=IN IP4 0.0.0.0\r\n\
                      a=rtpmap:111 opus/48000/2\r\n\
                      a=rtpmap:0 PCMU/8000\r\n\
                      a=fmtp:111 minptime=10;useinbandfec=1\r\n\
                      a=mid:audio\r\n\
                      a=sendrecv\r\n\
                      a=rtcp-mux\r\n\
                      m=video 9 UDP/TLS/RTP/SAVPF 96\r\n\
                      c=IN IP4 0.0.0.0\r\n\
                      a=rtpmap:96 VP8/90000\r\n\
                      a=rtcp-fb:96 nack pli\r\n\
                      a=mid:video\r\n\
                      a=sendrecv\r\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sdpline=debug")),
        )
        .init();

    let sdp = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let session = parse(&sdp)?;

    println!("Session: {}", session.name.as_deref().unwrap_or("(unnamed)"));
    if let Some(origin) = &session.origin {
        println!("Origin:  {} @ {}", origin.username, origin.address);
    }
    for media in &session.media {
        let codecs: Vec<String> = media
            .rtp
            .iter()
            .map(|rtp| format!("{} {}", rtp.payload, rtp.codec))
            .collect();
        println!(
            "Media:   {} port {} ({}) codecs [{}]",
            media.r#type,
            media.port,
            media.protocol,
            codecs.join(", ")
        );
    }

    println!("\n--- JSON ---");
    println!("{}", serde_json::to_string_pretty(&session)?);

    println!("\n--- Rendered SDP ---");
    print!("{}", write(&session, None)?);

    Ok(())
}
