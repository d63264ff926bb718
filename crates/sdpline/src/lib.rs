//! Grammar-driven SDP parser and writer
//!
//! This crate parses Session Description Protocol text (RFC 8866) into a
//! typed, JSON-friendly [`SessionDescription`] and renders it back out,
//! line by line, from one shared grammar table. Parsing is lenient:
//! unrecognized attribute lines are preserved verbatim rather than
//! rejected, and unknown line types are dropped.
//!
//! ```
//! use sdpline::{parse, write};
//!
//! let sdp = "v=0\r\n\
//!            o=- 20518 0 IN IP4 203.0.113.1\r\n\
//!            s=-\r\n\
//!            t=0 0\r\n\
//!            m=audio 54400 RTP/SAVPF 0 96\r\n\
//!            a=rtpmap:0 PCMU/8000\r\n\
//!            a=rtpmap:96 opus/48000/2\r\n";
//!
//! let session = parse(sdp)?;
//! assert_eq!(session.media[0].r#type, "audio");
//! assert_eq!(session.media[0].rtp[1].codec, "opus");
//!
//! // Rendering walks the same grammar table, so a parsed session
//! // round-trips byte for byte.
//! assert_eq!(write(&session, None)?, sdp);
//! # Ok::<(), sdpline::Error>(())
//! ```

// Declare modules
pub mod error;
mod grammar;
pub mod parser;
mod tree;
pub mod types;
pub mod writer;

// Re-export key public items
pub use error::{Error, Result};
pub use parser::values::{
    parse_fmtp_config, parse_image_attributes, parse_params, parse_payloads,
    parse_remote_candidates, parse_simulcast_stream_list, ParamMap, RemoteCandidate,
    SimulcastStream,
};
pub use parser::{parse, values};
pub use types::*;
pub use writer::{write, WriteOptions, DEFAULT_INNER_ORDER, DEFAULT_OUTER_ORDER};

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::parser::parse;
    pub use crate::parser::values::{parse_params, parse_payloads};
    pub use crate::types::{Media, SessionDescription};
    pub use crate::writer::{write, WriteOptions};
}
