//! Outer line shape: one lowercase type character, `=`, content.
//!
//! Anything else (uppercase keys, missing `=`, leading whitespace) is not
//! an SDP line for our purposes and the caller skips it.

use nom::{
    character::complete::{anychar, char},
    combinator::{rest, verify},
    sequence::separated_pair,
    IResult,
};

/// Splits `t=content` into the type character and the content text.
/// The content may be empty.
pub(crate) fn split(input: &str) -> IResult<&str, (char, &str)> {
    separated_pair(
        verify(anychar, |c: &char| c.is_ascii_lowercase()),
        char('='),
        rest,
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_type_and_content() {
        assert_eq!(split("v=0"), Ok(("", ('v', "0"))));
        assert_eq!(
            split("m=audio 9 UDP/TLS/RTP/SAVPF 0"),
            Ok(("", ('m', "audio 9 UDP/TLS/RTP/SAVPF 0")))
        );
    }

    #[test]
    fn test_content_may_be_empty_or_contain_equals() {
        assert_eq!(split("v="), Ok(("", ('v', ""))));
        assert_eq!(split("a=msid:a=b"), Ok(("", ('a', "msid:a=b"))));
    }

    #[test]
    fn test_rejects_non_sdp_shapes() {
        assert!(split("V=0").is_err(), "uppercase keys are not SDP lines");
        assert!(split("vv=0").is_err());
        assert!(split("=value").is_err());
        assert!(split("no separator").is_err());
        assert!(split(" v=0").is_err());
    }
}
