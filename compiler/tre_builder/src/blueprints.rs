//! Ready-made builders for common formats.
//!
//! Each function returns a fresh [`PatternBuilder`] anchored at both ends, so
//! the compiled matcher validates a whole string. Use them directly or embed
//! them in larger patterns with [`PatternBuilder::group`] (drop the anchors by
//! building the fragment yourself in that case).
//!
//! These are pragmatic shapes, not full grammar validators: `email` does not
//! implement RFC 5322 and `url` accepts any dotted host.

use crate::PatternBuilder;

const HEX_DIGIT: &str = "[0-9a-fA-F]";

fn hex_digits(n: usize) -> PatternBuilder {
    PatternBuilder::new().raw(HEX_DIGIT).exactly(n)
}

/// `local@domain.tld`
pub fn email() -> PatternBuilder {
    PatternBuilder::new()
        .start_anchor()
        .raw(r"[a-zA-Z0-9._%+\-]+")
        .literal("@")
        .raw(r"[a-zA-Z0-9.\-]+\.[a-zA-Z]{1,}")
        .end_anchor()
}

/// Dotted-quad IPv4 address; each octet is captured.
pub fn ipv4() -> PatternBuilder {
    let octet = PatternBuilder::new().raw("25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9]");
    PatternBuilder::new()
        .start_anchor()
        .group(&octet)
        .literal(".")
        .group(&octet)
        .literal(".")
        .group(&octet)
        .literal(".")
        .group(&octet)
        .end_anchor()
}

/// Hyphenated UUID, any version, either case.
pub fn uuid() -> PatternBuilder {
    PatternBuilder::new()
        .start_anchor()
        .group(&hex_digits(8))
        .literal("-")
        .group(&hex_digits(4))
        .literal("-")
        .group(&hex_digits(4))
        .literal("-")
        .group(&hex_digits(4))
        .literal("-")
        .group(&hex_digits(12))
        .end_anchor()
}

/// `#rgb` or `#rrggbb`.
pub fn hex_color() -> PatternBuilder {
    PatternBuilder::new()
        .start_anchor()
        .literal("#")
        .non_capturing_group(&hex_digits(6).or([&hex_digits(3)]))
        .end_anchor()
}

/// `http` or `https` URL with optional port and path.
pub fn url() -> PatternBuilder {
    let scheme = PatternBuilder::new()
        .literal("http")
        .non_capturing_group(&PatternBuilder::new().literal("s"))
        .maybe()
        .literal("://");
    let host = PatternBuilder::new().raw(r"[a-zA-Z0-9.\-]+");
    let port = PatternBuilder::new()
        .non_capturing_group(&PatternBuilder::new().literal(":").digit().one_or_more())
        .maybe();
    let path = PatternBuilder::new()
        .non_capturing_group(
            &PatternBuilder::new()
                .literal("/")
                .raw(r"[a-zA-Z0-9._~:/?#\[\]@!$&'()*+,;=\-]")
                .zero_or_more(),
        )
        .maybe();

    PatternBuilder::new()
        .start_anchor()
        .raw(scheme.as_str())
        .raw(host.as_str())
        .raw(port.as_str())
        .raw(path.as_str())
        .end_anchor()
}

/// `YYYY-MM-DD`; year, month and day are captured.
///
/// Month and day ranges are checked, calendar validity is not.
pub fn date_ymd() -> PatternBuilder {
    let year = PatternBuilder::new().digit().exactly(4);
    let month = PatternBuilder::new().raw("0[1-9]|1[0-2]");
    let day = PatternBuilder::new().raw(r"0[1-9]|[12]\d|3[01]");
    PatternBuilder::new()
        .start_anchor()
        .group(&year)
        .literal("-")
        .group(&month)
        .literal("-")
        .group(&day)
        .end_anchor()
}

/// 24-hour `HH:MM:SS`; each field is captured.
pub fn time_hms() -> PatternBuilder {
    let hour = PatternBuilder::new().raw(r"[01]\d|2[0-3]");
    let minute = PatternBuilder::new().raw(r"[0-5]\d");
    let second = PatternBuilder::new().raw(r"[0-5]\d");
    PatternBuilder::new()
        .start_anchor()
        .group(&hour)
        .literal(":")
        .group(&minute)
        .literal(":")
        .group(&second)
        .end_anchor()
}

/// 3 to 16 ASCII letters, digits or underscores.
pub fn username() -> PatternBuilder {
    PatternBuilder::new()
        .start_anchor()
        .any_of("a-zA-Z0-9_")
        .between(3, 16)
        .end_anchor()
}

/// Lowercase words joined by single hyphens.
pub fn slug() -> PatternBuilder {
    let word = PatternBuilder::new().any_of("a-z0-9").one_or_more();
    PatternBuilder::new()
        .start_anchor()
        .raw(word.as_str())
        .non_capturing_group(&PatternBuilder::new().literal("-").raw(word.as_str()))
        .zero_or_more()
        .end_anchor()
}
