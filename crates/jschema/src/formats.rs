//! String predicates behind the `format` keyword.
//!
//! Every predicate is pure and total: malformed input is a `false` verdict,
//! never an error. Draft-3 spellings (`host-name`, `ip-address`,
//! `utc-millisec`) are recognized alongside the current names.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

/// Look up the predicate for a format name. `None` means the name is not
/// recognized and the keyword imposes nothing.
pub(crate) fn find(name: &str) -> Option<fn(&str) -> bool> {
    Some(match name {
        "color" => is_valid_color,
        "hostname" | "host-name" => is_valid_hostname,
        "idn-hostname" => is_valid_idn_hostname,
        "ipv4" | "ip-address" => is_valid_ipv4,
        "ipv6" => is_valid_ipv6,
        "email" => is_valid_email,
        "idn-email" => is_valid_idn_email,
        "uri" => is_valid_uri,
        "uri-reference" => is_valid_uri_reference,
        "uri-template" => is_valid_uri_template,
        "iri" => is_valid_iri,
        "iri-reference" => is_valid_iri_reference,
        "json-pointer" => is_valid_json_pointer,
        "relative-json-pointer" => is_valid_relative_json_pointer,
        "date" => is_valid_date,
        "time" => is_valid_time,
        "date-time" => is_valid_date_time,
        "utc-millisec" => is_valid_utc_millisec,
        "regex" => is_valid_regex,
        _ => return None,
    })
}

const NAMED_COLORS: &[&str] = &[
    "aqua", "black", "blue", "fuchsia", "gray", "green", "lime", "maroon", "navy", "olive",
    "orange", "purple", "red", "silver", "teal", "white", "yellow",
];

fn is_valid_color(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }
    let lowered = value.to_ascii_lowercase();
    NAMED_COLORS.contains(&lowered.as_str())
}

fn is_valid_hostname(value: &str) -> bool {
    // One trailing dot is the fully-qualified form.
    let value = value.strip_suffix('.').unwrap_or(value);
    if value.is_empty() || value.len() > 253 {
        return false;
    }
    value.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

fn is_valid_idn_hostname(value: &str) -> bool {
    match idna::domain_to_ascii(value) {
        Ok(ascii) => is_valid_hostname(&ascii),
        Err(_) => false,
    }
}

fn is_valid_ipv4(value: &str) -> bool {
    // `Ipv4Addr` parsing already rejects leading zeros and short forms.
    value.parse::<Ipv4Addr>().is_ok()
}

fn is_valid_ipv6(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
                | '-'
        )
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.is_empty() {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    if !local.chars().all(|c| is_atext(c) || c == '.') {
        return false;
    }
    if let Some(literal) = domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        return match literal.strip_prefix("IPv6:") {
            Some(v6) => is_valid_ipv6(v6),
            None => is_valid_ipv4(literal),
        };
    }
    is_valid_hostname(domain)
}

fn is_valid_idn_email(value: &str) -> bool {
    // Internationalized mailboxes: one separator, both sides non-empty.
    matches!(value.rsplit_once('@'), Some((local, domain)) if !local.is_empty() && !domain.is_empty())
}

fn is_valid_uri(value: &str) -> bool {
    fluent_uri::Uri::parse(value).is_ok()
}

fn is_valid_uri_reference(value: &str) -> bool {
    fluent_uri::UriRef::parse(value).is_ok()
}

fn is_valid_iri(value: &str) -> bool {
    fluent_uri::Iri::parse(value).is_ok()
}

fn is_valid_iri_reference(value: &str) -> bool {
    fluent_uri::IriRef::parse(value).is_ok()
}

fn is_valid_uri_template(value: &str) -> bool {
    static TEMPLATE: OnceLock<fancy_regex::Regex> = OnceLock::new();
    let regex = TEMPLATE.get_or_init(|| {
        fancy_regex::Regex::new(
            r#"(?x)
            ^(?:
                [^\x00-\x20"'<>%\\^`{|}\x7F]
              | %[0-9A-Fa-f]{2}
              | \{[+\#./;?&=,!@|]?
                (?:[A-Za-z0-9_.]|%[0-9A-Fa-f]{2})+ (?::[1-9][0-9]{0,3}|\*)?
                (?:,(?:[A-Za-z0-9_.]|%[0-9A-Fa-f]{2})+ (?::[1-9][0-9]{0,3}|\*)?)*
                \}
            )*$"#,
        )
        .expect("URI template pattern compiles")
    });
    regex.is_match(value).unwrap_or(false)
}

fn tilde_escapes_ok(pointer: &str) -> bool {
    let mut chars = pointer.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '~' && !matches!(chars.peek(), Some('0') | Some('1')) {
            return false;
        }
    }
    true
}

fn is_valid_json_pointer(value: &str) -> bool {
    (value.is_empty() || value.starts_with('/')) && tilde_escapes_ok(value)
}

fn is_valid_relative_json_pointer(value: &str) -> bool {
    let digits = value.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    // No leading zeros, except the bare "0".
    if digits > 1 && value.starts_with('0') {
        return false;
    }
    let rest = &value[digits..];
    rest == "#" || is_valid_json_pointer(rest)
}

fn parse_number(digits: &str) -> Option<u32> {
    if digits.bytes().all(|b| b.is_ascii_digit()) && !digits.is_empty() {
        digits.parse().ok()
    } else {
        None
    }
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
            if leap {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// `yyyy-MM-dd` with calendar-aware day ranges.
fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let (Some(year), Some(month), Some(day)) = (
        parse_number(&value[..4]),
        parse_number(&value[5..7]),
        parse_number(&value[8..10]),
    ) else {
        return false;
    };
    (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month)
}

/// `HH:mm:ss` with up to seven fractional digits and an optional offset
/// (`Z` or `±hh:mm`), the `HH:mm:ss.FFFFFFFK` shape.
fn is_valid_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 8 || bytes[2] != b':' || bytes[5] != b':' {
        return false;
    }
    let (Some(hours), Some(minutes), Some(seconds)) = (
        parse_number(&value[..2]),
        parse_number(&value[3..5]),
        parse_number(&value[6..8]),
    ) else {
        return false;
    };
    if hours > 23 || minutes > 59 || seconds > 59 {
        return false;
    }
    let mut rest = &value[8..];
    if let Some(fraction) = rest.strip_prefix('.') {
        let digits = fraction.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 || digits > 7 {
            return false;
        }
        rest = &fraction[digits..];
    }
    match rest {
        "" | "Z" | "z" => true,
        offset => {
            let Some(signed) = offset
                .strip_prefix('+')
                .or_else(|| offset.strip_prefix('-'))
            else {
                return false;
            };
            let bytes = signed.as_bytes();
            if bytes.len() != 5 || bytes[2] != b':' {
                return false;
            }
            matches!(
                (parse_number(&signed[..2]), parse_number(&signed[3..5])),
                (Some(hours), Some(minutes)) if hours <= 23 && minutes <= 59
            )
        }
    }
}

/// `yyyy-MM-dd\THH:mm:ss.FFFFFFFK`, case-insensitive separator.
fn is_valid_date_time(value: &str) -> bool {
    if value.len() < 11 {
        return false;
    }
    let Some(separator) = value.as_bytes().get(10) else {
        return false;
    };
    if !matches!(separator, b'T' | b't') {
        return false;
    }
    is_valid_date(&value[..10]) && is_valid_time(&value[11..])
}

/// Milliseconds since the epoch, as a plain numeric string.
fn is_valid_utc_millisec(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|millis| millis.is_finite())
}

fn is_valid_regex(value: &str) -> bool {
    fancy_regex::Regex::new(value).is_ok()
}
