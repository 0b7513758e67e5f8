//! Text formatting helpers shared by the renderers.
//!
//! All of these are pure: anything time-dependent takes the reference date as
//! an argument.

use chrono::NaiveDate;

/// Format an ISO date as `Thursday, August 15, 2024`.
///
/// Empty input gives empty output. Input that is not a `YYYY-MM-DD` date is
/// returned unchanged.
pub fn format_event_date(raw: &str) -> String {
    format_iso_date(raw, "%A, %B %-d, %Y")
}

/// Format an ISO date as `August 15, 2024`, used for the RSVP deadline.
pub fn format_deadline(raw: &str) -> String {
    format_iso_date(raw, "%B %-d, %Y")
}

fn format_iso_date(raw: &str, pattern: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date.format(pattern).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Encode a font family name for a Google Fonts `family=` parameter.
///
/// Spaces become `+`; anything else outside the URL-safe set is
/// percent-encoded.
pub fn font_family_query(name: &str) -> String {
    name.trim()
        .split(' ')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

/// Stylesheet URL requesting both theme fonts.
pub fn google_fonts_url(heading: &str, body: &str) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}&family={}&display=swap",
        font_family_query(heading),
        font_family_query(body)
    )
}

/// Escape text for use in HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode the characters that would end a quoted CSS `url('...')`.
///
/// The result still needs [`escape_html`] when it lands in an attribute.
pub fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\'' => out.push_str("%27"),
            '"' => out.push_str("%22"),
            '\\' => out.push_str("%5C"),
            '\n' => out.push_str("%0A"),
            '\r' => out.push_str("%0D"),
            _ => out.push(c),
        }
    }
    out
}

/// Download name for an event's archive.
///
/// `Summer Gala` becomes `summer-gala-website.zip`. Characters that cannot
/// appear in a file name (path separators included) become `-`, and leading
/// dots are dropped so the name never points at a parent directory. An empty
/// title falls back to `event-website.zip`.
pub fn archive_file_name(title: &str) -> String {
    let slug: String = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let slug = slug.trim_start_matches('.');

    if slug.is_empty() {
        "event-website.zip".to_string()
    } else {
        format!("{}-website.zip", slug)
    }
}
