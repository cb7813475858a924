//! Field parsing rules
//!
//! Every parser returns `Option`: `None` means the attribute is omitted from
//! the graph. None of these functions fail loudly.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Normalize free text into an identifier-safe token.
///
/// Trims, lowercases, turns spaces into underscores and strips periods and
/// commas. Anything else that may not appear in an IRI fragment is
/// percent-encoded.
///
/// ```
/// use film_onto::ingest::slugify;
/// assert_eq!(slugify("  Batman Returns_1992 "), "batman_returns_1992");
/// assert_eq!(slugify("Warner Bros."), "warner_bros");
/// assert_eq!(slugify("Dr. Strangelove, or"), "dr_strangelove_or");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());

    for c in text.trim().to_lowercase().chars() {
        match c {
            ' ' => slug.push('_'),
            '.' | ',' => {}
            c if is_fragment_safe(c) => slug.push(c),
            c => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    slug.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }

    slug
}

/// ASCII characters allowed verbatim in an IRI fragment
fn is_fragment_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '_' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ';' | '=' | ':' | '@'
        )
}

/// First run of ASCII digits anywhere in the string.
///
/// `"PG-13"` → 13, `"140 min"` → 140, `"84%"` → 84, `"R"` → `None`.
pub fn extract_int(raw: &str) -> Option<i64> {
    DIGIT_RUN.find(raw)?.as_str().parse().ok()
}

/// Decimal number; non-numeric, empty and non-finite input are `None`
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Whole number. Integral decimals such as `"82.0"` are accepted.
pub fn parse_whole(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }

    let value = parse_decimal(raw)?;
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// Release date components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

/// Parse `month/day/year`. Anything but three numeric parts is `None`;
/// partial dates are never returned.
pub fn parse_release_date(raw: &str) -> Option<ReleaseDate> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };

    Some(ReleaseDate {
        year: year.trim().parse().ok()?,
        month: month.trim().parse().ok()?,
        day: day.trim().parse().ok()?,
    })
}

/// Empty cells and the `N/A` placeholder carry no value
pub fn is_absent(item: &str) -> bool {
    let item = item.trim();
    item.is_empty() || item.eq_ignore_ascii_case("n/a")
}

/// Comma-separated list; items trimmed, absent items dropped
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !is_absent(item))
        .collect()
}

/// A writer credit: display name plus lowercased role annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterCredit {
    pub name: String,
    pub role: String,
}

/// Split the writer field into credits.
///
/// `"Sam Hamm (story), Warren Skaaren"` gives `("Sam Hamm", "story")` and
/// `("Warren Skaaren", "")`. A segment with an annotation but no name (or an
/// `N/A` name) is returned with an empty name; callers skip it. Absent bare
/// segments are dropped.
pub fn parse_writers(raw: &str) -> Vec<WriterCredit> {
    let mut credits = Vec::new();

    for segment in raw.split(',').map(str::trim) {
        if segment.contains('(') && segment.contains(')') {
            if let Some((name, role)) = segment.split_once('(') {
                let name = if is_absent(name) { "" } else { name.trim() };
                credits.push(WriterCredit {
                    name: name.to_string(),
                    role: role
                        .trim_matches(|c| c == ' ' || c == ')')
                        .to_lowercase(),
                });
            }
        } else if !is_absent(segment) {
            credits.push(WriterCredit {
                name: segment.to_string(),
                role: String::new(),
            });
        }
    }

    credits
}

/// Writing credit kinds that link a film to a writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterRole {
    Story,
    Screenplay,
    Character,
}

impl WriterRole {
    /// Case-insensitive substring match, checked story, then screenplay,
    /// then character. Unknown or empty roles are `None`.
    pub fn classify(role: &str) -> Option<Self> {
        let role = role.to_lowercase();
        if role.contains("story") {
            Some(WriterRole::Story)
        } else if role.contains("screenplay") {
            Some(WriterRole::Screenplay)
        } else if role.contains("character") {
            Some(WriterRole::Character)
        } else {
            None
        }
    }
}
