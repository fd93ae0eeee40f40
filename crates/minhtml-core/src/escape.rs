//! Escaping helpers applied when raw strings become stored values.
//!
//! Text content and attribute values are escaped once, when they enter the
//! tree. The serializer writes stored values verbatim.

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that may not appear in an attribute name
static INVALID_ATTRIBUTE_NAME_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\s"'<>/=\x00-\x1F\x7F]"#).expect("attribute name pattern is valid")
});

/// Escape text content (`&`, `<`, `>`, `"`)
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape_with(s, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        _ => None,
    })
}

/// Escape an attribute value for use inside double quotes
pub fn escape_attribute(s: &str) -> Cow<'_, str> {
    escape_with(s, |c| match c {
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

/// Normalize an attribute name: trim, lowercase and drop illegal characters.
///
/// Returns an empty string when nothing usable is left.
pub fn normalize_attribute_name(name: &str) -> Cow<'_, str> {
    let trimmed = name.trim();
    let needs_lowercase = trimmed.chars().any(|c| c.is_uppercase());
    if !needs_lowercase && !INVALID_ATTRIBUTE_NAME_CHARS.is_match(trimmed) {
        return Cow::Borrowed(trimmed);
    }
    let lowered = trimmed.to_lowercase();
    Cow::Owned(
        INVALID_ATTRIBUTE_NAME_CHARS
            .replace_all(&lowered, "")
            .into_owned(),
    )
}

fn escape_with(s: &str, replacement: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = s.find(|c| replacement(c).is_some()) else {
        return Cow::Borrowed(s);
    };

    let mut result = String::with_capacity(s.len() + 8);
    result.push_str(&s[..first]);
    for c in s[first..].chars() {
        match replacement(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// A URL-typed attribute value.
///
/// URLs are written into attributes verbatim, without entity escaping. The
/// only characters that could break out of a quoted attribute (`"`, `<`, `>`)
/// are percent-encoded on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Url(String);

impl Url {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.contains(['"', '<', '>']) {
            return Self(url);
        }
        let encoded = escape_with(&url, |c| match c {
            '"' => Some("%22"),
            '<' => Some("%3C"),
            '>' => Some("%3E"),
            _ => None,
        });
        Self(encoded.into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Url {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Url {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
