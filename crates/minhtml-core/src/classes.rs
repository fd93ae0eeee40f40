//! Ordered set of CSS class tokens.

use std::io;

use indexmap::IndexSet;

use crate::attributes::write_attribute;
use crate::sink::Sink;

/// Class tokens of an element, kept in insertion order without duplicates.
///
/// Rendered as a single `class` attribute; nothing is written when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    tokens: IndexSet<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token; returns false if it was already present
    pub fn put(&mut self, token: impl Into<String>) -> bool {
        self.tokens.insert(token.into())
    }

    /// Remove a token, keeping the order of the remaining tokens
    pub fn del(&mut self, token: &str) -> bool {
        self.tokens.shift_remove(token)
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Space-separated attribute value
    pub fn value(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }

    /// Write ` class="t1 t2"`, or nothing when the set is empty
    pub fn write_to<S: Sink + ?Sized>(&self, out: &mut S) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        write_attribute(out, "class", &self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(classes: &ClassSet) -> String {
        let mut out = Vec::new();
        classes.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_put_dedupes() {
        let mut classes = ClassSet::new();
        assert!(classes.put("a"));
        assert!(classes.put("b"));
        assert!(!classes.put("a"));
        assert_eq!(classes.len(), 2);
        assert_eq!(render(&classes), r#" class="a b""#);
    }

    #[test]
    fn test_del_preserves_order() {
        let mut classes = ClassSet::new();
        for token in ["one", "two", "three", "four"] {
            classes.put(token);
        }
        assert!(classes.del("two"));
        assert!(!classes.del("two"));
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["one", "three", "four"]);
    }

    #[test]
    fn test_empty_writes_nothing() {
        let mut classes = ClassSet::new();
        assert_eq!(render(&classes), "");
        classes.put("x");
        classes.del("x");
        assert_eq!(render(&classes), "");
        classes.put("y");
        classes.clear();
        assert!(classes.is_empty());
    }
}
