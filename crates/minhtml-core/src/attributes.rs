//! Ordered attribute storage.

use std::io;

use crate::sink::Sink;

/// Attribute name/value pairs of a single element.
///
/// Elements carry a handful of attributes at most, so a flat list with a
/// linear scan is used instead of a hash map. Names are unique; `class` is
/// never stored here (see [`ClassSet`](crate::ClassSet)). Values are stored
/// already escaped for attribute context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<(String, String)>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing the value in place if the name exists
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get an attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove an attribute, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Write every attribute as ` name="value"` (or ` name` when the value is empty).
    ///
    /// With `sorted`, names are emitted in lexicographic order; otherwise in
    /// insertion order.
    pub fn write_to<S: Sink + ?Sized>(&self, out: &mut S, sorted: bool) -> io::Result<()> {
        if sorted {
            let mut entries: Vec<&(String, String)> = self.entries.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (name, value) in entries {
                write_attribute(out, name, value)?;
            }
        } else {
            for (name, value) in &self.entries {
                write_attribute(out, name, value)?;
            }
        }
        Ok(())
    }
}

pub(crate) fn write_attribute<S: Sink + ?Sized>(
    out: &mut S,
    name: &str,
    value: &str,
) -> io::Result<()> {
    out.write_byte(b' ')?;
    out.write_str(name)?;
    if !value.is_empty() {
        out.write_str("=\"")?;
        out.write_str(value)?;
        out.write_byte(b'"')?;
    }
    Ok(())
}
