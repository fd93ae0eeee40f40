//! Configuration options for HTML serialization

/// Options for rendering a tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Indentation unit for pretty-printing.
    ///
    /// Reserved: output is always written without added whitespace.
    pub indent: String,

    /// Write every start and end tag, ignoring the optional-tag rules
    pub disable_omit: bool,

    /// Write attributes in lexicographic order instead of insertion order
    pub sort_attributes: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_disable_omit(mut self, disable_omit: bool) -> Self {
        self.disable_omit = disable_omit;
        self
    }

    pub fn with_sort_attributes(mut self, sort_attributes: bool) -> Self {
        self.sort_attributes = sort_attributes;
        self
    }

    /// True if the optional-tag rules should be consulted
    pub(crate) fn omit_tags(&self) -> bool {
        !self.disable_omit
    }
}
