//! minhtml-core - HTML5 node tree and minimal serialization
//!
//! This crate provides the tree model and the serializer used by `minhtml`.
//! The serializer implements HTML5's optional-tag rules: start and end tags a
//! parser would imply anyway are left out, so the output is the smallest
//! markup that still parses to the same tree.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────┐        ┌────────────┐
//! Node builders ─▶│  Node tree   │ ─────▶ │ Serializer │ ──▶ Sink (bytes)
//!                 └──────────────┘        └─────┬──────┘
//!                                               │
//!                                      ┌────────▼───────┐
//!                                      │ Optional tags  │
//!                                      └────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use minhtml_core::tags::{li, ul};
//! use minhtml_core::{to_string, Document, Options};
//!
//! let doc = Document::new().with_body(|body| {
//!     body.append_child(ul().child(li().child("Hello")).child(li().child("World")));
//! });
//!
//! let html = to_string(&doc, &Options::default());
//! assert_eq!(html, "<!DOCTYPE html>\n<ul><li>Hello<li>World</ul>");
//! ```

mod attributes;
mod classes;
pub mod escape;
mod node;
pub mod omission;
mod options;
mod serialize;
mod sink;
mod tag;
pub mod tags;

pub use attributes::AttributeSet;
pub use classes::ClassSet;
pub use escape::Url;
pub use node::{Attributes, Document, Element, Node, Tag, Text, VoidElement};
pub use options::Options;
pub use serialize::{node_to_string, render, render_node, to_string, DOCTYPE};
pub use sink::Sink;
pub use tag::{Category, TagKind, UnknownTag};

/// Error type for tree operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Children were added to a node whose content model forbids them
    #[error("Structural misuse: cannot append children to {node}")]
    StructuralMisuse { node: String },

    /// An element was constructed with a kind of the wrong category
    #[error("Structural misuse: <{kind}> is a {actual:?} kind, expected {expected:?}")]
    WrongCategory {
        kind: TagKind,
        actual: Category,
        expected: Category,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
