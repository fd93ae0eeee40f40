//! # minhtml
//!
//! Build HTML5 documents in Rust and render them with minimal markup.
//!
//! Trees are built from [`Node`]s with chainable builder methods; the
//! renderer then writes them out leaving away every start and end tag HTML5
//! declares optional, e.g. `</li>` before another `<li>` or `<tbody>` in
//! front of its first row.
//!
//! ## Example
//!
//! ```rust
//! use minhtml::tags::*;
//! use minhtml::{to_string, Attributes, Options};
//!
//! let doc = document()
//!     .attr("lang", "en")
//!     .with_head(|head| {
//!         head.append_child(meta_charset("utf-8"))
//!             .append_child(title().child("Shopping"));
//!     })
//!     .with_body(|body| {
//!         body.append_child(h1().child("List"))
//!             .append_child(ul().child(li().child("Milk")).child(li().child("Eggs")));
//!     });
//!
//! let html = to_string(&doc, &Options::default());
//! assert_eq!(
//!     html,
//!     "<!DOCTYPE html>\n<html lang=\"en\"><meta charset=\"utf-8\"><title>Shopping</title>\
//!      <h1>List</h1><ul><li>Milk<li>Eggs</ul>"
//! );
//! ```
//!
//! ## Page helpers
//!
//! ```rust
//! use minhtml::tags::*;
//! use minhtml::{to_string, DocumentExt, Options};
//!
//! let mut page = html("en");
//! page.add_title("Home").add_stylesheet("/site.css");
//! page.body_mut().append_child(p().child("Welcome"));
//!
//! assert_eq!(
//!     to_string(&page, &Options::default()),
//!     "<!DOCTYPE html>\n<html lang=\"en\"><meta charset=\"utf-8\"><title>Home</title>\
//!      <link href=\"/site.css\" rel=\"stylesheet\" type=\"text/css\"><p>Welcome"
//! );
//! ```
//!
//! ## Explicit output
//!
//! ```rust
//! use minhtml::tags::*;
//! use minhtml::{node_to_string, Options};
//!
//! let list = ul().child(li().child("a")).child(li().child("b"));
//! let options = Options::default().with_disable_omit(true);
//! assert_eq!(node_to_string(&list.into(), &options), "<ul><li>a</li><li>b</li></ul>");
//! ```

pub mod entity;
#[cfg(feature = "tags")]
pub mod page;
#[cfg(feature = "tags")]
pub mod tags;

#[cfg(feature = "tags")]
pub use page::DocumentExt;

pub use minhtml_core::escape::{escape_attribute, escape_text, normalize_attribute_name};
pub use minhtml_core::omission::{can_omit_end, can_omit_start};
pub use minhtml_core::{
    node_to_string, render, render_node, to_string, AttributeSet, Attributes, Category, ClassSet,
    Document, Element, Error, Node, Options, Result, Sink, Tag, TagKind, Text, UnknownTag, Url,
    VoidElement, DOCTYPE,
};
