//! HTML serialization
//!
//! Writes a node tree depth-first into a [`Sink`], leaving out start and end
//! tags wherever the optional-tag rules allow it.

use std::fmt;
use std::io;

use crate::node::{Attributes, Document, Element, Node, Tag};
use crate::omission::{can_omit_end, can_omit_start};
use crate::options::Options;
use crate::sink::Sink;

/// Written before the root element of every document
pub const DOCTYPE: &str = "<!DOCTYPE html>\n";

/// Render a document, doctype included
pub fn render<S: Sink + ?Sized>(doc: &Document, out: &mut S, options: &Options) -> io::Result<()> {
    tracing::debug!(?options, "rendering document");
    out.write_str(DOCTYPE)?;

    let root = doc.tag();
    let omit = options.omit_tags();
    // The html rules only look at the root's own attributes
    if !(omit && can_omit_start(root, &[], None, 0)) {
        write_start(root, options, out)?;
    }
    write_element(doc.head(), options, None, 0, out)?;
    write_element(doc.body(), options, None, 1, out)?;
    if !(omit && can_omit_end(root, None, 0)) {
        write_end(root, out)?;
    }
    Ok(())
}

/// Render a single node and its descendants.
///
/// The node is treated as having no parent, so its own end tag is only left
/// out for `html`, `head` and `body`.
pub fn render_node<S: Sink + ?Sized>(
    node: &Node,
    out: &mut S,
    options: &Options,
) -> io::Result<()> {
    write_node(node, options, None, 0, out)
}

/// Render a document to a string
pub fn to_string(doc: &Document, options: &Options) -> String {
    let mut out = Vec::with_capacity(4096);
    if let Err(err) = render(doc, &mut out, options) {
        tracing::warn!(%err, "rendering into a buffer failed, output is truncated");
    }
    buffer_to_string(out)
}

/// Render a node to a string
pub fn node_to_string(node: &Node, options: &Options) -> String {
    let mut out = Vec::with_capacity(256);
    if let Err(err) = render_node(node, &mut out, options) {
        tracing::warn!(%err, "rendering into a buffer failed, output is truncated");
    }
    buffer_to_string(out)
}

// Stored values come from `&str`, so the buffer is always valid UTF-8
fn buffer_to_string(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap_or_else(|err| {
        tracing::warn!(%err, "rendered output is not valid UTF-8");
        String::from_utf8_lossy(err.as_bytes()).into_owned()
    })
}

fn write_node<S: Sink + ?Sized>(
    node: &Node,
    options: &Options,
    parent: Option<&Element>,
    index: usize,
    out: &mut S,
) -> io::Result<()> {
    match node {
        Node::Text(text) => out.write_str(text.as_str()),
        Node::Void(void) => write_start(void.tag(), options, out),
        Node::Element(element) => write_element(element, options, parent, index, out),
    }
}

fn write_element<S: Sink + ?Sized>(
    element: &Element,
    options: &Options,
    parent: Option<&Element>,
    index: usize,
    out: &mut S,
) -> io::Result<()> {
    let tag = element.tag();
    let omit = options.omit_tags();

    if !(omit && can_omit_start(tag, element.children(), parent, index)) {
        write_start(tag, options, out)?;
    }

    // A parser drops one newline right after <pre>/<textarea>; add one back
    // so a leading newline in the content survives.
    let leading_newline = element
        .first_child()
        .and_then(Node::as_text)
        .is_some_and(|text| text.as_str().starts_with('\n'));
    if tag.kind().is_preformatted() && leading_newline {
        out.write_byte(b'\n')?;
    }

    for (i, child) in element.children().iter().enumerate() {
        write_node(child, options, Some(element), i, out)?;
    }

    if !(omit && can_omit_end(tag, parent, index)) {
        write_end(tag, out)?;
    }
    Ok(())
}

fn write_start<S: Sink + ?Sized>(tag: &Tag, options: &Options, out: &mut S) -> io::Result<()> {
    out.write_byte(b'<')?;
    out.write_str(tag.name())?;
    tag.classes().write_to(out)?;
    tag.attributes().write_to(out, options.sort_attributes)?;
    out.write_byte(b'>')
}

fn write_end<S: Sink + ?Sized>(tag: &Tag, out: &mut S) -> io::Result<()> {
    out.write_str("</")?;
    out.write_str(tag.name())?;
    out.write_byte(b'>')
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self, &Options::default()))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&node_to_string(self, &Options::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::VoidElement;
    use crate::tag::TagKind;

    fn el(kind: TagKind) -> Element {
        Element::new(kind)
    }

    fn li(text: &str) -> Element {
        el(TagKind::Li).child(text)
    }

    fn doc_with_body(children: Vec<Node>) -> Document {
        Document::new().with_body(|body| {
            body.append_children(children);
        })
    }

    fn explicit() -> Options {
        Options::default().with_disable_omit(true)
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert_eq!(to_string(&doc, &Options::default()), "<!DOCTYPE html>\n");
        assert_eq!(
            to_string(&doc, &explicit()),
            "<!DOCTYPE html>\n<html><head></head><body></body></html>"
        );
    }

    #[test]
    fn test_list_items_collapse() {
        let doc = doc_with_body(vec![el(TagKind::Ul)
            .child(li("Hello"))
            .child(li("World"))
            .into()]);

        assert_eq!(
            to_string(&doc, &Options::default()),
            "<!DOCTYPE html>\n<ul><li>Hello<li>World</ul>"
        );
    }

    #[test]
    fn test_paragraphs_around_div() {
        let doc = doc_with_body(vec![
            el(TagKind::P).child("Hello").into(),
            el(TagKind::Div).child("Hello").into(),
            el(TagKind::P).child("World").into(),
        ]);

        assert_eq!(
            to_string(&doc, &Options::default()),
            "<!DOCTYPE html>\n<p>Hello<div>Hello</div><p>World"
        );
    }

    #[test]
    fn test_table_collapses() {
        let table = el(TagKind::Table)
            .child(
                el(TagKind::Colgroup)
                    .child(VoidElement::new(TagKind::Col).attr("span", "2"))
                    .child(VoidElement::new(TagKind::Col)),
            )
            .child(el(TagKind::Thead).child(el(TagKind::Tr).child(el(TagKind::Th))))
            .child(el(TagKind::Tbody).child(el(TagKind::Tr).child(el(TagKind::Td))))
            .child(el(TagKind::Tfoot));

        assert_eq!(
            node_to_string(&table.clone().into(), &Options::default()),
            r#"<table><col span="2"><col><thead><tr><th><tbody><tr><td><tfoot></table>"#
        );
        assert_eq!(
            node_to_string(&table.into(), &explicit()),
            concat!(
                r#"<table><colgroup><col span="2"><col></colgroup>"#,
                "<thead><tr><th></th></tr></thead>",
                "<tbody><tr><td></td></tr></tbody>",
                "<tfoot></tfoot></table>"
            )
        );
    }

    #[test]
    fn test_head_and_body_content() {
        let doc = Document::new()
            .attr("lang", "en")
            .with_head(|head| {
                head.append_child(el(TagKind::Title).child("Page"));
                head.append_child(VoidElement::new(TagKind::Meta).attr("charset", "utf-8"));
            })
            .with_body(|body| {
                body.append_child(el(TagKind::H1).child("Title"));
            });

        assert_eq!(
            to_string(&doc, &Options::default()),
            r#"<!DOCTYPE html>
<html lang="en"><title>Page</title><meta charset="utf-8"><h1>Title</h1>"#
        );
    }

    #[test]
    fn test_body_start_kept_before_script() {
        let doc = doc_with_body(vec![el(TagKind::Script).child(Node::raw("go()")).into()]);
        assert_eq!(
            to_string(&doc, &Options::default()),
            "<!DOCTYPE html>\n<body><script>go()</script>"
        );
    }

    #[test]
    fn test_body_with_attributes_keeps_start() {
        let mut doc = Document::new();
        doc.body_mut().add_class(["dark"]);
        doc.body_mut().append_child("x");
        assert_eq!(
            to_string(&doc, &Options::default()),
            "<!DOCTYPE html>\n<body class=\"dark\">x"
        );
    }

    #[test]
    fn test_void_never_closes() {
        let br: Node = VoidElement::new(TagKind::Br).into();
        let img: Node = VoidElement::new(TagKind::Img)
            .attr("src", "a.png")
            .attr("alt", "")
            .into();

        for options in [Options::default(), explicit(), explicit().with_sort_attributes(true)] {
            assert_eq!(node_to_string(&br, &options), "<br>");
            let html = node_to_string(&img, &options);
            assert!(!html.contains('/'), "{html}");
            assert!(!html.contains("</img>"));
        }
        assert_eq!(node_to_string(&img, &Options::default()), r#"<img src="a.png" alt>"#);
    }

    #[test]
    fn test_class_written_before_attributes() {
        let div: Node = el(TagKind::Div)
            .attr("id", "x")
            .class("b")
            .attr("data-k", "v")
            .class("a")
            .into();

        assert_eq!(
            node_to_string(&div, &Options::default()),
            r#"<div class="b a" id="x" data-k="v"></div>"#
        );
        assert_eq!(
            node_to_string(&div, &Options::default().with_sort_attributes(true)),
            r#"<div class="b a" data-k="v" id="x"></div>"#
        );
    }

    #[test]
    fn test_sorted_attributes_ignore_insertion_order() {
        let a: Node = el(TagKind::A)
            .attr("title", "t")
            .attr("href", "/")
            .attr("rel", "next")
            .into();
        let b: Node = el(TagKind::A)
            .attr("rel", "next")
            .attr("href", "/")
            .attr("title", "t")
            .into();
        let sorted = Options::default().with_sort_attributes(true);

        assert_eq!(node_to_string(&a, &sorted), node_to_string(&b, &sorted));
        assert_ne!(
            node_to_string(&a, &Options::default()),
            node_to_string(&b, &Options::default())
        );
    }

    #[test]
    fn test_disable_omit_only_changes_tags() {
        let doc = doc_with_body(vec![
            el(TagKind::P).attr("title", "a&b").child("x < y").into(),
            el(TagKind::Ul).child(li("one")).child(li("two")).into(),
        ]);

        let minimal = to_string(&doc, &Options::default());
        let full = to_string(&doc, &explicit());
        assert_eq!(
            minimal,
            "<!DOCTYPE html>\n<p title=\"a&amp;b\">x &lt; y<ul><li>one<li>two</ul>"
        );
        assert_eq!(
            full,
            "<!DOCTYPE html>\n<html><head></head><body><p title=\"a&amp;b\">x &lt; y</p>\
             <ul><li>one</li><li>two</li></ul></body></html>"
        );

        // Toggling back reproduces the omitted output exactly
        assert_eq!(to_string(&doc, &Options::default()), minimal);

        let strip_tags = |s: &str| {
            let mut text = String::new();
            let mut in_tag = false;
            for c in s.chars() {
                match c {
                    '<' => in_tag = true,
                    '>' => in_tag = false,
                    _ if !in_tag => text.push(c),
                    _ => {}
                }
            }
            text
        };
        assert_eq!(strip_tags(&minimal), strip_tags(&full));
    }

    #[test]
    fn test_preformatted_leading_newline() {
        let pre: Node = el(TagKind::Pre).child("\ncode").into();
        assert_eq!(node_to_string(&pre, &Options::default()), "<pre>\n\ncode</pre>");

        let textarea: Node = el(TagKind::Textarea).child("\nvalue").into();
        assert_eq!(
            node_to_string(&textarea, &Options::default()),
            "<textarea>\n\nvalue</textarea>"
        );

        let plain: Node = el(TagKind::Pre).child("code").into();
        assert_eq!(node_to_string(&plain, &Options::default()), "<pre>code</pre>");

        let div: Node = el(TagKind::Div).child("\ntext").into();
        assert_eq!(node_to_string(&div, &Options::default()), "<div>\ntext</div>");
    }

    #[test]
    fn test_top_level_node_keeps_end_tag() {
        let li: Node = li("alone").into();
        assert_eq!(node_to_string(&li, &Options::default()), "<li>alone</li>");
    }

    #[test]
    fn test_display() {
        let doc = doc_with_body(vec![el(TagKind::P).child("Hi").into()]);
        assert_eq!(doc.to_string(), "<!DOCTYPE html>\n<p>Hi");
        assert_eq!(Node::text("a & b").to_string(), "a &amp; b");
    }

    struct FailingSink;

    impl io::Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_propagates() {
        let err = render(&Document::new(), &mut FailingSink, &Options::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "closed");
    }

    #[test]
    fn test_string_helpers_match_sink_output() {
        let doc = doc_with_body(vec![el(TagKind::Ul).child(el(TagKind::Li).child("x")).into()]);
        let options = Options::default();

        let mut out: Vec<u8> = Vec::new();
        render(&doc, &mut out, &options).unwrap();
        assert_eq!(to_string(&doc, &options).as_bytes(), out.as_slice());

        let node: Node = el(TagKind::P).child("y").into();
        let mut out: Vec<u8> = Vec::new();
        render_node(&node, &mut out, &options).unwrap();
        assert_eq!(node_to_string(&node, &options).as_bytes(), out.as_slice());
    }

    #[test]
    fn test_buffer_to_string_is_lossy_on_invalid_utf8() {
        assert_eq!(buffer_to_string(b"ok".to_vec()), "ok");
        assert_eq!(buffer_to_string(vec![b'a', 0xff]), "a\u{fffd}");
    }
}
