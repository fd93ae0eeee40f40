//! Factory functions for every supported tag.
//!
//! Plain factories (`div()`, `br()`, ...) take no arguments and return an
//! empty [`Element`] or [`VoidElement`]. A few tags get helpers taking the
//! attributes they are almost always written with.

use minhtml_core::{Attributes, Document, Element, Node, Url, VoidElement};

pub use minhtml_core::tags::*;

/// Create an empty document
pub fn document() -> Document {
    Document::new()
}

/// Create a page skeleton: `<html lang>` with `<meta charset="utf-8">` in the
/// head. An empty `lang` is left out.
pub fn html(lang: &str) -> Document {
    let mut doc = Document::new().attr_if_non_empty("lang", lang);
    doc.head_mut().append_child(meta_charset("utf-8"));
    doc
}

/// Create an escaped text node
pub fn text(s: &str) -> Node {
    Node::text(s)
}

/// Create a text node from markup that is already escaped
pub fn raw(s: impl Into<String>) -> Node {
    Node::raw(s)
}

fn set_url_if_non_empty<T: Attributes>(target: &mut T, name: &str, url: Url) {
    if !url.is_empty() {
        target.set_url_attribute(name, &url);
    }
}

/// `<a href="...">`; an empty href is left out
pub fn a(href: impl Into<Url>) -> Element {
    let mut a = minhtml_core::tags::a();
    set_url_if_non_empty(&mut a, "href", href.into());
    a
}

/// `<img src="..." alt="...">`; `alt` is always written, even when empty
pub fn img_src(src: impl Into<Url>, alt: &str) -> VoidElement {
    let mut img = img();
    img.set_url_attribute("src", &src.into()).set_attribute("alt", alt);
    img
}

/// `<link href="..." rel="...">`
pub fn link_to(href: impl Into<Url>, rel: &str) -> VoidElement {
    let mut link = link();
    link.set_url_attribute("href", &href.into())
        .set_attribute("rel", rel);
    link
}

/// `<link href="..." rel="stylesheet">`
pub fn stylesheet(href: impl Into<Url>) -> VoidElement {
    link_to(href, "stylesheet")
}

/// `<base href="..." target="...">`; empty values are left out
pub fn base_href(href: impl Into<Url>, target: &str) -> VoidElement {
    let mut base = base();
    set_url_if_non_empty(&mut base, "href", href.into());
    base.attr_if_non_empty("target", target)
}

/// `<meta charset="...">`
pub fn meta_charset(charset: &str) -> VoidElement {
    meta().attr("charset", charset)
}

/// `<meta name="..." content="...">`
pub fn meta_name(name: &str, content: &str) -> VoidElement {
    meta().attr("name", name).attr("content", content)
}

/// `<script src="...">`
pub fn script_src(src: impl Into<Url>) -> Element {
    script_with(src, "")
}

/// `<script>` with an optional `src` and optional inline content.
///
/// The content is script source and is written verbatim.
pub fn script_with(src: impl Into<Url>, content: &str) -> Element {
    let mut script = script();
    set_url_if_non_empty(&mut script, "src", src.into());
    if !content.is_empty() {
        script.append_child(Node::raw(content));
    }
    script
}

/// `<area>` of an image map; empty values and empty `coords` are left out
pub fn area_link(href: impl Into<Url>, alt: &str, shape: &str, coords: &[i32]) -> VoidElement {
    let mut area = area();
    set_url_if_non_empty(&mut area, "href", href.into());
    area.set_attribute_if_non_empty("alt", alt)
        .set_attribute_if_non_empty("shape", shape);
    if !coords.is_empty() {
        let coords = coords.iter().map(i32::to_string).collect::<Vec<_>>().join(",");
        area.set_attribute("coords", &coords);
    }
    area
}

/// `<col>`; `span` is only written when greater than one
pub fn col_span(span: u32) -> VoidElement {
    let col = col();
    if span > 1 {
        col.attr("span", &span.to_string())
    } else {
        col
    }
}

/// `<colgroup span="...">` spanning `span` columns without `<col>` children
pub fn colgroup_span(span: u32) -> Element {
    colgroup().attr("span", &span.to_string())
}

/// `<embed>`; an empty `mime` type and absent dimensions are left out
pub fn embed_src(
    src: impl Into<Url>,
    mime: &str,
    width: Option<u32>,
    height: Option<u32>,
) -> VoidElement {
    let mut embed = embed().attr_if_non_empty("type", mime);
    embed.set_url_attribute("src", &src.into());
    if let Some(width) = width {
        embed.set_attribute("width", &width.to_string());
    }
    if let Some(height) = height {
        embed.set_attribute("height", &height.to_string());
    }
    embed
}

/// `<form method="..." action="...">`
pub fn form_to(method: &str, action: impl Into<Url>) -> Element {
    let mut form = form().attr("method", method);
    form.set_url_attribute("action", &action.into());
    form
}

/// `<input type="..." name="..." value="...">`; empty values are left out
pub fn input_field(kind: &str, name: &str, value: &str) -> VoidElement {
    input()
        .attr_if_non_empty("type", kind)
        .attr_if_non_empty("name", name)
        .attr_if_non_empty("value", value)
}

/// `<label for="...">`; an empty id is left out
pub fn label_for(id: &str) -> Element {
    label().attr_if_non_empty("for", id)
}

/// `<map name="...">`; an empty name is left out
pub fn map_named(name: &str) -> Element {
    map().attr_if_non_empty("name", name)
}

/// `<optgroup label="...">`
pub fn optgroup_labeled(label: &str) -> Element {
    optgroup().attr("label", label)
}

/// `<option value="...">label`
pub fn option_value(value: &str, label: &str) -> Element {
    option().attr("value", value).child(label)
}

/// `<textarea name="...">` holding `content` as its initial text
pub fn textarea_named(name: &str, content: &str) -> Element {
    let textarea = textarea().attr("name", name);
    if content.is_empty() {
        textarea
    } else {
        textarea.child(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minhtml_core::{node_to_string, Options};

    fn render(node: impl Into<Node>) -> String {
        node_to_string(&node.into(), &Options::default())
    }

    #[test]
    fn test_anchor() {
        assert_eq!(
            render(a("/search?q=a&b").child("Search")),
            r#"<a href="/search?q=a&b">Search</a>"#
        );
    }

    #[test]
    fn test_anchor_without_href() {
        assert_eq!(render(a("").child("top")), "<a>top</a>");
    }

    #[test]
    fn test_img_src_keeps_empty_alt() {
        assert_eq!(render(img_src("logo.png", "")), r#"<img src="logo.png" alt>"#);
    }

    #[test]
    fn test_head_helpers() {
        assert_eq!(render(meta_charset("utf-8")), r#"<meta charset="utf-8">"#);
        assert_eq!(
            render(meta_name("viewport", "width=device-width")),
            r#"<meta name="viewport" content="width=device-width">"#
        );
        assert_eq!(
            render(stylesheet("site.css")),
            r#"<link href="site.css" rel="stylesheet">"#
        );
        assert_eq!(
            render(script_src("app.js")),
            r#"<script src="app.js"></script>"#
        );
        assert_eq!(
            render(script_with("", "if (a < b) go();")),
            "<script>if (a < b) go();</script>"
        );
        assert_eq!(
            render(base_href("/docs/", "_blank")),
            r#"<base href="/docs/" target="_blank">"#
        );
        assert_eq!(render(base_href("/docs/", "")), r#"<base href="/docs/">"#);
    }

    #[test]
    fn test_html_skeleton() {
        let opts = Options::default().with_disable_omit(true);
        assert_eq!(
            minhtml_core::to_string(&html("en"), &opts),
            "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"></head>\
             <body></body></html>"
        );
        assert_eq!(html("").attribute("lang"), None);
    }

    #[test]
    fn test_table_helpers() {
        assert_eq!(render(col_span(1)), "<col>");
        assert_eq!(render(col_span(3)), r#"<col span="3">"#);
        assert_eq!(
            render(table().child(colgroup_span(5)).child(tr().child(td().child("x")))),
            r#"<table><colgroup span="5"><tr><td>x</table>"#
        );
    }

    #[test]
    fn test_embedded_content_helpers() {
        assert_eq!(
            render(embed_src("movie.swf", "", Some(0), None)),
            r#"<embed src="movie.swf" width="0">"#
        );
        assert_eq!(
            render(embed_src("a.svg", "image/svg+xml", Some(10), Some(20))),
            r#"<embed type="image/svg+xml" src="a.svg" width="10" height="20">"#
        );
        assert_eq!(
            render(map_named("nav").child(area_link("/a", "A", "rect", &[1, 2, 3, 4]))),
            r#"<map name="nav"><area href="/a" alt="A" shape="rect" coords="1,2,3,4"></map>"#
        );
        assert_eq!(render(area_link("", "", "default", &[])), r#"<area shape="default">"#);
    }

    #[test]
    fn test_form_helpers() {
        assert_eq!(render(input_field("text", "q", "")), r#"<input type="text" name="q">"#);
        assert_eq!(render(input_field("submit", "", "Go")), r#"<input type="submit" value="Go">"#);
        assert_eq!(render(label_for("q").child("Query")), r#"<label for="q">Query</label>"#);
        assert_eq!(render(label_for("")), "<label></label>");
        assert_eq!(
            render(form_to("post", "/save").child(textarea_named("body", "hi"))),
            r#"<form method="post" action="/save"><textarea name="body">hi</textarea></form>"#
        );
        assert_eq!(
            render(select().child(option_value("1", "One")).child(option_value("2", "Two"))),
            r#"<select><option value="1">One<option value="2">Two</select>"#
        );
    }

    #[test]
    fn test_text_and_raw() {
        assert_eq!(render(p().child(text("<b>"))), "<p>&lt;b&gt;</p>");
        assert_eq!(render(p().child(raw("<b>bold</b>"))), "<p><b>bold</b></p>");
    }
}
