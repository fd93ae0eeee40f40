//! Optional start/end tag rules.
//!
//! HTML5 lets a serializer leave out certain start and end tags when a parser
//! would reconstruct exactly the same tree. The functions here decide, for an
//! element at a given position, whether that is the case. They are pure: the
//! answer depends only on the element's kind, attributes and children, its
//! parent and its siblings.
//!
//! <https://html.spec.whatwg.org/multipage/syntax.html#optional-tags>

use crate::node::{Attributes, Element, Node, Tag};
use crate::tag::TagKind;

/// Elements whose start tag closes an open `p`
const PARAGRAPH_ENDERS: &[TagKind] = &[
    TagKind::Address,
    TagKind::Article,
    TagKind::Aside,
    TagKind::Blockquote,
    TagKind::Div,
    TagKind::Dl,
    TagKind::Fieldset,
    TagKind::Footer,
    TagKind::Form,
    TagKind::H1,
    TagKind::H2,
    TagKind::H3,
    TagKind::H4,
    TagKind::H5,
    TagKind::H6,
    TagKind::Header,
    TagKind::Hgroup,
    TagKind::Hr,
    TagKind::Main,
    TagKind::Nav,
    TagKind::Ol,
    TagKind::P,
    TagKind::Pre,
    TagKind::Section,
    TagKind::Table,
    TagKind::Ul,
];

/// Head content that must keep an explicit `<body>` in front of it
const BODY_START_KEEPERS: &[TagKind] = &[
    TagKind::Meta,
    TagKind::Link,
    TagKind::Script,
    TagKind::Template,
];

const RUBY_ENDERS: &[TagKind] = &[TagKind::Rb, TagKind::Rtc, TagKind::Rp];

/// Check if the start tag of `tag` may be left out.
///
/// `children` are the element's own children; `parent` and `index` locate it
/// among its siblings (`parent` is `None` at the top of a render).
pub fn can_omit_start(
    tag: &Tag,
    children: &[Node],
    parent: Option<&Element>,
    index: usize,
) -> bool {
    // A start tag carrying attributes can never be implied
    if tag.has_attributes() {
        return false;
    }

    match tag.kind() {
        TagKind::Html | TagKind::Head => true,
        TagKind::Body => match children.first() {
            None => true,
            Some(Node::Text(text)) => !text.starts_with_whitespace(),
            Some(first) => !first
                .kind()
                .is_some_and(|kind| BODY_START_KEEPERS.contains(&kind)),
        },
        TagKind::Colgroup => {
            first_child_is(children, TagKind::Col)
                && !prev_sibling_is(parent, index, &[TagKind::Colgroup])
        }
        TagKind::Tbody => {
            first_child_is(children, TagKind::Tr)
                && !prev_sibling_is(
                    parent,
                    index,
                    &[TagKind::Tbody, TagKind::Thead, TagKind::Tfoot],
                )
        }
        _ => false,
    }
}

/// Check if the end tag of `tag` may be left out.
///
/// Apart from `html`, `head` and `body`, an end tag is only omitted for an
/// element with a known parent.
pub fn can_omit_end(tag: &Tag, parent: Option<&Element>, index: usize) -> bool {
    let kind = tag.kind();
    if matches!(kind, TagKind::Html | TagKind::Head | TagKind::Body) {
        return true;
    }
    if parent.is_none() {
        return false;
    }

    let last = is_last(parent, index);
    match kind {
        TagKind::Li => last || next_sibling_is(parent, index, &[TagKind::Li]),
        TagKind::Dt => next_sibling_is(parent, index, &[TagKind::Dt, TagKind::Dd]),
        TagKind::Dd => last || next_sibling_is(parent, index, &[TagKind::Dt, TagKind::Dd]),
        TagKind::P => {
            (last && !parent.is_some_and(|p| p.tag().kind() == TagKind::A))
                || next_sibling_is(parent, index, PARAGRAPH_ENDERS)
        }
        TagKind::Rb | TagKind::Rt | TagKind::Rtc | TagKind::Rp => {
            last
                || next_sibling_is(parent, index, RUBY_ENDERS)
                || (kind != TagKind::Rtc && next_sibling_is(parent, index, &[TagKind::Rt]))
        }
        TagKind::Optgroup => last || next_sibling_is(parent, index, &[TagKind::Optgroup]),
        TagKind::Option => {
            last || next_sibling_is(parent, index, &[TagKind::Option, TagKind::Optgroup])
        }
        TagKind::Colgroup => {
            last || !matches!(
                next_sibling(parent, index),
                Some(Node::Text(text)) if text.starts_with_whitespace()
            )
        }
        TagKind::Thead => next_sibling_is(parent, index, &[TagKind::Tbody, TagKind::Tfoot]),
        TagKind::Tbody => last || next_sibling_is(parent, index, &[TagKind::Tbody, TagKind::Tfoot]),
        TagKind::Tfoot => last || next_sibling_is(parent, index, &[TagKind::Tbody]),
        TagKind::Tr => last || next_sibling_is(parent, index, &[TagKind::Tr]),
        TagKind::Th | TagKind::Td => {
            last || next_sibling_is(parent, index, &[TagKind::Th, TagKind::Td])
        }
        _ => false,
    }
}

fn first_child_is(children: &[Node], kind: TagKind) -> bool {
    children.first().is_some_and(|child| child.is(kind))
}

fn next_sibling(parent: Option<&Element>, index: usize) -> Option<&Node> {
    parent?.children().get(index.checked_add(1)?)
}

fn prev_sibling(parent: Option<&Element>, index: usize) -> Option<&Node> {
    parent?.children().get(index.checked_sub(1)?)
}

fn is_last(parent: Option<&Element>, index: usize) -> bool {
    parent.map_or(true, |p| index + 1 >= p.children().len())
}

fn next_sibling_is(parent: Option<&Element>, index: usize, kinds: &[TagKind]) -> bool {
    next_sibling(parent, index)
        .and_then(Node::kind)
        .is_some_and(|kind| kinds.contains(&kind))
}

fn prev_sibling_is(parent: Option<&Element>, index: usize, kinds: &[TagKind]) -> bool {
    prev_sibling(parent, index)
        .and_then(Node::kind)
        .is_some_and(|kind| kinds.contains(&kind))
}
