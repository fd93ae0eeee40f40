//! Node tree model.
//!
//! A tree is made of three node kinds: [`Text`], [`VoidElement`] and
//! [`Element`], wrapped in the closed [`Node`] enum. Both element kinds embed a
//! [`Tag`] holding the element kind, attributes and classes, and share the
//! attribute API through the [`Attributes`] trait. The root of a page is a
//! [`Document`] with fixed `head` and `body` children.

use crate::attributes::AttributeSet;
use crate::classes::ClassSet;
use crate::escape::{escape_attribute, escape_text, normalize_attribute_name, Url};
use crate::tag::{Category, TagKind};
use crate::{Error, Result};

/// Element kind plus its attributes and classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    kind: TagKind,
    attributes: AttributeSet,
    classes: ClassSet,
}

impl Tag {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            attributes: AttributeSet::new(),
            classes: ClassSet::new(),
        }
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    /// True if any attribute or class is set
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty() || !self.classes.is_empty()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.put_attribute(name, value, |v| escape_attribute(v).into_owned());
    }

    fn set_url_attribute(&mut self, name: &str, url: &Url) {
        self.put_attribute(name, url.as_str(), str::to_string);
    }

    fn put_attribute(&mut self, name: &str, value: &str, store: impl FnOnce(&str) -> String) {
        let name = normalize_attribute_name(name);
        if name.is_empty() {
            tracing::trace!(tag = self.kind.name(), "ignoring attribute with empty name");
            return;
        }
        if name == "class" {
            self.classes.clear();
            self.add_classes(value.split_ascii_whitespace());
            return;
        }
        self.attributes.put(name.into_owned(), store(value));
    }

    fn add_classes<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
        for token in tokens {
            let token = token.trim();
            if !token.is_empty() {
                self.classes.put(escape_attribute(token).into_owned());
            }
        }
    }

    fn remove_classes<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
        for token in tokens {
            let token = token.trim();
            if !token.is_empty() {
                self.classes.del(&escape_attribute(token));
            }
        }
    }
}

/// Attribute and class manipulation shared by every element-like node.
///
/// The `&mut self` methods return `&mut Self` for chaining; `attr`,
/// `attr_if_non_empty` and `class` are consuming variants for building trees
/// in a single expression.
pub trait Attributes {
    fn tag(&self) -> &Tag;

    fn tag_mut(&mut self) -> &mut Tag;

    fn kind(&self) -> TagKind {
        self.tag().kind()
    }

    /// Set an attribute.
    ///
    /// The name is normalized and the value escaped for attribute context.
    /// `class` is split into tokens that replace the class set. An empty name
    /// is ignored.
    fn set_attribute(&mut self, name: &str, value: &str) -> &mut Self {
        self.tag_mut().set_attribute(name, value);
        self
    }

    /// Set an attribute only if `value` is non-empty
    fn set_attribute_if_non_empty(&mut self, name: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.tag_mut().set_attribute(name, value);
        }
        self
    }

    /// Set a URL-valued attribute; the URL is stored without entity escaping
    fn set_url_attribute(&mut self, name: &str, url: &Url) -> &mut Self {
        self.tag_mut().set_url_attribute(name, url);
        self
    }

    fn set_id(&mut self, id: &str) -> &mut Self {
        self.set_attribute("id", id)
    }

    fn set_title(&mut self, title: &str) -> &mut Self {
        self.set_attribute("title", title)
    }

    fn set_tab_index(&mut self, index: i32) -> &mut Self {
        self.set_attribute("tabindex", &index.to_string())
    }

    /// Get a stored (escaped) attribute value
    fn attribute(&self, name: &str) -> Option<&str> {
        self.tag().attributes().get(&normalize_attribute_name(name))
    }

    fn add_class<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) -> &mut Self {
        self.tag_mut().add_classes(tokens);
        self
    }

    fn remove_class<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) -> &mut Self {
        self.tag_mut().remove_classes(tokens);
        self
    }

    fn has_class(&self, token: &str) -> bool {
        self.tag().classes().contains(&escape_attribute(token))
    }

    fn attr(mut self, name: &str, value: &str) -> Self
    where
        Self: Sized,
    {
        self.set_attribute(name, value);
        self
    }

    fn attr_if_non_empty(mut self, name: &str, value: &str) -> Self
    where
        Self: Sized,
    {
        self.set_attribute_if_non_empty(name, value);
        self
    }

    fn class(mut self, token: &str) -> Self
    where
        Self: Sized,
    {
        self.add_class([token]);
        self
    }
}

/// Text content, stored escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(String);

impl Text {
    /// Create a text node, escaping `s` for text context
    pub fn new(s: &str) -> Self {
        Self(escape_text(s).into_owned())
    }

    /// Create a text node from markup that is already escaped
    pub fn raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the content starts with ASCII whitespace
    pub fn starts_with_whitespace(&self) -> bool {
        self.0.starts_with(|c: char| c.is_ascii_whitespace())
    }
}

/// An element whose content model forbids children (`br`, `img`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoidElement {
    tag: Tag,
}

impl VoidElement {
    pub(crate) fn new(kind: TagKind) -> Self {
        Self { tag: Tag::new(kind) }
    }

    /// Create a void element; fails unless `kind` is a void kind
    pub fn try_new(kind: TagKind) -> Result<Self> {
        check_category(kind, Category::Void)?;
        Ok(Self::new(kind))
    }
}

impl Attributes for VoidElement {
    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn tag_mut(&mut self) -> &mut Tag {
        &mut self.tag
    }
}

/// An element with an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    children: Vec<Node>,
}

impl Element {
    pub(crate) fn new(kind: TagKind) -> Self {
        Self {
            tag: Tag::new(kind),
            children: Vec::new(),
        }
    }

    /// Create an element; fails for void kinds and for the document root
    pub fn try_new(kind: TagKind) -> Result<Self> {
        check_category(kind, Category::Normal)?;
        Ok(Self::new(kind))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    pub fn append_child(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn append_children<I>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.append_child(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.append_children(children);
        self
    }
}

impl Attributes for Element {
    fn tag(&self) -> &Tag {
        &self.tag
    }

    fn tag_mut(&mut self) -> &mut Tag {
        &mut self.tag
    }
}

/// A node in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(Text),
    Void(VoidElement),
    Element(Element),
}

impl Node {
    /// Create a text node, escaping `s`
    pub fn text(s: &str) -> Self {
        Node::Text(Text::new(s))
    }

    /// Create a text node from already-escaped markup
    pub fn raw(s: impl Into<String>) -> Self {
        Node::Text(Text::raw(s))
    }

    /// Create an element node; void kinds become [`Node::Void`].
    ///
    /// `html` is rejected: the root only exists as a [`Document`].
    pub fn element(kind: TagKind) -> Result<Self> {
        match kind.category() {
            Category::Void => Ok(Node::Void(VoidElement::new(kind))),
            Category::Normal => Ok(Node::Element(Element::new(kind))),
            Category::Document => Err(wrong_category(kind, Category::Normal)),
        }
    }

    /// Element kind, or `None` for text
    pub fn kind(&self) -> Option<TagKind> {
        self.tag().map(Tag::kind)
    }

    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Node::Text(_) => None,
            Node::Void(void) => Some(&void.tag),
            Node::Element(element) => Some(&element.tag),
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this node is an element of the given kind
    pub fn is(&self, kind: TagKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Children of an element; empty for text and void nodes
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => element.children(),
            _ => &[],
        }
    }

    /// Append children to an element.
    ///
    /// Fails with [`Error::StructuralMisuse`] for text and void nodes.
    pub fn append_children<I>(&mut self, children: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        match self {
            Node::Element(element) => {
                element.append_children(children);
            }
            Node::Text(_) => return Err(misuse("text node".to_string())),
            Node::Void(void) => {
                return Err(misuse(format!("void element <{}>", void.tag.name())));
            }
        }
        Ok(self)
    }
}

fn misuse(node: String) -> Error {
    tracing::debug!(%node, "rejected child insertion");
    Error::StructuralMisuse { node }
}

fn check_category(kind: TagKind, expected: Category) -> Result<()> {
    if kind.category() == expected {
        Ok(())
    } else {
        Err(wrong_category(kind, expected))
    }
}

fn wrong_category(kind: TagKind, expected: Category) -> Error {
    let actual = kind.category();
    tracing::debug!(%kind, ?actual, ?expected, "rejected element construction");
    Error::WrongCategory {
        kind,
        actual,
        expected,
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<VoidElement> for Node {
    fn from(void: VoidElement) -> Self {
        Node::Void(void)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::text(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::text(&s)
    }
}

/// The document root: an `html` element with exactly a `head` and a `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Tag,
    head: Element,
    body: Element,
}

impl Document {
    pub fn new() -> Self {
        Self {
            root: Tag::new(TagKind::Html),
            head: Element::new(TagKind::Head),
            body: Element::new(TagKind::Body),
        }
    }

    pub fn head(&self) -> &Element {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut Element {
        &mut self.head
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// Children of the document are fixed; this always fails with
    /// [`Error::StructuralMisuse`]. Use [`head_mut`](Self::head_mut) or
    /// [`body_mut`](Self::body_mut) instead.
    pub fn append_children<I>(&mut self, _children: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Err(misuse("document root".to_string()))
    }

    /// Build the head in place
    pub fn with_head(mut self, build: impl FnOnce(&mut Element)) -> Self {
        build(&mut self.head);
        self
    }

    /// Build the body in place
    pub fn with_body(mut self, build: impl FnOnce(&mut Element)) -> Self {
        build(&mut self.body);
        self
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes for Document {
    fn tag(&self) -> &Tag {
        &self.root
    }

    fn tag_mut(&mut self) -> &mut Tag {
        &mut self.root
    }
}
