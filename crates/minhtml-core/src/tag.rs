//! Static registry of supported HTML5 element kinds.
//!
//! Every element in a tree is identified by a [`TagKind`]. The canonical
//! (lowercase) name and the content [`Category`] of a kind are fixed at compile
//! time; the reverse lookup from a name is a read-only map built on first use.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

/// Content category of an element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Content model forbids children (e.g. `br`, `img`)
    Void,
    /// Ordinary element with an ordered child list
    Normal,
    /// The document root (`html`)
    Document,
}

macro_rules! tag_kinds {
    ($($variant:ident => $name:literal, $category:ident;)+) => {
        /// The fixed set of element kinds the tree model supports.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TagKind {
            $(
                #[doc = concat!("`<", $name, ">`")]
                $variant,
            )+
        }

        impl TagKind {
            /// Every supported kind, in declaration order
            pub const ALL: &'static [TagKind] = &[$(TagKind::$variant),+];

            /// Canonical lowercase tag name
            pub const fn name(self) -> &'static str {
                match self {
                    $(TagKind::$variant => $name,)+
                }
            }

            /// Content category of this kind
            pub const fn category(self) -> Category {
                match self {
                    $(TagKind::$variant => Category::$category,)+
                }
            }
        }
    };
}

tag_kinds! {
    A => "a", Normal;
    Abbr => "abbr", Normal;
    Address => "address", Normal;
    Area => "area", Void;
    Article => "article", Normal;
    Aside => "aside", Normal;
    Audio => "audio", Normal;
    B => "b", Normal;
    Base => "base", Void;
    Bdi => "bdi", Normal;
    Bdo => "bdo", Normal;
    Blockquote => "blockquote", Normal;
    Body => "body", Normal;
    Br => "br", Void;
    Button => "button", Normal;
    Canvas => "canvas", Normal;
    Caption => "caption", Normal;
    Cite => "cite", Normal;
    Code => "code", Normal;
    Col => "col", Void;
    Colgroup => "colgroup", Normal;
    Data => "data", Normal;
    Datalist => "datalist", Normal;
    Dd => "dd", Normal;
    Del => "del", Normal;
    Details => "details", Normal;
    Dfn => "dfn", Normal;
    Dialog => "dialog", Normal;
    Div => "div", Normal;
    Dl => "dl", Normal;
    Dt => "dt", Normal;
    Em => "em", Normal;
    Embed => "embed", Void;
    Fieldset => "fieldset", Normal;
    Figcaption => "figcaption", Normal;
    Figure => "figure", Normal;
    Footer => "footer", Normal;
    Form => "form", Normal;
    H1 => "h1", Normal;
    H2 => "h2", Normal;
    H3 => "h3", Normal;
    H4 => "h4", Normal;
    H5 => "h5", Normal;
    H6 => "h6", Normal;
    Head => "head", Normal;
    Header => "header", Normal;
    Hgroup => "hgroup", Normal;
    Hr => "hr", Void;
    Html => "html", Document;
    I => "i", Normal;
    Iframe => "iframe", Normal;
    Img => "img", Void;
    Input => "input", Void;
    Ins => "ins", Normal;
    Kbd => "kbd", Normal;
    Label => "label", Normal;
    Legend => "legend", Normal;
    Li => "li", Normal;
    Link => "link", Void;
    Main => "main", Normal;
    Map => "map", Normal;
    Mark => "mark", Normal;
    Menu => "menu", Normal;
    Meta => "meta", Void;
    Meter => "meter", Normal;
    Nav => "nav", Normal;
    Noscript => "noscript", Normal;
    Object => "object", Normal;
    Ol => "ol", Normal;
    Optgroup => "optgroup", Normal;
    Option => "option", Normal;
    Output => "output", Normal;
    P => "p", Normal;
    Picture => "picture", Normal;
    Pre => "pre", Normal;
    Progress => "progress", Normal;
    Q => "q", Normal;
    Rb => "rb", Normal;
    Rp => "rp", Normal;
    Rt => "rt", Normal;
    Rtc => "rtc", Normal;
    Ruby => "ruby", Normal;
    S => "s", Normal;
    Samp => "samp", Normal;
    Script => "script", Normal;
    Search => "search", Normal;
    Section => "section", Normal;
    Select => "select", Normal;
    Slot => "slot", Normal;
    Small => "small", Normal;
    Source => "source", Void;
    Span => "span", Normal;
    Strong => "strong", Normal;
    Style => "style", Normal;
    Sub => "sub", Normal;
    Summary => "summary", Normal;
    Sup => "sup", Normal;
    Table => "table", Normal;
    Tbody => "tbody", Normal;
    Td => "td", Normal;
    Template => "template", Normal;
    Textarea => "textarea", Normal;
    Tfoot => "tfoot", Normal;
    Th => "th", Normal;
    Thead => "thead", Normal;
    Time => "time", Normal;
    Title => "title", Normal;
    Tr => "tr", Normal;
    Track => "track", Void;
    U => "u", Normal;
    Ul => "ul", Normal;
    Var => "var", Normal;
    Video => "video", Normal;
    Wbr => "wbr", Void;
}

static BY_NAME: Lazy<HashMap<&'static str, TagKind>> =
    Lazy::new(|| TagKind::ALL.iter().map(|&kind| (kind.name(), kind)).collect());

impl TagKind {
    /// Look up a kind by tag name (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(name: &str) -> Option<TagKind> {
        let name = name.trim();
        BY_NAME
            .get(name)
            .or_else(|| BY_NAME.get(name.to_ascii_lowercase().as_str()))
            .copied()
    }

    /// Check if this kind's content model forbids children
    pub const fn is_void(self) -> bool {
        matches!(self.category(), Category::Void)
    }

    /// `pre` and `textarea` drop a single leading newline when parsed
    pub const fn is_preformatted(self) -> bool {
        matches!(self, TagKind::Pre | TagKind::Textarea)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown tag name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tag name: {0}")]
pub struct UnknownTag(pub String);

impl FromStr for TagKind {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagKind::from_name(s).ok_or_else(|| UnknownTag(s.to_string()))
    }
}
