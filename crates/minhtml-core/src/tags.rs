//! One factory per element kind.
//!
//! Each factory returns the node type matching its kind's category; the
//! category of every listed kind is checked at compile time.

use crate::node::{Element, VoidElement};
use crate::tag::{Category, TagKind};

macro_rules! elements {
    ($($name:ident => $kind:ident),+ $(,)?) => {
        $(
            const _: () = assert!(matches!(TagKind::$kind.category(), Category::Normal));

            #[doc = concat!("Create an empty `<", stringify!($name), ">` element")]
            pub fn $name() -> Element {
                Element::new(TagKind::$kind)
            }
        )+
    };
}

macro_rules! void_elements {
    ($($name:ident => $kind:ident),+ $(,)?) => {
        $(
            const _: () = assert!(matches!(TagKind::$kind.category(), Category::Void));

            #[doc = concat!("Create a `<", stringify!($name), ">` void element")]
            pub fn $name() -> VoidElement {
                VoidElement::new(TagKind::$kind)
            }
        )+
    };
}

elements! {
    a => A, abbr => Abbr, address => Address, article => Article, aside => Aside,
    audio => Audio, b => B, bdi => Bdi, bdo => Bdo, blockquote => Blockquote,
    button => Button, canvas => Canvas, caption => Caption, cite => Cite,
    code => Code, colgroup => Colgroup, data => Data, datalist => Datalist,
    dd => Dd, del => Del, details => Details, dfn => Dfn, dialog => Dialog,
    div => Div, dl => Dl, dt => Dt, em => Em, fieldset => Fieldset,
    figcaption => Figcaption, figure => Figure, footer => Footer, form => Form,
    h1 => H1, h2 => H2, h3 => H3, h4 => H4, h5 => H5, h6 => H6,
    header => Header, hgroup => Hgroup, i => I, iframe => Iframe, ins => Ins,
    kbd => Kbd, label => Label, legend => Legend, li => Li, main => Main,
    map => Map, mark => Mark, menu => Menu, meter => Meter, nav => Nav,
    noscript => Noscript, object => Object, ol => Ol, optgroup => Optgroup,
    option => Option, output => Output, p => P, picture => Picture, pre => Pre,
    progress => Progress, q => Q, rb => Rb, rp => Rp, rt => Rt, rtc => Rtc,
    ruby => Ruby, s => S, samp => Samp, script => Script, search => Search,
    section => Section, select => Select, slot => Slot, small => Small,
    span => Span, strong => Strong, style => Style, sub => Sub,
    summary => Summary, sup => Sup, table => Table, tbody => Tbody, td => Td,
    template => Template, textarea => Textarea, tfoot => Tfoot, th => Th,
    thead => Thead, time => Time, title => Title, tr => Tr, u => U, ul => Ul,
    var => Var, video => Video,
}

void_elements! {
    area => Area, base => Base, br => Br, col => Col, embed => Embed, hr => Hr,
    img => Img, input => Input, link => Link, meta => Meta, source => Source,
    track => Track, wbr => Wbr,
}
