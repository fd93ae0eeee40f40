//! Named character references.
//!
//! The constants are already-escaped markup; wrap them with [`entity`] (or
//! [`Node::raw`]) to place them in a tree without double escaping.

use minhtml_core::Node;

pub const NBSP: &str = "&nbsp;";
pub const ENSP: &str = "&ensp;";
pub const EMSP: &str = "&emsp;";
pub const THINSP: &str = "&thinsp;";
pub const ZWNJ: &str = "&zwnj;";
pub const ZWJ: &str = "&zwj;";
pub const SHY: &str = "&shy;";

pub const AMP: &str = "&amp;";
pub const LT: &str = "&lt;";
pub const GT: &str = "&gt;";
pub const QUOT: &str = "&quot;";
pub const APOS: &str = "&apos;";

pub const COPY: &str = "&copy;";
pub const REG: &str = "&reg;";
pub const TRADE: &str = "&trade;";
pub const SECT: &str = "&sect;";
pub const PARA: &str = "&para;";
pub const DEG: &str = "&deg;";

pub const NDASH: &str = "&ndash;";
pub const MDASH: &str = "&mdash;";
pub const HELLIP: &str = "&hellip;";
pub const BULL: &str = "&bull;";
pub const MIDDOT: &str = "&middot;";
pub const LSQUO: &str = "&lsquo;";
pub const RSQUO: &str = "&rsquo;";
pub const LDQUO: &str = "&ldquo;";
pub const RDQUO: &str = "&rdquo;";
pub const LAQUO: &str = "&laquo;";
pub const RAQUO: &str = "&raquo;";

pub const TIMES: &str = "&times;";
pub const DIVIDE: &str = "&divide;";
pub const PLUSMN: &str = "&plusmn;";
pub const MINUS: &str = "&minus;";

pub const CENT: &str = "&cent;";
pub const POUND: &str = "&pound;";
pub const YEN: &str = "&yen;";
pub const EURO: &str = "&euro;";

pub const LARR: &str = "&larr;";
pub const RARR: &str = "&rarr;";
pub const UARR: &str = "&uarr;";
pub const DARR: &str = "&darr;";
pub const HEARTS: &str = "&hearts;";

/// A text node holding a character reference, written verbatim
pub fn entity(reference: &'static str) -> Node {
    Node::raw(reference)
}

/// A decimal numeric character reference, e.g. `&#8212;`
pub fn numeric(code_point: u32) -> Node {
    Node::raw(format!("&#{code_point};"))
}
