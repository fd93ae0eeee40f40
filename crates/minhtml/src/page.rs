//! Page-level conveniences on [`Document`].
//!
//! Most pages need the same handful of head entries; [`DocumentExt`] adds
//! them without reaching into `head_mut()` by hand.

use minhtml_core::{Attributes, Document, Url};

use crate::tags::{base_href, link_to, script_with, stylesheet, title};

pub trait DocumentExt {
    /// Set `lang` on the root element; an empty value is ignored
    fn set_lang(&mut self, lang: &str) -> &mut Self;

    /// Set the `manifest` URL on the root element; an empty URL is ignored
    fn set_manifest(&mut self, src: impl Into<Url>) -> &mut Self;

    /// Append a `<title>` to the head
    fn add_title(&mut self, title: &str) -> &mut Self;

    /// Append a `<base>` to the head
    fn add_base(&mut self, href: impl Into<Url>, target: &str) -> &mut Self;

    /// Append a `<link rel="shortcut icon">` with its MIME type to the head
    fn add_favicon(&mut self, href: impl Into<Url>, mime: &str) -> &mut Self;

    /// Append a `text/css` stylesheet link to the head
    fn add_stylesheet(&mut self, href: impl Into<Url>) -> &mut Self;

    /// Append a `<script>` to the body
    fn add_script(&mut self, src: impl Into<Url>, content: &str) -> &mut Self;
}

impl DocumentExt for Document {
    fn set_lang(&mut self, lang: &str) -> &mut Self {
        self.set_attribute_if_non_empty("lang", lang)
    }

    fn set_manifest(&mut self, src: impl Into<Url>) -> &mut Self {
        let src = src.into();
        if !src.is_empty() {
            self.set_url_attribute("manifest", &src);
        }
        self
    }

    fn add_title(&mut self, text: &str) -> &mut Self {
        self.head_mut().append_child(title().child(text));
        self
    }

    fn add_base(&mut self, href: impl Into<Url>, target: &str) -> &mut Self {
        self.head_mut().append_child(base_href(href, target));
        self
    }

    fn add_favicon(&mut self, href: impl Into<Url>, mime: &str) -> &mut Self {
        self.head_mut()
            .append_child(link_to(href, "shortcut icon").attr("type", mime));
        self
    }

    fn add_stylesheet(&mut self, href: impl Into<Url>) -> &mut Self {
        self.head_mut()
            .append_child(stylesheet(href).attr("type", "text/css"));
        self
    }

    fn add_script(&mut self, src: impl Into<Url>, content: &str) -> &mut Self {
        self.body_mut().append_child(script_with(src, content));
        self
    }
}
