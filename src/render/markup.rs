//! Small HTML building blocks.

use std::fmt::Write;

/// Escape text for element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Output buffer a renderer writes into.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    buf: String,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append markup verbatim.
    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.buf.push_str(html);
        self
    }

    /// Append `<tag class="..">text</tag>` with the text escaped.
    pub fn text(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        if class.is_empty() {
            let _ = write!(self.buf, "<{tag}>{}</{tag}>", escape(text));
        } else {
            let _ = write!(self.buf, "<{tag} class=\"{class}\">{}</{tag}>", escape(text));
        }
        self
    }

    pub fn heading(&mut self, header_html: &str) -> &mut Self {
        let _ = write!(self.buf, "<h2 class=\"section-title\">{}</h2>", header_html);
        self
    }

    /// `<ul>` of escaped items. Nothing at all for an empty list.
    pub fn list<S: AsRef<str>>(&mut self, class: &str, items: &[S]) -> &mut Self {
        if items.is_empty() {
            return self;
        }
        let _ = write!(self.buf, "<ul class=\"{class}\">");
        for item in items {
            self.text("li", "", item.as_ref());
        }
        self.buf.push_str("</ul>");
        self
    }

    pub fn chips<S: AsRef<str>>(&mut self, items: &[S]) -> &mut Self {
        if items.is_empty() {
            return self;
        }
        self.buf.push_str("<div class=\"chips\">");
        for item in items {
            self.text("span", "chip", item.as_ref());
        }
        self.buf.push_str("</div>");
        self
    }

    pub fn notice(&mut self, kind: NoticeKind, text: &str) -> &mut Self {
        self.text("div", kind.class(), text)
    }

    pub fn link_button(&mut self, url: &str, label: &str) -> &mut Self {
        let _ = write!(
            self.buf,
            "<a class=\"link-button\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape(url),
            escape(label)
        );
        self
    }

    pub fn image(&mut self, src: &str, alt: &str, class: &str) -> &mut Self {
        let _ = write!(
            self.buf,
            "<img class=\"{class}\" src=\"{}\" alt=\"{}\">",
            escape(src),
            escape(alt)
        );
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Warning => "notice notice-warning",
            NoticeKind::Error => "notice notice-error",
        }
    }
}
