// Copyright 2026 the Concertina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML serialization.

use alloc::string::String;

use super::id::NodeId;
use super::store::{Document, NodeKind};

/// Elements that never have an end tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

impl Document {
    /// Serializes a node and its subtree as HTML, like the DOM `outerHTML`
    /// getter.
    ///
    /// Text is escaped for `&`, `<`, and `>`; attribute values additionally
    /// for `"`.
    #[must_use]
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text => escape_into(self.text(id), false, out),
            NodeKind::Comment => {
                out.push_str("<!--");
                out.push_str(self.text(id));
                out.push_str("-->");
            }
            NodeKind::Element => {
                let tag = self.tag(id);
                out.push('<');
                out.push_str(tag);
                for attr in self.attributes(id) {
                    out.push(' ');
                    out.push_str(&attr.name);
                    if !attr.value.is_empty() {
                        out.push_str("=\"");
                        escape_into(&attr.value, true, out);
                        out.push('"');
                    }
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }
                for child in self.children(id) {
                    self.write_html(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nested_markup() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_attribute(div, "data-aria-accordion", "");
        doc.set_attribute(div, "title", "a \"b\" & c");
        let h = doc.create_element("h3");
        let t = doc.create_text("Fish & <Chips>");
        let br = doc.create_element("br");
        let c = doc.create_comment(" note ");
        doc.append_child(div, h);
        doc.append_child(h, t);
        doc.append_child(div, br);
        doc.append_child(div, c);

        assert_eq!(
            doc.to_html(div),
            "<div data-aria-accordion title=\"a &quot;b&quot; &amp; c\">\
             <h3>Fish &amp; &lt;Chips&gt;</h3><br><!-- note --></div>"
        );
    }
}
