//! Minimal visual tree emitted by the layout renderers.
//!
//! Layouts build `Node`s; the CLI serializes them to HTML. Class strings are
//! presentational tokens supplied by the active theme plus structural utility
//! classes owned by the layout.

/// A tree node: an element with classes and children, or a text leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub children: Vec<Node>,
}

/// Starts an element builder.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        classes: Vec::new(),
        children: Vec::new(),
    }
}

/// A text leaf.
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    /// Appends one or more space-separated classes.
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        for c in classes.as_ref().split_whitespace() {
            self.classes.push(c.to_string());
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Appends a text leaf child.
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::Text(value.into()))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

// Tags rendered without a closing counterpart.
const VOID_TAGS: [&str; 2] = ["hr", "br"];

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(&escape(value)),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                if !element.classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&escape(&element.classes.join(" ")));
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(element.tag);
                out.push('>');
            }
        }
    }

    /// True if any text leaf in the tree equals `needle` exactly.
    /// Test helper for section-presence assertions.
    #[cfg(test)]
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Node::Text(value) => value == needle,
            Node::Element(element) => element.children.iter().any(|c| c.contains_text(needle)),
        }
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_html_with_classes_and_text() {
        let node: Node = el("div").class("a b").text("hello").into();
        assert_eq!(node.to_html(), r#"<div class="a b">hello</div>"#);
    }

    #[test]
    fn test_text_is_escaped() {
        let node: Node = el("p").text("R&D <lead>").into();
        assert_eq!(node.to_html(), "<p>R&amp;D &lt;lead&gt;</p>");
    }

    #[test]
    fn test_void_tag_has_no_closing() {
        let node: Node = el("hr").class("border-t").into();
        assert_eq!(node.to_html(), r#"<hr class="border-t">"#);
    }

    #[test]
    fn test_contains_text_walks_nested_children() {
        let node: Node = el("div")
            .child(el("section").child(el("h2").text("Experience")))
            .into();
        assert!(node.contains_text("Experience"));
        assert!(!node.contains_text("Education"));
    }
}
