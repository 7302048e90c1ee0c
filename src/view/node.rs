//! HTML node tree and builder.
//!
//! Components build [`Node`] trees; [`Node::render`] serializes them into a
//! single string buffer. Text and attribute values are escaped on output.
//!
//! # Example
//!
//! ```
//! use artvince_site::view::{el, Node};
//!
//! let node: Node = el("a")
//!     .class("btn")
//!     .class_if(true, "btn-primary")
//!     .attr("href", "/courses?q=a&b")
//!     .text("Browse <all>")
//!     .into();
//! assert_eq!(
//!     node.render(),
//!     r#"<a class="btn btn-primary" href="/courses?q=a&amp;b">Browse &lt;all&gt;</a>"#
//! );
//! ```

/// Elements with no closing tag.
const VOID_TAGS: &[&str] = &["area", "br", "hr", "img", "input", "link", "meta", "source"];

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Escaped on output.
    Text(String),
    /// Written verbatim (inline SVG, stylesheet).
    Raw(String),
    Fragment(Vec<Node>),
}

/// An element under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

/// Start building an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// Text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Raw, unescaped markup.
pub fn raw(markup: impl Into<String>) -> Node {
    Node::Raw(markup.into())
}

/// Group of sibling nodes with no wrapper element.
pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(nodes.into_iter().collect())
}

impl Element {
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set a value-less boolean attribute (`required`, `disabled`).
    pub fn flag(mut self, name: &'static str) -> Self {
        if !self.attrs.iter().any(|(n, _)| *n == name) {
            self.attrs.push((name, None));
        }
        self
    }

    /// Append classes to the class list.
    pub fn class(mut self, classes: &str) -> Self {
        if classes.is_empty() {
            return self;
        }
        match self.attrs.iter_mut().find(|(n, _)| *n == "class") {
            Some((_, Some(existing))) => {
                existing.push(' ');
                existing.push_str(classes);
            }
            _ => self.attrs.push(("class", Some(classes.to_string()))),
        }
        self
    }

    pub fn class_if(self, condition: bool, classes: &str) -> Self {
        if condition { self.class(classes) } else { self }
    }

    /// Inline style; empty declarations are skipped.
    pub fn style(self, css: impl Into<String>) -> Self {
        let css = css.into();
        if css.is_empty() {
            return self;
        }
        let merged = match self.get_attr("style") {
            Some(existing) if !existing.is_empty() => format!("{existing} {css}"),
            _ => css,
        };
        self.attr("style", merged)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn maybe_child(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                escape_attr_into(value, out);
                out.push('"');
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl Node {
    /// Serialize to HTML.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(1024);
        self.write(&mut out);
        out
    }

    /// Serialize into an existing buffer.
    pub fn write(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write(out),
            Self::Text(content) => escape_text_into(content, out),
            Self::Raw(markup) => out.push_str(markup),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.write(out);
                }
            }
        }
    }

    /// Concatenated text content, without markup.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(content) => out.push_str(content),
            Self::Raw(_) => {}
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for elements matching `predicate`.
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.visit(&mut |element| {
            if predicate(element) {
                found.push(element);
            }
        });
        found
    }

    /// First element carrying `name="value"`.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.find_all(&|e| e.get_attr(name) == Some(value)).into_iter().next()
    }

    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a Element)) {
        match self {
            Self::Element(element) => {
                f(element);
                for child in &element.children {
                    child.visit(f);
                }
            }
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.visit(f);
                }
            }
            Self::Text(_) | Self::Raw(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Self::Text(content.to_string())
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Self::Text(content)
    }
}

// =============================================================================
// Escaping
// =============================================================================

fn escape_text_into(input: &str, out: &mut String) {
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr_into(input: &str, out: &mut String) {
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Escape text content.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    escape_text_into(input, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements_have_no_close_tag() {
        let node: Node = el("input").attr("type", "text").flag("required").into();
        assert_eq!(node.render(), r#"<input type="text" required>"#);
    }

    #[test]
    fn test_attr_replaces_and_class_appends() {
        let node: Node = el("div")
            .attr("id", "a")
            .attr("id", "b")
            .class("one")
            .class("")
            .class("two")
            .into();
        assert_eq!(node.render(), r#"<div id="b" class="one two"></div>"#);
    }

    #[test]
    fn test_attribute_quotes_escaped() {
        let node: Node = el("img").attr("alt", r#"He said "hi" & 'bye'"#).into();
        assert_eq!(node.render(), r#"<img alt="He said &quot;hi&quot; &amp; &#39;bye&#39;">"#);
    }

    #[test]
    fn test_raw_is_verbatim_and_fragment_flattens() {
        let node = fragment([text("a<b"), raw("<br>"), el("span").text("c").into()]);
        assert_eq!(node.render(), "a&lt;b<br><span>c</span>");
        assert_eq!(node.text_content(), "a<bc");
    }

    #[test]
    fn test_style_merges_and_skips_empty() {
        let element = el("div").style("").style("opacity: 0.5;").style("color: red;");
        assert_eq!(element.get_attr("style"), Some("opacity: 0.5; color: red;"));
        assert!(el("div").style("").get_attr("style").is_none());
    }

    #[test]
    fn test_find_helpers() {
        let node: Node = el("ul")
            .child(el("li").attr("data-id", "1").class("item"))
            .child(el("li").attr("data-id", "2").class("item active"))
            .into();
        assert_eq!(node.find_all(&|e| e.tag() == "li").len(), 2);
        assert!(node.find_by_attr("data-id", "2").unwrap().has_class("active"));
        assert!(node.find_by_attr("data-id", "3").is_none());
    }
}
