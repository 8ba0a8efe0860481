use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// Minimal HTML element tree. Attribute and text values are escaped on
/// output; tag and attribute names are trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search including `self`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.child_elements()
            .find_map(|child| child.find(predicate))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|element: &Element| element.get_attr("id") == Some(id))
    }

    /// Concatenated text of all descendants, each text node trimmed and
    /// joined by single spaces.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        for node in &self.children {
            match node {
                Node::Text(text) if !text.trim().is_empty() => parts.push(text.trim()),
                Node::Text(_) => {}
                Node::Element(element) => element.collect_text(parts),
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out.push('>');
        for node in &self.children {
            match node {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&escape(text)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Element, escape};

    #[test]
    fn escape_covers_markup_and_quote_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("ปัญหา"), "ปัญหา");
    }

    #[test]
    fn to_html_writes_attrs_in_insertion_order() {
        let element = Element::new("a")
            .attr("href", "2.html")
            .class("active")
            .child(Element::new("span").text("R&D"));
        assert_eq!(
            element.to_html(),
            r#"<a href="2.html" class="active"><span>R&amp;D</span></a>"#
        );
    }

    #[test]
    fn find_by_id_and_text_content_walk_descendants() {
        let tree = Element::new("div").child(
            Element::new("nav")
                .id("mainNav")
                .child(Element::new("div").text("2"))
                .child(Element::new("span").text("/ 3")),
        );
        let nav = tree.find_by_id("mainNav").expect("nav should be found");
        assert_eq!(nav.tag(), "nav");
        assert_eq!(nav.text_content(), "2 / 3");
        assert!(tree.find_by_id("missing").is_none());
    }
}
