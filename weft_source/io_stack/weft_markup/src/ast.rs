use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    /// Attributes in document order.
    pub attributes: IndexMap<String, String>,
    pub children: Vec<MarkupNode>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(MarkupNode::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(MarkupNode::Text(text.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Child elements only, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            MarkupNode::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn first_child_element(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name == name)
    }

    /// Concatenated direct text content.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                MarkupNode::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Parsed document. Prolog, doctype and top-level whitespace are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub nodes: Vec<MarkupNode>,
}

impl Document {
    /// First top-level element.
    pub fn root(&self) -> Option<&Element> {
        self.nodes.iter().find_map(|n| match n {
            MarkupNode::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn into_root(self) -> Option<Element> {
        self.nodes.into_iter().find_map(|n| match n {
            MarkupNode::Element(e) => Some(e),
            _ => None,
        })
    }
}
