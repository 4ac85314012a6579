// src/render/node.rs
//! Typed visual tree produced by the block renderer.
//!
//! Every text and attribute value is escaped when the tree is serialized, so
//! the only raw HTML that can reach the output is [`SanitizedHtml`].

use super::sanitize::SanitizedHtml;
use handlebars::html_escape;
use std::fmt::Write;

/// Elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["img", "br", "hr", "source"];

/// A placeholder for an unresolved variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableChip {
    /// Full token including braces
    pub token: String,
    pub label: String,
    pub icon: Option<&'static str>,
}

impl VariableChip {
    /// Chip as an HTML span. Shape is kept within the sanitizer allow-list
    /// so chips survive inside rich content.
    pub fn to_html(&self) -> String {
        let label = match self.icon {
            Some(icon) => format!("{} {}", icon, self.label),
            None => self.label.clone(),
        };
        format!(
            "<span class=\"variable-chip\" data-variable=\"{}\">{}</span>",
            html_escape(&self.token),
            html_escape(&label)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub styles: Vec<(&'static str, String)>,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<VisualNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VisualNode {
    Element(Element),
    Text(String),
    Markup(SanitizedHtml),
    Chip(VariableChip),
    /// Renders nothing (page breaks)
    Empty,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            styles: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    /// Style only when a value is present
    pub fn style_opt(self, property: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.style(property, v),
            None => self,
        }
    }

    /// Raw declarations such as `font-weight:600;font-style:italic`
    pub fn css(mut self, declarations: &str) -> Self {
        for declaration in declarations.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                if let Some(property) = known_property(property.trim()) {
                    self.styles.push((property, value.trim().to_string()));
                }
            }
        }
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<VisualNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<VisualNode>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(VisualNode::Text(text.into()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Theme CSS only uses a handful of properties; map them onto static names.
fn known_property(property: &str) -> Option<&'static str> {
    const PROPERTIES: &[&str] = &[
        "font-weight",
        "font-style",
        "font-family",
        "letter-spacing",
        "text-transform",
    ];
    PROPERTIES.iter().copied().find(|p| *p == property)
}

impl From<Element> for VisualNode {
    fn from(element: Element) -> Self {
        VisualNode::Element(element)
    }
}

impl From<VariableChip> for VisualNode {
    fn from(chip: VariableChip) -> Self {
        VisualNode::Chip(chip)
    }
}

impl From<SanitizedHtml> for VisualNode {
    fn from(html: SanitizedHtml) -> Self {
        VisualNode::Markup(html)
    }
}

impl VisualNode {
    pub fn text(text: impl Into<String>) -> Self {
        VisualNode::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            VisualNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Serialize to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            VisualNode::Empty => {}
            VisualNode::Text(text) => out.push_str(&html_escape(text)),
            VisualNode::Markup(html) => out.push_str(html.as_str()),
            VisualNode::Chip(chip) => out.push_str(&chip.to_html()),
            VisualNode::Element(element) => {
                let _ = write!(out, "<{}", element.tag);
                if !element.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", html_escape(&element.classes.join(" ")));
                }
                if !element.styles.is_empty() {
                    let css = element
                        .styles
                        .iter()
                        .map(|(p, v)| format!("{}:{}", p, v))
                        .collect::<Vec<_>>()
                        .join(";");
                    let _ = write!(out, " style=\"{}\"", html_escape(&css));
                }
                for (name, value) in &element.attributes {
                    if value.is_empty() {
                        let _ = write!(out, " {}", name);
                    } else {
                        let _ = write!(out, " {}=\"{}\"", name, html_escape(value));
                    }
                }
                out.push('>');

                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    /// Concatenated visible text, chips shown by label. Markup is skipped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VisualNode::Empty | VisualNode::Markup(_) => {}
            VisualNode::Text(text) => out.push_str(text),
            VisualNode::Chip(chip) => out.push_str(&chip.label),
            VisualNode::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for the first element with `class`
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.has_class(class) {
            return Some(element);
        }
        element.children.iter().find_map(|c| c.find_class(class))
    }

    /// All chips in document order
    pub fn chips(&self) -> Vec<&VariableChip> {
        let mut found = Vec::new();
        self.collect_chips(&mut found);
        found
    }

    fn collect_chips<'a>(&'a self, found: &mut Vec<&'a VariableChip>) {
        match self {
            VisualNode::Chip(chip) => found.push(chip),
            VisualNode::Element(element) => {
                for child in &element.children {
                    child.collect_chips(found);
                }
            }
            _ => {}
        }
    }

    /// Whether any element in the tree has `tag`
    pub fn contains_tag(&self, tag: &str) -> bool {
        match self {
            VisualNode::Element(element) => {
                element.tag == tag || element.children.iter().any(|c| c.contains_tag(tag))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let node: VisualNode = Element::new("p").text("<b>Tom & Jerry</b>").into();
        assert_eq!(node.to_html(), "<p>&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</p>");
    }

    #[test]
    fn test_attributes_and_styles() {
        let node: VisualNode = Element::new("img")
            .class("hero-image")
            .style("object-fit", "cover")
            .attr("src", "https://cdn.example.com/a.jpg?x=\"1\"")
            .into();
        let html = node.to_html();
        assert!(html.starts_with("<img class=\"hero-image\" style=\"object-fit:cover\" src=\""));
        assert!(html.contains("&quot;1&quot;"));
        assert!(!html.contains("</img>"));
    }

    #[test]
    fn test_boolean_attribute() {
        let node: VisualNode = Element::new("video").attr("controls", "").into();
        assert_eq!(node.to_html(), "<video controls></video>");
    }

    #[test]
    fn test_css_declarations() {
        let element = Element::new("h3").css("font-weight:700;letter-spacing:-0.025em;bogus:1");
        assert_eq!(element.style_value("font-weight"), Some("700"));
        assert_eq!(element.style_value("letter-spacing"), Some("-0.025em"));
        assert_eq!(element.styles.len(), 2);
    }

    #[test]
    fn test_chip_html() {
        let chip = VariableChip {
            token: "{{property.title}}".to_string(),
            label: "Objekttitel".to_string(),
            icon: None,
        };
        assert_eq!(
            chip.to_html(),
            "<span class=\"variable-chip\" data-variable=\"{{property.title}}\">Objekttitel</span>"
        );
    }
}
