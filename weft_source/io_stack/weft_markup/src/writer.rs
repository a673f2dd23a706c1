use std::fmt::Write;

use crate::ast::{Element, MarkupNode};

pub const PROLOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Spaces per nesting level; 0 writes everything on one line.
    pub indent: usize,
    pub prolog: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            prolog: false,
        }
    }
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn write_element(element: &Element, options: &WriteOptions) -> String {
    let mut out = String::new();
    if options.prolog {
        out.push_str(PROLOG);
        if options.indent > 0 {
            out.push('\n');
        }
    }
    write_into(&mut out, element, 0, options);
    if options.indent > 0 {
        out.push('\n');
    }
    out
}

fn newline_indent(out: &mut String, depth: usize, options: &WriteOptions) {
    if options.indent > 0 {
        out.push('\n');
        out.extend(std::iter::repeat_n(' ', depth * options.indent));
    }
}

fn write_into(out: &mut String, element: &Element, depth: usize, options: &WriteOptions) {
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attributes {
        // Writing into a String cannot fail.
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }

    if element.children.is_empty() {
        out.push_str(" />");
        return;
    }
    out.push('>');

    // Text-only content stays inline so values round-trip exactly.
    let text_only = element
        .children
        .iter()
        .all(|c| matches!(c, MarkupNode::Text(_)));
    if text_only {
        out.push_str(&escape_text(&element.text()));
    } else {
        for child in &element.children {
            newline_indent(out, depth + 1, options);
            match child {
                MarkupNode::Element(e) => write_into(out, e, depth + 1, options),
                MarkupNode::Text(t) => out.push_str(&escape_text(t.trim())),
                MarkupNode::Comment(c) => {
                    let _ = write!(out, "<!--{c}-->");
                }
            }
        }
        newline_indent(out, depth, options);
    }

    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}
