//! Minimal XML-style markup: lexer, parser, element DOM and writer.
//!
//! Handles elements, quoted attributes, text, CDATA and comments. Prolog and
//! doctype declarations are skipped. No namespaces, no DTD validation.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod writer;

pub use ast::*;
pub use error::*;
pub use lexer::decode_entities;
pub use parser::*;
pub use writer::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_with_attributes_in_order() {
        let doc = parse_markup(
            r#"<?xml version="1.0"?>
            <Prefab>
              <Window z="1" a="2">
                <Button title="Go" color='#fff'/>
              </Window>
            </Prefab>"#,
        )
        .unwrap();
        let root = doc.root().unwrap();
        assert_eq!(root.name, "Prefab");
        let window = root.first_child_element("Window").unwrap();
        let keys: Vec<_> = window.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
        let button = window.child_elements().next().unwrap();
        assert_eq!(button.attr("color"), Some("#fff"));
        assert!(button.children.is_empty());
    }

    #[test]
    fn text_comments_and_cdata_are_kept() {
        let doc = parse_markup("<a><!-- note -->hi &amp; bye<![CDATA[<raw>]]></a>").unwrap();
        let a = doc.root().unwrap();
        assert_eq!(a.children[0], MarkupNode::Comment(" note ".into()));
        assert_eq!(a.text(), "hi & bye<raw>");
        assert_eq!(a.child_elements().count(), 0);
    }

    #[test]
    fn whitespace_only_content_is_kept_but_indentation_is_not() {
        let doc = parse_markup("<a>\n  <b>   </b>\n  <c>\n</c>\n</a>").unwrap();
        let a = doc.root().unwrap();
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.first_child_element("b").unwrap().text(), "   ");
        assert_eq!(a.first_child_element("c").unwrap().text(), "\n");
    }

    #[test]
    fn entities_decode_in_attributes() {
        let doc = parse_markup(r#"<a v="&lt;&#65;&#x42;&quot;&unknown;"/>"#).unwrap();
        assert_eq!(doc.root().unwrap().attr("v"), Some("<AB\"&unknown;"));
    }

    #[test]
    fn rejects_mismatched_and_unterminated_input() {
        assert!(matches!(
            parse_markup("<a><b></a></b>"),
            Err(MarkupError::Syntax { .. })
        ));
        assert!(parse_markup("<a>").is_err());
        assert!(parse_markup(r#"<a v="x></a>"#).is_err());
        assert!(parse_markup("</a>").is_err());
        assert!(parse_markup(r#"<a v="1" v="2"/>"#).is_err());
    }

    #[test]
    fn syntax_error_reports_line() {
        let err = parse_markup("<a>\n<b>\n</c>").unwrap_err();
        match err {
            MarkupError::Syntax { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn empty_input_has_no_root() {
        assert!(parse_markup("   ").unwrap().root().is_none());
    }

    #[test]
    fn writer_escapes_and_reparses_identically() {
        let el = Element::new("Prefab").with_child(
            Element::new("Window")
                .with_attr("title", "a \"quoted\" <b> & 'c'")
                .with_child(Element::new("Label").with_text("1 < 2")),
        );
        let text = write_element(&el, &WriteOptions::default());
        assert!(text.contains("&quot;quoted&quot;"));
        assert!(text.contains("<Label>1 &lt; 2</Label>"));
        let back = parse_markup(&text).unwrap().into_root().unwrap();
        assert_eq!(back, el);
    }

    #[test]
    fn writer_prolog_and_compact_mode() {
        let el = Element::new("a").with_child(Element::new("b"));
        let compact = write_element(
            &el,
            &WriteOptions {
                indent: 0,
                prolog: true,
            },
        );
        assert_eq!(compact, format!("{PROLOG}<a><b /></a>"));
    }
}
