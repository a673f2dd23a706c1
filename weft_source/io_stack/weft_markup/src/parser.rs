use indexmap::IndexMap;

use crate::ast::{Document, Element, MarkupNode};
use crate::error::MarkupError;
use crate::lexer::{Lexer, Token};

// =================== PARSER ===================

pub struct MarkupParser {
    lexer: Lexer,
    current_token: Token,
    token_start: usize,
}

impl MarkupParser {
    pub fn new(input: &str) -> Result<Self, MarkupError> {
        let mut lexer = Lexer::new(input);
        let first_token = lexer.next_token()?;
        Ok(Self {
            lexer,
            current_token: first_token,
            token_start: 0,
        })
    }

    fn next_token(&mut self) -> Result<(), MarkupError> {
        self.token_start = self.lexer.pos;
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> MarkupError {
        self.lexer.error_at(self.token_start, message)
    }

    fn expect(&mut self, expected: Token) -> Result<(), MarkupError> {
        if self.current_token == expected {
            self.next_token()
        } else {
            Err(self.error(format!(
                "expected {:?}, found {:?}",
                expected, self.current_token
            )))
        }
    }

    pub fn parse(&mut self) -> Result<Document, MarkupError> {
        let mut nodes = Vec::new();
        while self.current_token != Token::Eof {
            match self.parse_node()? {
                // Stray top-level text is not part of the tree.
                MarkupNode::Text(_) => {}
                node => nodes.push(node),
            }
        }
        Ok(Document { nodes })
    }

    fn parse_node(&mut self) -> Result<MarkupNode, MarkupError> {
        match &self.current_token {
            Token::LAngle => Ok(MarkupNode::Element(self.parse_element()?)),
            Token::Text(text) => {
                let txt = text.clone();
                self.next_token()?;
                Ok(MarkupNode::Text(txt))
            }
            Token::Comment(body) => {
                let body = body.clone();
                self.next_token()?;
                Ok(MarkupNode::Comment(body))
            }
            other => Err(self.error(format!("unexpected token when parsing node: {other:?}"))),
        }
    }

    fn take_identifier(&mut self, what: &str) -> Result<String, MarkupError> {
        match &self.current_token {
            Token::Identifier(name) => {
                let name = name.clone();
                self.next_token()?;
                Ok(name)
            }
            other => Err(self.error(format!("expected {what}, found {other:?}"))),
        }
    }

    fn parse_element(&mut self) -> Result<Element, MarkupError> {
        self.expect(Token::LAngle)?;

        if self.current_token == Token::Slash {
            self.next_token()?;
            let name = self.take_identifier("tag name")?;
            return Err(self.error(format!("closing tag </{name}> without matching opening tag")));
        }

        let name = self.take_identifier("tag name")?;

        let mut attributes = IndexMap::new();
        while let Token::Identifier(attr_name) = &self.current_token {
            let key = attr_name.clone();
            self.next_token()?;
            self.expect(Token::Equals)?;

            let Token::StringLiteral(val) = &self.current_token else {
                return Err(self.error(format!(
                    "expected quoted value for attribute '{key}', found {:?}",
                    self.current_token
                )));
            };
            let val = val.clone();
            if attributes.insert(key.clone(), val).is_some() {
                return Err(self.error(format!("duplicate attribute '{key}' on <{name}>")));
            }
            self.next_token()?;
        }

        if self.current_token == Token::Slash {
            self.next_token()?;
            self.expect(Token::RAngle)?;
            return Ok(Element {
                name,
                attributes,
                children: Vec::new(),
            });
        }
        self.expect(Token::RAngle)?;

        let mut children = Vec::new();
        loop {
            match &self.current_token {
                Token::Eof => {
                    return Err(self.error(format!("missing closing tag </{name}>")));
                }
                Token::LAngle => {
                    let saved_pos = self.lexer.pos;
                    let saved_in_tag = self.lexer.in_tag;
                    let saved_start = self.token_start;

                    self.next_token()?;
                    if self.current_token == Token::Slash {
                        self.next_token()?;
                        let close_name = self.take_identifier("closing tag name")?;
                        if close_name != name {
                            return Err(self.error(format!(
                                "mismatched closing tag: expected </{name}>, found </{close_name}>"
                            )));
                        }
                        self.expect(Token::RAngle)?;
                        break;
                    }

                    // Not a closing tag: rewind and parse a child element.
                    self.lexer.pos = saved_pos;
                    self.lexer.in_tag = saved_in_tag;
                    self.token_start = saved_start;
                    self.current_token = Token::LAngle;
                }
                _ => {}
            }
            children.push(self.parse_node()?);
        }

        // Indentation between child elements is layout, not content.
        if children.iter().any(|c| matches!(c, MarkupNode::Element(_))) {
            children.retain(|c| !matches!(c, MarkupNode::Text(t) if t.trim().is_empty()));
        }

        Ok(Element {
            name,
            attributes,
            children,
        })
    }
}

/// Parses a whole document.
pub fn parse_markup(input: &str) -> Result<Document, MarkupError> {
    MarkupParser::new(input)?.parse()
}
