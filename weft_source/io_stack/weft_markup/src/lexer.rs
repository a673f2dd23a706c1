use crate::error::MarkupError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    LAngle,                // '<'
    RAngle,                // '>'
    Slash,                 // '/'
    Equals,                // '='
    Identifier(String),    // tag names, attribute names
    StringLiteral(String), // "value" or 'value', entities decoded
    Text(String),          // character data between tags, entities decoded
    Comment(String),       // <!-- ... -->
    Eof,
}

#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    pub pos: usize,
    pub(crate) in_tag: bool,
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '-' | '_' | ':' | '.')
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        // Byte-order mark is not content.
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        Self {
            input: input.chars().collect(),
            pos: 0,
            in_tag: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn starts_with(&self, s: &str) -> bool {
        let mut i = self.pos;
        for c in s.chars() {
            if self.input.get(i) != Some(&c) {
                return false;
            }
            i += 1;
        }
        true
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Line and column (1-based) of a char offset.
    pub fn location(&self, pos: usize) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for ch in self.input.iter().take(pos) {
            if *ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    pub fn error_at(&self, pos: usize, message: impl Into<String>) -> MarkupError {
        let (line, column) = self.location(pos);
        MarkupError::Syntax {
            message: message.into(),
            line,
            column,
        }
    }

    /// Consumes up to and including `terminator`, returning what came before it.
    fn read_until(&mut self, terminator: &str, what: &str) -> Result<String, MarkupError> {
        let start = self.pos;
        while self.pos < self.input.len() {
            if self.starts_with(terminator) {
                let body: String = self.input[start..self.pos].iter().collect();
                self.pos += terminator.chars().count();
                return Ok(body);
            }
            self.pos += 1;
        }
        Err(self.error_at(start, format!("unterminated {what}")))
    }

    fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if is_name_char(ch) {
                self.advance();
            } else {
                break;
            }
        }
        self.input[start..self.pos].iter().collect()
    }

    // Opening quote already consumed.
    fn read_string_literal(&mut self, quote: char) -> Result<String, MarkupError> {
        let start = self.pos;
        while let Some(ch) = self.advance() {
            if ch == quote {
                let raw: String = self.input[start..self.pos - 1].iter().collect();
                return Ok(decode_entities(&raw));
            }
            if ch == '<' {
                return Err(self.error_at(self.pos - 1, "'<' inside attribute value"));
            }
        }
        Err(self.error_at(start, "unterminated attribute value"))
    }

    fn read_text(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch == '<' {
                break;
            }
            self.advance();
        }
        let raw: String = self.input[start..self.pos].iter().collect();
        decode_entities(&raw)
    }

    pub fn next_token(&mut self) -> Result<Token, MarkupError> {
        if self.in_tag {
            return self.next_tag_token();
        }

        loop {
            if self.pos >= self.input.len() {
                return Ok(Token::Eof);
            }

            if self.starts_with("<!--") {
                self.pos += 4;
                let body = self.read_until("-->", "comment")?;
                return Ok(Token::Comment(body));
            }
            if self.starts_with("<![CDATA[") {
                self.pos += 9;
                let body = self.read_until("]]>", "CDATA section")?;
                return Ok(Token::Text(body));
            }
            // Prolog and doctype carry nothing the tree needs.
            if self.starts_with("<?") {
                self.pos += 2;
                self.read_until("?>", "processing instruction")?;
                continue;
            }
            if self.starts_with("<!") {
                self.pos += 2;
                self.read_until(">", "declaration")?;
                continue;
            }
            if self.starts_with("<") {
                self.pos += 1;
                self.in_tag = true;
                return Ok(Token::LAngle);
            }

            return Ok(Token::Text(self.read_text()));
        }
    }

    fn next_tag_token(&mut self) -> Result<Token, MarkupError> {
        self.skip_whitespace();
        let start = self.pos;
        match self.advance() {
            None => Err(self.error_at(start, "unexpected end of input inside tag")),
            Some('>') => {
                self.in_tag = false;
                Ok(Token::RAngle)
            }
            Some('/') => Ok(Token::Slash),
            Some('=') => Ok(Token::Equals),
            Some(q @ ('"' | '\'')) => Ok(Token::StringLiteral(self.read_string_literal(q)?)),
            Some(ch) if is_name_char(ch) => {
                self.pos -= 1; // put back first char
                Ok(Token::Identifier(self.read_identifier()))
            }
            Some(ch) => Err(self.error_at(start, format!("unexpected character '{ch}' in tag"))),
        }
    }
}

/// Decodes the five predefined entities plus numeric character references.
/// Unknown entities are kept verbatim.
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp..];
        let Some(semi) = after.find(';') else {
            out.push_str(after);
            return out;
        };
        let entity = &after[1..semi];
        let decoded = match entity {
            "lt" => Some('<'),
            "gt" => Some('>'),
            "amp" => Some('&'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                .and_then(char::from_u32),
        };
        match decoded {
            Some(ch) => {
                out.push(ch);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
