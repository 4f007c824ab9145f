//! Parser for generator-emitted `menudata.js` files.
//!
//! Documentation generators ship the sidebar menu as a JavaScript
//! assignment rather than JSON:
//!
//! ```text
//! /* license header */
//! var menudata={children:[
//! {text:"Main Page",url:"index.html"},
//! {text:"Files",url:"files.html",children:[
//! {text:"File List",url:"files.html"}]}]}
//! ```
//!
//! Only the object-literal subset those files use is accepted: records with
//! bare or quoted keys, sequences, and single- or double-quoted strings.
//! Comments and trailing commas are allowed. The result is a plain
//! [`Value`] so it can go through the same shape checks as JSON input.

use serde_json::{Map, Value};

use crate::error::ParseError;

/// Maximum nesting of records and sequences.
const MAX_NESTING: usize = 128;

/// Parse a `menudata.js` source into an untyped value.
///
/// The leading `var name =` (or `let`/`const`, or a bare `name =`) is
/// optional, as is the trailing `;`.
pub fn parse_menudata(src: &str) -> Result<Value, ParseError> {
    Parser::new(crate::source::strip_bom(src)).parse_file()
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
            nesting: 0,
        }
    }

    fn parse_file(mut self) -> Result<Value, ParseError> {
        self.skip_trivia()?;

        if self.peek().is_some_and(is_ident_start) {
            let mut name = self.parse_ident();
            if matches!(name.as_str(), "var" | "let" | "const") {
                self.skip_trivia()?;
                if !self.peek().is_some_and(is_ident_start) {
                    return Err(self.error("expected variable name"));
                }
                name = self.parse_ident();
            }
            tracing::debug!(variable = %name, "Parsing menu data assignment");
            self.skip_trivia()?;
            self.expect('=')?;
            self.skip_trivia()?;
        }

        let value = self.parse_value()?;

        self.skip_trivia()?;
        if self.peek() == Some(';') {
            self.bump();
            self.skip_trivia()?;
        }
        if let Some(c) = self.peek() {
            return Err(self.error(format!("unexpected trailing content `{c}`")));
        }

        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some('{') => self.parse_record(),
            Some('[') => self.parse_sequence(),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote).map(Value::String),
            Some(c) => Err(self.error(format!("unexpected character `{c}`"))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_record(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.bump();
        let mut map = Map::new();

        loop {
            self.skip_trivia()?;
            if self.peek() == Some('}') {
                self.bump();
                break;
            }

            let (line, column) = (self.line, self.column);
            let key = match self.peek() {
                Some(quote @ ('"' | '\'')) => self.parse_string(quote)?,
                Some(c) if is_ident_start(c) => self.parse_ident(),
                Some(c) => return Err(self.error(format!("expected key, found `{c}`"))),
                None => return Err(self.error("unexpected end of input")),
            };

            self.skip_trivia()?;
            self.expect(':')?;
            self.skip_trivia()?;
            let value = self.parse_value()?;

            if map.contains_key(&key) {
                return Err(ParseError {
                    message: format!("duplicate key `{key}`"),
                    line,
                    column,
                });
            }
            map.insert(key, value);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {
                    self.bump();
                    break;
                }
                _ => return Err(self.error("expected `,` or `}`")),
            }
        }

        self.nesting -= 1;
        Ok(Value::Object(map))
    }

    fn parse_sequence(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.bump();
        let mut items = Vec::new();

        loop {
            self.skip_trivia()?;
            if self.peek() == Some(']') {
                self.bump();
                break;
            }

            items.push(self.parse_value()?);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    break;
                }
                _ => return Err(self.error("expected `,` or `]`")),
            }
        }

        self.nesting -= 1;
        Ok(Value::Array(items))
    }

    fn parse_string(&mut self, quote: char) -> Result<String, ParseError> {
        self.bump();
        let mut out = String::new();

        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(out),
                Some('\\') => {
                    let escaped = match self.bump() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('b') => '\u{8}',
                        Some('f') => '\u{c}',
                        Some('u') => self.parse_unicode_escape()?,
                        Some(c @ ('"' | '\'' | '\\' | '/')) => c,
                        Some(c) => return Err(self.error(format!("invalid escape `\\{c}`"))),
                        None => return Err(self.error("unterminated string")),
                    };
                    out.push(escaped);
                }
                Some('\n') | None => return Err(self.error("unterminated string")),
                Some(c) => out.push(c),
            }
        }
    }

    /// Parse the `XXXX` of a `\uXXXX` escape, combining surrogate pairs.
    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let high = self.parse_hex4()?;
        if !(0xD800..0xDC00).contains(&high) {
            return char::from_u32(high).ok_or_else(|| self.error("invalid unicode escape"));
        }

        if self.bump() != Some('\\') || self.bump() != Some('u') {
            return Err(self.error("unpaired surrogate in unicode escape"));
        }
        let low = self.parse_hex4()?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(self.error("unpaired surrogate in unicode escape"));
        }
        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        char::from_u32(code).ok_or_else(|| self.error("invalid unicode escape"))
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut code = 0;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("invalid unicode escape"))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    fn parse_ident(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.bump();
        }
        self.src[start..self.pos].to_owned()
    }

    /// Skip whitespace and `//` or `/* */` comments.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.src[self.pos..].starts_with("//") => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                Some('/') if self.src[self.pos..].starts_with("/*") => {
                    let (line, column) = (self.line, self.column);
                    self.bump();
                    self.bump();
                    loop {
                        if self.src[self.pos..].starts_with("*/") {
                            self.bump();
                            self.bump();
                            break;
                        }
                        if self.bump().is_none() {
                            return Err(ParseError {
                                message: "unterminated comment".to_owned(),
                                line,
                                column,
                            });
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.nesting >= MAX_NESTING {
            return Err(self.error(format!("nesting deeper than {MAX_NESTING} levels")));
        }
        self.nesting += 1;
        Ok(())
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(format!("expected `{expected}`")))
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
