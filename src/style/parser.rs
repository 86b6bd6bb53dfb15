//! Style table parser.
//!
//! The format is a list of sections, each a selector in brackets followed by
//! `key = value` declarations:
//!
//! ```text
//! [Button:hover]
//! background_color = #383838
//! icon_opacity = 1.0
//! ```
//!
//! Values are hex colors, numbers, `true`/`false`, or quoted strings. Repeated
//! sections merge; a repeated key overwrites the earlier value.

use super::table::StyleTable;
use super::tokenizer::{tokenize, Spanned, Token};
use super::value::Value;

/// Errors from style table parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at byte {offset}: {message}")]
    UnexpectedToken { offset: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("invalid character at byte {offset}")]
    InvalidCharacter { offset: usize },
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self, expected: &str) -> Result<Spanned, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| ParseError::UnexpectedEof(format!("expected {expected}")))?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, kind: Token, expected: &str) -> Result<Spanned, ParseError> {
        let token = self.next(expected)?;
        if token.token != kind {
            return Err(unexpected(&token, expected));
        }
        Ok(token)
    }

    /// `[` Ident PseudoClass? `]`
    fn section(&mut self) -> Result<String, ParseError> {
        self.expect(Token::BracketOpen, "`[`")?;
        let mut selector = self.expect(Token::Ident, "selector name")?.text;
        if let Some(next) = self.peek() {
            if next.token == Token::PseudoClass {
                selector.push_str(&next.text);
                self.pos += 1;
            }
        }
        self.expect(Token::BracketClose, "`]`")?;
        Ok(selector)
    }

    /// Ident `=` value
    fn declaration(&mut self) -> Result<(String, Value), ParseError> {
        let key = self.expect(Token::Ident, "property name")?.text;
        self.expect(Token::Equals, "`=`")?;
        let raw = self.next("property value")?;
        let value = match raw.token {
            Token::HexColor => Value::Color(raw.text),
            Token::Number => {
                let n = raw
                    .text
                    .parse::<f64>()
                    .map_err(|_| unexpected(&raw, "a number"))?;
                Value::Number(n)
            }
            Token::StringLiteral => Value::Text(raw.text.trim_matches('"').to_owned()),
            Token::Ident if raw.text == "true" => Value::Bool(true),
            Token::Ident if raw.text == "false" => Value::Bool(false),
            _ => return Err(unexpected(&raw, "a color, number, boolean or string")),
        };
        Ok((key, value))
    }
}

fn unexpected(token: &Spanned, expected: &str) -> ParseError {
    ParseError::UnexpectedToken {
        offset: token.offset,
        message: format!("expected {expected}, found `{}`", token.text),
    }
}

/// Parse style table text.
pub fn parse_style_table(input: &str) -> Result<StyleTable, ParseError> {
    let mut parser = Parser {
        tokens: tokenize(input)?,
        pos: 0,
    };
    let mut table = StyleTable::new();
    let mut current: Option<String> = None;

    while let Some(token) = parser.peek() {
        if token.token == Token::BracketOpen {
            let selector = parser.section()?;
            table.ensure_rule(&selector);
            current = Some(selector);
            continue;
        }
        let Some(selector) = current.as_deref() else {
            return Err(unexpected(token, "a `[selector]` section"));
        };
        let (key, value) = parser.declaration()?;
        table.insert(selector, key, value);
    }

    Ok(table)
}
