//! logos-based style table tokenizer.
//!
//! Token priority follows logos rules: the longest match wins, and for equal
//! lengths the earlier variant wins. The ordering below keeps `#3c8cbd` a
//! [`Token::HexColor`] and `:hover` a [`Token::PseudoClass`].

use logos::Logos;

use super::parser::ParseError;

/// Style table token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
pub enum Token {
    /// Hex color: `#333`, `#333a`, `#2A2A2A`, `#883c8cbd`. Only 3, 4, 6 or 8
    /// digits; the leftover digits of any other length fail the parse.
    #[regex(r"#([0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{4}|[0-9a-fA-F]{3})")]
    HexColor,

    /// Selector state suffix: `:hover`, `:inactive`.
    #[regex(r":[a-zA-Z][a-zA-Z0-9_-]*")]
    PseudoClass,

    /// Double-quoted string literal, single line.
    #[regex(r#""[^"\n]*""#)]
    StringLiteral,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: selector kinds, property keys, `true`/`false`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// `[`
    #[token("[")]
    BracketOpen,

    /// `]`
    #[token("]")]
    BracketClose,

    /// `=`
    #[token("=")]
    Equals,
}

/// A token with its source text and byte offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub text: String,
    pub offset: usize,
}

/// Tokenize a style table source.
///
/// Unlike the lenient markup scanner in the headless host, a style table is
/// configuration: any byte that does not lex fails the whole load.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(input).spanned() {
        match result {
            Ok(token) => tokens.push(Spanned {
                token,
                text: input[span.clone()].to_owned(),
                offset: span.start,
            }),
            Err(()) => return Err(ParseError::InvalidCharacter { offset: span.start }),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn section_header() {
        assert_eq!(
            tokens("[Button:hover]"),
            vec![
                Token::BracketOpen,
                Token::Ident,
                Token::PseudoClass,
                Token::BracketClose,
            ]
        );
    }

    #[test]
    fn declaration_values() {
        assert_eq!(
            tokens("icon_opacity = 0.3 border_color = #883c8cbd"),
            vec![
                Token::Ident,
                Token::Equals,
                Token::Number,
                Token::Ident,
                Token::Equals,
                Token::HexColor,
            ]
        );
    }

    #[test]
    fn comments_and_strings_skipped_or_kept() {
        let spanned = tokenize("// theme\nname = \"dark\"").unwrap();
        assert_eq!(spanned.len(), 3);
        assert_eq!(spanned[2].token, Token::StringLiteral);
        assert_eq!(spanned[2].text, "\"dark\"");
        assert_eq!(spanned[0].offset, 9);
    }

    #[test]
    fn hex_color_lengths() {
        for color in ["#333", "#333a", "#2A2A2A", "#883c8cbd"] {
            let spanned = tokenize(color).unwrap();
            assert_eq!(spanned.len(), 1, "{color}");
            assert_eq!(spanned[0].token, Token::HexColor);
        }
        let spanned = tokenize("#12345").unwrap();
        assert_eq!(spanned[0].text, "#1234");
        assert_eq!(spanned[1].token, Token::Number);
    }

    #[test]
    fn invalid_character() {
        assert!(matches!(
            tokenize("[Button]\ncolor = @"),
            Err(ParseError::InvalidCharacter { offset: 17 })
        ));
    }
}
