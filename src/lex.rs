use alloc::{string::String, vec::Vec};
use derive_more::Display;

pub mod token;

pub use token::{Token, TokenKind, TokenValue};

pub type Result<'src, O> = nom::IResult<&'src str, O>;

///
/// A failure while turning source text into tokens.
///
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LexError {
    #[display("empty input")]
    EmptyInput,
    #[display("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },
    #[display("integer literal {literal} is too large")]
    IntegerTooLarge { literal: String },
}

impl core::error::Error for LexError {}

///
/// A token as recognised in the source, before its value is converted.
///
#[derive(Debug, Clone, Copy, PartialEq)]
enum Lexeme<'src> {
    Integer(&'src str),
    Float(&'src str),
    OneChar(Token),
}

///
/// An on-demand tokenizer over a source string.
///
/// Once the input is exhausted, [`Lexer::next_token`] keeps returning
/// [`Token::eof`].
///
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    src: &'src str,
    rest: &'src str,
    failed: bool,
}

impl<'src> Lexeme<'src> {
    ///
    /// Parse a [`Lexeme`] from an input slice, assuming no preceding whitespace.
    ///
    fn parse(src: &'src str) -> Result<'src, Self> {
        use nom::{
            branch::alt,
            character::complete::{anychar, char, digit0, digit1},
            combinator::{map, map_opt, recognize},
            sequence::tuple,
        };

        alt((
            // a float must be tried first, it shares its prefix with an integer
            map(recognize(tuple((digit1, char('.'), digit0))), Lexeme::Float),
            map(digit1, Lexeme::Integer),
            map_opt(anychar, |c| Token::one_char(c).map(Lexeme::OneChar)),
        ))(src)
    }

    fn into_token(self) -> core::result::Result<Token, LexError> {
        match self {
            Lexeme::Integer(s) => s.parse().map(Token::integer).map_err(|_| {
                LexError::IntegerTooLarge {
                    literal: s.into(),
                }
            }),
            // every `digits.digits` string is a valid float, overlong ones
            // round to infinity
            Lexeme::Float(s) => Ok(Token::float(s.parse().unwrap_or(f64::INFINITY))),
            Lexeme::OneChar(token) => Ok(token),
        }
    }
}

impl<'src> Lexer<'src> {
    #[allow(clippy::missing_errors_doc)]
    pub fn new(src: &'src str) -> core::result::Result<Self, LexError> {
        if src.is_empty() {
            return Err(LexError::EmptyInput);
        }

        Ok(Self {
            src,
            rest: src,
            failed: false,
        })
    }

    ///
    /// Byte offset of the cursor into the source.
    ///
    #[must_use]
    pub fn offset(&self) -> usize {
        self.src.len() - self.rest.len()
    }

    ///
    /// Produce the next token, skipping any whitespace before it.
    ///
    #[allow(clippy::missing_errors_doc)]
    pub fn next_token(&mut self) -> core::result::Result<Token, LexError> {
        let (rest, _) =
            nom::bytes::complete::take_while::<_, _, nom::error::Error<_>>(
                char::is_whitespace,
            )(self.rest)
            .unwrap_or((self.rest, ""));
        self.rest = rest;

        let Some(found) = rest.chars().next() else {
            return Ok(Token::eof());
        };

        let (rest, lexeme) =
            Lexeme::parse(rest).map_err(|_| LexError::UnexpectedChar {
                found,
                offset: self.offset(),
            })?;
        let token = lexeme.into_token()?;

        self.rest = rest;
        Ok(token)
    }

    ///
    /// Every remaining token, excluding the final [`TokenKind::Eof`].
    ///
    #[allow(clippy::missing_errors_doc)]
    pub fn all_tokens(&mut self) -> core::result::Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.is_eof() {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = core::result::Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl core::iter::FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod test {
    use super::{LexError, Lexer, Token, TokenKind};
    use alloc::{string::String, vec::Vec};

    ///
    /// Declares a test case with a name, given input and expected tokens.
    ///
    macro_rules! test_case {
        ($name:ident, $input:expr, $expected:expr $(,)?) => {
            #[test]
            fn $name() {
                let expected: &[Token] = &$expected;
                let tokens = Lexer::new($input).unwrap().all_tokens().unwrap();

                assert_eq!(tokens, expected);
            }
        };
    }

    ///
    /// Shorthand for a single-character token.
    ///
    fn op(c: char) -> Token {
        Token::one_char(c).unwrap()
    }

    test_case!(
        handle_spaces,
        " 314      + 42 ",
        [Token::integer(314), op('+'), Token::integer(42)],
    );

    test_case!(
        mixed,
        "314+42*(1/2)",
        [
            Token::integer(314),
            op('+'),
            Token::integer(42),
            op('*'),
            op('('),
            Token::integer(1),
            op('/'),
            Token::integer(2),
            op(')'),
        ],
    );

    test_case!(
        floats,
        "42+3.14",
        [Token::integer(42), op('+'), Token::float(3.14)],
    );

    test_case!(trailing_dot, "1.", [Token::float(1.0)]);

    test_case!(
        unicode_whitespace,
        "\t1\u{a0}-\n2\u{2003}",
        [Token::integer(1), op('-'), Token::integer(2)],
    );

    test_case!(only_whitespace, "   ", []);

    #[test]
    fn empty_input() {
        assert_eq!(Lexer::new("").unwrap_err(), LexError::EmptyInput);
    }

    #[test]
    fn unexpected_char() {
        let err = Lexer::new("\\").unwrap().all_tokens().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedChar {
                found: '\\',
                offset: 0
            }
        );

        let err = Lexer::new("1 + x").unwrap().all_tokens().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedChar {
                found: 'x',
                offset: 4
            }
        );
    }

    #[test]
    fn lone_dot_is_unexpected() {
        let err = Lexer::new(".5").unwrap().all_tokens().unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { found: '.', .. }));
    }

    #[test]
    fn integer_too_large() {
        let err = Lexer::new("99999999999999999999")
            .unwrap()
            .all_tokens()
            .unwrap_err();
        assert!(matches!(err, LexError::IntegerTooLarge { .. }));
    }

    #[test]
    fn overlong_float_is_infinite() {
        let mut src: String = core::iter::repeat('9').take(400).collect();
        src.push_str(".5");

        let tokens = Lexer::new(&src).unwrap().all_tokens().unwrap();
        assert_eq!(tokens, [Token::float(f64::INFINITY)]);
    }

    #[test]
    fn eof_is_idempotent() {
        let mut lexer = Lexer::new("7").unwrap();
        assert_eq!(lexer.next_token(), Ok(Token::integer(7)));

        for _ in 0..4 {
            let token = lexer.next_token().unwrap();
            assert_eq!(token, Token::eof());
            assert_eq!(token.kind(), TokenKind::Eof);
        }
        assert_eq!(lexer.offset(), 1);
    }

    #[test]
    fn iterator_stops_after_error() {
        let items: Vec<_> = Lexer::new("1 ? 2").unwrap().collect();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Ok(Token::integer(1)));
        assert!(items[1].is_err());
    }
}
