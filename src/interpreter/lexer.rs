use crate::{
    error::SyntaxError,
    position::{Position, Span},
};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    Integer(i64),
    /// Floating-point literal tokens, such as `3.14`, `.5` or `2.`.
    Real(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `|`
    Pipe,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input. Appended exactly once by [`tokenize`], with a zero-width
    /// span at the final position; the parser relies on this sentinel.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::Pipe => write!(f, "|"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with the span of the source text it covers.
///
/// Tokens are immutable once produced. Every token except [`TokenKind::Eof`]
/// covers at least one character; numeric literals span their full lexeme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The source text covered by the token.
    pub span: Span,
}

impl Token {
    /// Creates a token covering `span`.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Result type used by the lexer.
pub type LexResult = Result<Vec<Token>, SyntaxError>;

/// Converts source text into an ordered sequence of spanned tokens.
///
/// Scans left to right. Spaces, tabs and newlines are skipped; a digit or `.`
/// starts a numeric literal; each of `+ - * / ^ | ( )` maps to exactly one
/// single-character token. Any other character fails the whole call with an
/// illegal-character error covering exactly that character; no tokens are
/// returned alongside an error.
///
/// On success the sequence ends with exactly one [`TokenKind::Eof`] token
/// carrying a zero-width span at the final position.
///
/// # Errors
/// Returns [`SyntaxError::IllegalCharacter`] for unrecognized input and
/// [`SyntaxError::LiteralTooLarge`] for an integer literal that does not fit
/// 64 bits.
///
/// # Example
/// ```
/// use cosmo::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
///
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0].kind, TokenKind::Integer(1));
/// assert_eq!(tokens[1].kind, TokenKind::Plus);
/// assert_eq!(tokens[3].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source_text: &str) -> LexResult {
    Lexer::new(source_text).tokenize()
}

/// The scanning cursor over one source text.
///
/// Holds the characters being scanned and the current [`Position`]. The
/// cursor is private to a single [`tokenize`] call and discarded when the
/// call ends.
struct Lexer {
    source:   Vec<char>,
    position: Position,
}

impl Lexer {
    fn new(source_text: &str) -> Self {
        Self { source:   source_text.chars().collect(),
               position: Position::start(), }
    }

    /// The one-character lookahead, `None` at the end of the input.
    fn current(&self) -> Option<char> {
        self.source.get(self.position.offset).copied()
    }

    fn advance(&mut self) {
        if let Some(character) = self.current() {
            self.position.advance(character);
        }
    }

    fn tokenize(mut self) -> LexResult {
        let mut tokens = Vec::new();

        while let Some(character) = self.current() {
            match character {
                ' ' | '\t' | '\n' => self.advance(),
                '0'..='9' | '.' => tokens.push(self.scan_number()?),
                '+' => tokens.push(self.single(TokenKind::Plus)),
                '-' => tokens.push(self.single(TokenKind::Minus)),
                '*' => tokens.push(self.single(TokenKind::Star)),
                '/' => tokens.push(self.single(TokenKind::Slash)),
                '^' => tokens.push(self.single(TokenKind::Caret)),
                '|' => tokens.push(self.single(TokenKind::Pipe)),
                '(' => tokens.push(self.single(TokenKind::LParen)),
                ')' => tokens.push(self.single(TokenKind::RParen)),
                _ => {
                    let start = self.position;
                    self.advance();
                    return Err(SyntaxError::IllegalCharacter { character,
                                                               span: Span::new(start,
                                                                               self.position) });
                },
            }
        }

        tokens.push(Token::new(TokenKind::Eof, Span::empty(self.position)));
        Ok(tokens)
    }

    /// Consumes one character and produces a single-character token.
    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.advance();
        Token::new(kind, Span::new(start, self.position))
    }

    /// Scans a numeric literal: consecutive digits and at most one `.`.
    ///
    /// A second `.` terminates the literal and is left for the next scan, so
    /// `1.2.3` lexes as `1.2` followed by `.3`. A lone `.` with no digits on
    /// either side is rejected as an illegal character.
    fn scan_number(&mut self) -> Result<Token, SyntaxError> {
        let start = self.position;
        let mut lexeme = String::new();
        let mut dots = 0;

        while let Some(character) = self.current() {
            match character {
                '0'..='9' => {
                    lexeme.push(character);
                    self.advance();
                },
                '.' if dots == 0 => {
                    dots += 1;
                    lexeme.push(character);
                    self.advance();
                },
                _ => break,
            }
        }

        let span = Span::new(start, self.position);
        if lexeme == "." {
            return Err(SyntaxError::IllegalCharacter { character: '.',
                                                       span });
        }

        if dots == 0 {
            match lexeme.parse::<i64>() {
                Ok(value) => Ok(Token::new(TokenKind::Integer(value), span)),
                Err(_) => Err(SyntaxError::LiteralTooLarge { span }),
            }
        } else {
            match lexeme.parse::<f64>() {
                Ok(value) => Ok(Token::new(TokenKind::Real(value), span)),
                Err(_) => Err(SyntaxError::LiteralTooLarge { span }),
            }
        }
    }
}
