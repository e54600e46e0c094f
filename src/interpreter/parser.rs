use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::lexer::{Token, TokenKind},
    position::Span,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a token sequence into an expression tree.
///
/// This is the entry point for parsing. The token sequence must end with the
/// [`TokenKind::Eof`] sentinel produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize); after a complete
/// expression the parser requires that sentinel to be the current token and
/// fails otherwise, naming the operators that could have continued the
/// expression.
///
/// Parsing never backtracks: each production either fully commits or fails at
/// the first token that cannot extend it, and the returned error carries that
/// token's span.
///
/// # Errors
/// Returns a [`SyntaxError`] describing the first grammar violation.
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut tokens = tokens.iter().peekable();

    let expression = parse_expression(&mut tokens)?;
    match tokens.peek() {
        Some(token) if !matches!(token.kind, TokenKind::Eof) => {
            Err(SyntaxError::UnexpectedToken { expected: "'+', '-', '*' or '/'",
                                               found:    token.kind.to_string(),
                                               span:     token.span, })
        },
        _ => Ok(expression),
    }
}

/// Parses a full expression.
///
/// Begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`, folding
/// iteratively from left to right.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(&&token) = tokens.peek()
           && let Some(op) = binary_operator(&token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            let span = Span::new(left.span().start, right.span().end);
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    span };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles the left-associative binary operators `*` and `/`, folding
/// iteratively from left to right.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some(&&token) = tokens.peek()
           && let Some(op) = binary_operator(&token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            let span = Span::new(left.span().start, right.span().end);
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    span };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (negation) and `|` (square root), both
/// right-associative, so `|-x` is parsed as `|(-x)`. A prefix `+` is a no-op
/// and is folded away rather than building a node. With no prefix operator
/// present the function delegates to [`parse_exponent`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "|") unary
///            | exponent
/// ```
fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(&&token) = tokens.peek() {
        match token.kind {
            TokenKind::Plus => {
                tokens.next();
                return parse_unary(tokens);
            },
            TokenKind::Minus | TokenKind::Pipe => {
                tokens.next();
                let operand = parse_unary(tokens)?;
                let op = if matches!(token.kind, TokenKind::Minus) {
                    UnaryOperator::Negate
                } else {
                    UnaryOperator::Sqrt
                };
                let span = Span::new(token.span.start, operand.span().end);
                return Ok(Expr::UnaryOp { op,
                                          operand: Box::new(operand),
                                          span });
            },
            _ => {},
        }
    }
    parse_exponent(tokens)
}

/// Parses exponentiation expressions.
///
/// `^` is right-associative: the right operand is itself an exponentiation,
/// so `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`.
///
/// Grammar: `exponent := primary ("^" exponent)?`
fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let base = parse_primary(tokens)?;
    if let Some(&&token) = tokens.peek()
       && matches!(token.kind, TokenKind::Caret)
    {
        tokens.next();
        let exponent = parse_exponent(tokens)?;
        let span = Span::new(base.span().start, exponent.span().end);
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   span });
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar: numeric literals and
/// parenthesized expressions. Anything else, including the end-of-input
/// sentinel, is a syntax error naming what was expected.
///
/// Grammar:
/// ```text
///     primary := INT
///              | FLOAT
///              | "(" expression ")"
/// ```
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(&&token) = tokens.peek() else {
        return Err(SyntaxError::UnexpectedEndOfInput { expected: "int or float",
                                                       span:     Span::default(), });
    };

    match token.kind {
        TokenKind::Integer(value) => {
            tokens.next();
            Ok(Expr::Number { value: value.into(),
                              span:  token.span, })
        },
        TokenKind::Real(value) => {
            tokens.next();
            Ok(Expr::Number { value: value.into(),
                              span:  token.span, })
        },
        TokenKind::LParen => parse_grouping(tokens),
        TokenKind::Eof => {
            Err(SyntaxError::UnexpectedEndOfInput { expected: "int or float",
                                                    span:     token.span, })
        },
        _ => Err(SyntaxError::UnexpectedToken { expected: "int or float",
                                                found:    token.kind.to_string(),
                                                span:     token.span, }),
    }
}

/// Parses a parenthesized expression.
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. The inner expression is
/// returned as-is, with no wrapper node.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    tokens.next(); // the '(' the caller peeked at

    let expression = parse_expression(tokens)?;
    match tokens.next() {
        Some(Token { kind: TokenKind::RParen, .. }) => Ok(expression),
        Some(token) => Err(SyntaxError::ExpectedClosingParen { span: token.span }),
        None => Err(SyntaxError::ExpectedClosingParen { span: Span::default() }),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/` or `^`) and `None` for all other tokens.
///
/// # Example
/// ```
/// use cosmo::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary_operator},
/// };
///
/// assert_eq!(binary_operator(&TokenKind::Plus), Some(BinaryOperator::Add));
/// assert_eq!(binary_operator(&TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
