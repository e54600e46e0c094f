//! # cosmo
//!
//! cosmo is a small interpreter for plain arithmetic expressions written in
//! Rust. It tokenizes source text, parses the tokens into an abstract syntax
//! tree with the usual precedence and associativity rules, and evaluates the
//! tree to a numeric result, reporting precisely located, human-readable
//! diagnostics on failure.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Diagnostic,
    interpreter::{evaluator::Context, lexer::tokenize, parser::parse, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for literals, unary and binary operations.
/// - Attaches source spans to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting code,
/// the uniform `Diagnostic` record that `run` returns, and the renderer that
/// turns a diagnostic into a caret-annotated report.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source spans and, for runtime errors, the context chain.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and all supporting infrastructure to provide a complete
/// runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Source positions and spans.
///
/// This module provides the `Position` cursor over source text and the
/// half-open `Span` ranges that tokens, AST nodes and diagnostics carry.
pub mod position;

/// Interprets one source text and returns its value or a diagnostic.
///
/// This is the entry point of the pipeline: text is tokenized, the token
/// sequence is parsed, and the resulting tree is evaluated in a fresh
/// `<program>` frame. Each stage short-circuits on its own error kind and
/// never proceeds to the next stage, so exactly one of the two outcomes is
/// produced.
///
/// `source_id` labels the source in rendered diagnostics (a filename, or a
/// placeholder such as `<stdin>`). Calls are pure with respect to their
/// inputs: re-running the same text always yields the same result or the
/// same diagnostic.
///
/// # Errors
/// Returns a [`Diagnostic`] if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use cosmo::run;
///
/// let value = run("<doc>", "1 + 2 * 3").unwrap();
/// assert_eq!(value.to_string(), "7");
///
/// // Division by zero is a runtime diagnostic, not a panic.
/// assert!(run("<doc>", "10 / 0").is_err());
/// ```
pub fn run(source_id: &str, source_text: &str) -> Result<Value, Diagnostic> {
    let tokens = match tokenize(source_text) {
        Ok(tokens) => tokens,
        Err(e) => return Err(Diagnostic::syntax(source_id, e)),
    };

    let ast = match parse(&tokens) {
        Ok(ast) => ast,
        Err(e) => return Err(Diagnostic::syntax(source_id, e)),
    };

    let context = Context::new("<program>");
    match context.eval(&ast) {
        Ok(value) => Ok(value),
        Err(e) => Err(Diagnostic::runtime(source_id, e)),
    }
}
