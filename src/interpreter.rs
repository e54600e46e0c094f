/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST and reduces each node to a numeric value or a
/// positioned runtime error. It owns the [`evaluator::Context`] frame type
/// whose chain attributes evaluation failures to their call site.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Reports runtime errors such as division by zero or the square root of a
///   negative number, positioned at the offending operand.
/// - Threads the active context into every runtime error for tracebacks.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text left to right and produces a sequence
/// of tokens, each tagged with the span of the text it covers. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into spanned tokens.
/// - Scans integer and floating-point literals.
/// - Reports an illegal-character error for unrecognized input, covering
///   exactly the offending character.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer by recursive
/// descent and constructs an AST that encodes operator precedence and
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the expression grammar, reporting errors with the span of the
///   first token that cannot extend the current production.
/// - Requires the end-of-input sentinel after a complete expression.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the numeric value produced by evaluation and the
/// arithmetic on it, including the promotion rules between integers and
/// reals.
pub mod value;
