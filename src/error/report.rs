use crate::{
    error::Diagnostic,
    interpreter::evaluator::Context,
    position::Position,
};

/// Renders a diagnostic into a complete, human-readable report.
///
/// The report contains, in order: the traceback lines for runtime errors
/// (syntax errors occur before any evaluation frame exists and have none),
/// the error message, a `File <id>, line <n>` header, and a caret underline
/// beneath the offending span of `source_text`.
///
/// `source_text` must be the same text the diagnostic was produced from;
/// spans index into it.
///
/// # Example
/// ```
/// use cosmo::{error::report::render, run};
///
/// let source = "10 / 0";
/// let diagnostic = run("<doc>", source).unwrap_err();
///
/// let report = render(source, &diagnostic);
/// assert!(report.contains("division by zero"));
/// assert!(report.contains("File <doc>, line 1"));
/// ```
#[must_use]
pub fn render(source_text: &str, diagnostic: &Diagnostic) -> String {
    let span = diagnostic.span();

    let mut output = String::new();
    if let Some(context) = diagnostic.context() {
        output.push_str(&traceback(context, span.start));
        output.push('\n');
    }
    output.push_str(&format!("{diagnostic}\n"));
    output.push_str(&format!("File {}, line {}\n", diagnostic.source_id, span.start.line + 1));
    output.push('\n');
    output.push_str(&underline(source_text, span.start, span.end));
    output
}

/// Draws a caret underline beneath the span `[start, end)` of `source_text`.
///
/// Each source line touched by the span is echoed followed by a row of `^`
/// characters covering the spanned columns. A zero-width span (such as the
/// end-of-input position) still produces a single caret so the location stays
/// visible.
///
/// # Example
/// ```
/// use cosmo::{
///     error::report::underline,
///     position::Position,
/// };
///
/// let start = Position { offset: 5, line: 0, column: 5 };
/// let end = Position { offset: 6, line: 0, column: 6 };
///
/// assert_eq!(underline("10 / 0", start, end), "10 / 0\n     ^");
/// ```
#[must_use]
pub fn underline(source_text: &str, start: Position, end: Position) -> String {
    let lines: Vec<&str> = source_text.split('\n').collect();

    let mut output = String::new();
    for line_number in start.line..=end.line {
        let Some(line) = lines.get(line_number as usize) else {
            break;
        };

        let column_start = if line_number == start.line {
            start.column as usize
        } else {
            0
        };
        let column_end = if line_number == end.line {
            end.column as usize
        } else {
            line.chars().count()
        };

        if !output.is_empty() {
            output.push('\n');
        }
        // Tabs would throw the caret row out of alignment.
        output.push_str(&line.replace('\t', " "));
        output.push('\n');
        output.push_str(&" ".repeat(column_start));
        output.push_str(&"^".repeat(column_end.saturating_sub(column_start).max(1)));
    }
    output
}

/// Synthesizes a traceback from a context chain.
///
/// Walks the chain from the innermost frame outwards, emitting one line per
/// frame in the form `in <display_name> at line <N>`. The innermost frame is
/// located at `position` (where the error was raised); each outer frame is
/// located at the position its child frame was entered from.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use cosmo::{
///     error::report::traceback,
///     interpreter::evaluator::Context,
///     position::Position,
/// };
///
/// let program = Rc::new(Context::new("<program>"));
/// let entry = Position { offset: 4, line: 0, column: 4 };
/// let frame = Context::nested("<sqrt>", program, entry);
///
/// let raised_at = Position { offset: 8, line: 1, column: 2 };
/// assert_eq!(traceback(&frame, raised_at),
///            "in <sqrt> at line 2\nin <program> at line 1");
/// ```
#[must_use]
pub fn traceback(context: &Context, position: Position) -> String {
    let mut lines = Vec::new();

    let mut line = position.line;
    let mut frame = Some(context);
    while let Some(context) = frame {
        lines.push(format!("in {} at line {}", context.display_name, line + 1));
        if let Some(entry) = context.parent_entry_position {
            line = entry.line;
        }
        frame = context.parent.as_deref();
    }

    lines.join("\n")
}
