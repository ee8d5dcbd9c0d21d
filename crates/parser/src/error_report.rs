// Error reporting with Ariadne
//
// Renders a ParseError against the text that was being parsed.

use crate::error::ParseError;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::io;
use std::ops::Range;

/// Print a ParseError as an Ariadne report on stderr
pub fn report_error(filename: &str, source: &str, error: &ParseError) -> io::Result<()> {
    let span = locate(source, error).map(|span| char_span(source, span));
    let offset = span.as_ref().map(|s| s.start).unwrap_or(0);

    let report = Report::<(&str, Range<usize>)>::build(ReportKind::Error, filename, offset)
        .with_code(error.code());

    let report = match error {
        ParseError::MacroContract { value, kind } => report
            .with_message("Macro returned a non-string value")
            .with_help(format!(
                "got {} of type {}; every macro must return the rewritten text",
                value, kind
            )),

        ParseError::MissingOutput => report
            .with_message(error.to_string())
            .with_help("declare the return stage after '=>', e.g. 'name:string => *'"),

        ParseError::MalformedConstraint { found, .. } => report
            .with_message("Malformed dependent constraint")
            .with_help("constraints are comma separated and read 'left operator right'")
            .with_note(format!("found {} whitespace separated token(s)", found)),
    };

    let report = match span {
        Some(span) => report.with_label(
            Label::new((filename, span))
                .with_message(label_message(error))
                .with_color(Color::Red),
        ),
        None => report,
    };

    report.finish().eprint((filename, Source::from(source)))
}

/// Region of `source` the error refers to, when it can be found
pub(crate) fn locate(source: &str, error: &ParseError) -> Option<Range<usize>> {
    match error {
        ParseError::MacroContract { .. } => None,
        ParseError::MissingOutput if !source.is_empty() => Some(0..source.len()),
        ParseError::MissingOutput => None,
        ParseError::MalformedConstraint { span, .. }
            if !span.is_empty()
                && source.is_char_boundary(span.start)
                && source.is_char_boundary(span.end) =>
        {
            Some(span.clone())
        }
        ParseError::MalformedConstraint { .. } => None,
    }
}

/// Ariadne labels count chars, not bytes
fn char_span(source: &str, span: Range<usize>) -> Range<usize> {
    let start = source[..span.start].chars().count();
    start..start + source[span].chars().count()
}

fn label_message(error: &ParseError) -> String {
    match error {
        ParseError::MacroContract { kind, .. } => format!("macro produced a {}", kind),
        ParseError::MissingOutput => "no '=>' found in this signature".to_string(),
        ParseError::MalformedConstraint { found, .. } => {
            format!("expected 3 tokens here, found {}", found)
        }
    }
}
