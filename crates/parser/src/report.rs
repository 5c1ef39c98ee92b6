// Error reporting with Ariadne
//
// Renders a ParseError against the source text it came from.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::io;

use crate::error::ParseError;

fn build<'a>(filename: &'a str, error: &ParseError, color: bool) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    let span = error.span();
    let title = match error {
        ParseError::Lex(_) => "Malformed number",
        ParseError::Syntax { .. } => "Syntax error",
        ParseError::UnbalancedBracket { .. } => "Unbalanced bracket",
    };

    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_code(error.code())
        .with_message(title)
        .with_config(Config::default().with_color(color))
        .with_label(
            Label::new((filename, span))
                .with_message(error.message())
                .with_color(Color::Red),
        );

    let report = match error {
        ParseError::UnbalancedBracket { .. } => {
            report.with_help("every '(' needs a matching ')'")
        }
        ParseError::Syntax { message, .. } if message.starts_with("value expected") => {
            report.with_help("operators must be followed by a number, a variable or '('")
        }
        _ => report,
    };

    report.finish()
}

/// Prints the report to stderr.
pub fn report_parse_error(filename: &str, source: &str, error: &ParseError) -> io::Result<()> {
    build(filename, error, true).eprint((filename, Source::from(source)))
}

/// The report as plain text, without colors.
pub fn render_parse_error(filename: &str, source: &str, error: &ParseError) -> String {
    let mut buffer = Vec::new();
    let written = build(filename, error, false).write((filename, Source::from(source)), &mut buffer);
    match written {
        Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
        Err(_) => error.to_string(),
    }
}
