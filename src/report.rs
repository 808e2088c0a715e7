//! Presentation of a [`VerdictReport`] for the console.
//!
//! Nothing here prints; callers decide where the text goes.
use crate::analyzer::VerdictReport;
use crate::analyzer::lexer::Token;
use serde::Serialize;
use serde_json::Value as JsonValue;

pub const ANSII_CLEAR: &str = "\x1b[0m";
pub const ANSII_COLOR_RED: &str = "\x1b[91m";
pub const ANSII_COLOR_GREEN: &str = "\x1b[92m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    pub show_tokens: bool,
}

/// Renders the report as console lines, each ending with a newline.
pub fn render(report: &VerdictReport, opts: &RenderOptions) -> String {
    let mut out = String::new();

    if opts.show_tokens {
        if let Some(tokens) = report.tokens() {
            let list = tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            out.push_str(&format!("  [INFO] Tokens: {}\n", list));
        }
    }

    match report.failure() {
        Some(e) => out.push_str(&paint(&format!("  [FAIL] {}", e), ANSII_COLOR_RED, opts.color)),
        None => out.push_str(&paint("  [OK] Expression is valid.", ANSII_COLOR_GREEN, opts.color)),
    }
    out.push('\n');
    out
}

fn paint(line: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{line}{ANSII_CLEAR}")
    } else {
        line.to_string()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a str,
    accepted: bool,
    diagnostics: Vec<String>,
    tokens: Option<&'a [Token]>,
}

pub fn to_json(report: &VerdictReport) -> JsonValue {
    let json = JsonReport {
        input: report.input(),
        accepted: report.accepted(),
        diagnostics: report.diagnostics(),
        tokens: report.tokens(),
    };
    // Plain strings, bools and derived enums; serialization to a Value cannot fail.
    serde_json::to_value(json).unwrap_or(JsonValue::Null)
}
