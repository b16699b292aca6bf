//! Response renderer
//!
//! Pure string-to-markup transformer. Detects the section markers emitted by
//! the prompt templates and wraps each known section in a distinct styled
//! container; text without markers passes through inline formatting only.
//! Total over all inputs: malformed or partial marker sequences degrade to
//! the generic container, never to a failure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::prompt::SECTION_MARKER;

/// Known section names (lowercase) and the container class each maps to.
/// Matching is case-insensitive substring over the segment heading.
const SECTION_CLASSES: &[(&str, &str)] = &[
    ("problem analysis", "cod-problem-analysis"),
    ("chain of draft", "cod-draft-steps"),
    ("initial reflection", "cod-reflection"),
    ("draft solution", "cod-draft-solution"),
    ("stage 2 verification", "cod-verification"),
    ("error detection", "cod-error-detection"),
    ("alternative approach", "cod-alternatives"),
    ("confidence assessment", "cod-confidence"),
    ("final comprehensive answer", "cod-final-answer"),
    ("final answer", "cod-final-answer"),
    ("reflection summary", "cod-reflection-summary"),
];

const GENERIC_CLASS: &str = "cod-generic";

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").expect("valid pattern"));
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("valid pattern"));

/// Render model output into styled markup.
pub fn render(text: &str) -> String {
    if !has_section_marker(text) {
        return inline_format(text);
    }

    let mut out = String::new();
    for segment in split_sections(text) {
        match segment.heading {
            None => {
                // Text before the first marker passes through unwrapped
                if !segment.body.trim().is_empty() {
                    out.push_str(&inline_format(segment.body.trim_end()));
                    out.push('\n');
                }
            }
            Some(heading) => {
                let (class, display) = classify(&heading);
                out.push_str(&format!(
                    "<div class=\"cod-section {}\"><h4>{}</h4><div class=\"cod-section-body\">{}</div></div>\n",
                    class,
                    escape_html(&display),
                    inline_format(segment.body.trim())
                ));
            }
        }
    }
    out
}

/// Inline substitutions only: bold, italic, code spans, line breaks, over
/// HTML-escaped text.
pub fn inline_format(text: &str) -> String {
    let escaped = escape_html(text);
    let bolded = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let italicized = ITALIC.replace_all(&bolded, "<em>$1</em>");
    let coded = CODE.replace_all(&italicized, "<code>$1</code>");
    coded.replace('\n', "<br>")
}

fn has_section_marker(text: &str) -> bool {
    text.lines().any(|line| {
        line.starts_with(SECTION_MARKER) && !line[SECTION_MARKER.len()..].trim().is_empty()
    })
}

struct Segment {
    heading: Option<String>,
    body: String,
}

fn split_sections(text: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut current = Segment {
        heading: None,
        body: String::new(),
    };

    for line in text.lines() {
        let marker_heading = line
            .starts_with(SECTION_MARKER)
            .then(|| line[SECTION_MARKER.len()..].trim())
            .filter(|h| !h.is_empty());

        match marker_heading {
            Some(heading) => {
                segments.push(current);
                current = Segment {
                    heading: Some(heading.to_string()),
                    body: String::new(),
                };
            }
            None => {
                if !current.body.is_empty() {
                    current.body.push('\n');
                }
                current.body.push_str(line);
            }
        }
    }
    segments.push(current);
    segments
}

/// Map a heading to its container class and display text. Unknown headings
/// fall back to the generic container with the capitalized heading kept.
fn classify(heading: &str) -> (&'static str, String) {
    let lower = heading.to_lowercase();
    for (key, class) in SECTION_CLASSES {
        if lower.contains(key) {
            return (class, heading.to_string());
        }
    }
    (GENERIC_CLASS, capitalize_first(heading))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
