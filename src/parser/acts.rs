use std::sync::OnceLock;

use regex::Regex;

use super::lexer::LineKind;
use super::types::Act;

/// Matches `## ACT <roman> – <title>` (any dash glyph, optional markdown
/// marker, Roman numerals I through V only). Returns the decoded act
/// number and the trimmed title.
pub(crate) fn match_act_header(line: &str) -> Option<(u8, String)> {
    static ACT_RE: OnceLock<Regex> = OnceLock::new();
    let re = ACT_RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:#{1,3}\s*)?ACT\s+(I{1,3}|IV|V)\s*[-–—]\s*(.+)$")
            .expect("act header regex should compile")
    });
    let caps = re.captures(line)?;
    let number = roman_to_number(caps.get(1)?.as_str())?;
    let title = caps.get(2)?.as_str().trim().to_string();
    Some((number, title))
}

fn roman_to_number(roman: &str) -> Option<u8> {
    match roman.to_uppercase().as_str() {
        "I" => Some(1),
        "II" => Some(2),
        "III" => Some(3),
        "IV" => Some(4),
        "V" => Some(5),
        _ => None,
    }
}

/// Collects every act header in document order. The next retained line
/// becomes the act description when it is plain prose.
pub fn extract_acts(lines: &[LineKind]) -> Vec<Act> {
    let mut acts = Vec::new();
    for (idx, kind) in lines.iter().enumerate() {
        if let LineKind::ActHeader { number, title } = kind {
            let description = match lines.get(idx + 1) {
                Some(LineKind::Prose(text)) => text.clone(),
                _ => String::new(),
            };
            acts.push(Act {
                act_number: *number,
                title: title.clone(),
                description,
            });
        }
    }
    acts
}
