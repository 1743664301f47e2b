use std::sync::OnceLock;

use regex::Regex;

use super::acts;
use super::heading::{self, SceneHeading};

/// Syntactic kind of a single input line. Classification happens in one
/// pass; every downstream extractor pattern-matches over the tagged
/// sequence instead of re-deriving line kind from raw strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Blank,
    /// Markdown noise: `#`/`**`/`---` prefixes and inline act mentions.
    Meta,
    ActHeader {
        number: u8,
        title: String,
    },
    SceneHeading(SceneHeading),
    /// Bare `**NAME**` heading from the legacy dialogue format. Carries
    /// the character name only; the plain-text lines after it are never
    /// captured as dialogue (intentional backwards-compat limitation).
    LegacyCharacter(String),
    /// `> **NAME**`, optionally followed by a first spoken fragment.
    DialogueMarker {
        character: String,
        spoken: Option<String>,
    },
    /// A `>`-prefixed continuation line inside a dialogue turn.
    DialogueLine(String),
    /// `*text*` italic action beat, asterisks stripped.
    ActionLine(String),
    /// A standalone `(...)` stage direction, discarded everywhere.
    Parenthetical,
    Prose(String),
}

pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if let Some((number, title)) = acts::match_act_header(trimmed) {
        return LineKind::ActHeader { number, title };
    }
    // Inline act mentions that are not headers are noise, not prose.
    if mentions_act_inline(trimmed) {
        return LineKind::Meta;
    }
    if let Some(heading) = heading::parse_scene_heading(trimmed) {
        return LineKind::SceneHeading(heading);
    }
    if let Some(name) = legacy_character(trimmed) {
        return LineKind::LegacyCharacter(name);
    }
    if trimmed.starts_with('#') || trimmed.starts_with("**") || trimmed.starts_with("---") {
        return LineKind::Meta;
    }
    if let Some(rest) = trimmed.strip_prefix('>') {
        let rest = rest.trim();
        if let Some((character, spoken)) = dialogue_marker(rest) {
            return LineKind::DialogueMarker { character, spoken };
        }
        return LineKind::DialogueLine(rest.to_string());
    }
    if let Some(beat) = action_line(trimmed) {
        return LineKind::ActionLine(beat);
    }
    if is_parenthetical(trimmed) {
        return LineKind::Parenthetical;
    }

    LineKind::Prose(trimmed.to_string())
}

fn mentions_act_inline(line: &str) -> bool {
    static ACT_INLINE_RE: OnceLock<Regex> = OnceLock::new();
    let re = ACT_INLINE_RE.get_or_init(|| {
        Regex::new(r"(?i)\bact\s+(?:III|II|IV|I|V)\b").expect("inline act regex should compile")
    });
    re.is_match(line)
}

fn legacy_character(line: &str) -> Option<String> {
    static LEGACY_RE: OnceLock<Regex> = OnceLock::new();
    let re = LEGACY_RE
        .get_or_init(|| Regex::new(r"^\*\*([^*]+)\*\*$").expect("legacy name regex should compile"));
    let inner = re.captures(line)?.get(1)?.as_str().trim();
    let name = inner.trim_end_matches(':').trim();
    let looks_like_name = name.chars().any(char::is_alphabetic) && name == name.to_uppercase();
    looks_like_name.then(|| name.to_string())
}

fn dialogue_marker(rest: &str) -> Option<(String, Option<String>)> {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    let re = MARKER_RE.get_or_init(|| {
        Regex::new(r"^\*\*(.+?)\*\*:?\s*(.*)$").expect("dialogue marker regex should compile")
    });
    let caps = re.captures(rest)?;
    let character = caps
        .get(1)?
        .as_str()
        .trim()
        .trim_end_matches(':')
        .trim()
        .to_string();
    if character.is_empty() {
        return None;
    }
    let spoken = caps
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string);
    Some((character, spoken))
}

fn action_line(line: &str) -> Option<String> {
    if line.len() < 3 || !line.starts_with('*') || !line.ends_with('*') {
        return None;
    }
    // Double asterisks are bold metadata, not italics.
    if line.starts_with("**") || line.ends_with("**") {
        return None;
    }
    let inner = line[1..line.len() - 1].trim();
    (!inner.is_empty() && !inner.contains('*')).then(|| inner.to_string())
}

pub(crate) fn is_parenthetical(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('(') && line.ends_with(')')
}
