use std::sync::OnceLock;

use regex::Regex;

use super::types::{TimeOfDay, TimePeriod};

/// A recognized slugline, e.g. `INT. COFFEE SHOP - DAY`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneHeading {
    pub time_of_day: TimeOfDay,
    pub location: String,
    pub time_period: TimePeriod,
}

/// Tries to read a line as a scene heading. Tolerates markdown heading
/// markers, any dash glyph as separator, `INT./EXT.` spellings, quoted
/// sub-locations and a trailing `(n)` scene-number annotation. A line
/// that merely mentions `INT.` mid-sentence never matches: the prefix
/// is anchored at line start and a separator plus time token must follow.
pub fn parse_scene_heading(line: &str) -> Option<SceneHeading> {
    static HEADING_RE: OnceLock<Regex> = OnceLock::new();
    let re = HEADING_RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:#{1,3}\s*)?(INT\.?\s*/\s*EXT|INT|EXT)\.\s*(.+)$")
            .expect("scene heading regex should compile")
    });

    let caps = re.captures(line.trim())?;
    let prefix = caps.get(1)?.as_str().to_uppercase();
    let time_of_day = if prefix.contains('/') {
        TimeOfDay::IntExt
    } else if prefix == "INT" {
        TimeOfDay::Int
    } else {
        TimeOfDay::Ext
    };

    let rest = strip_scene_annotation(caps.get(2)?.as_str());
    let fragments = split_fragments(rest);
    // Location plus time token at minimum, otherwise this is prose.
    if fragments.len() < 2 {
        return None;
    }

    let location = fragments[0].replace('"', "").trim().to_uppercase();
    if location.is_empty() {
        return None;
    }
    let time_period = TimePeriod::from_token(fragments.last()?);

    Some(SceneHeading {
        time_of_day,
        location,
        time_period,
    })
}

fn strip_scene_annotation(rest: &str) -> &str {
    static ANNOTATION_RE: OnceLock<Regex> = OnceLock::new();
    let re = ANNOTATION_RE.get_or_init(|| {
        Regex::new(r"\s*\(\s*#?\d+\s*\)\s*$").expect("scene annotation regex should compile")
    });
    match re.find(rest) {
        Some(m) => &rest[..m.start()],
        None => rest,
    }
}

fn split_fragments(rest: &str) -> Vec<&str> {
    static DASH_RE: OnceLock<Regex> = OnceLock::new();
    let re = DASH_RE
        .get_or_init(|| Regex::new(r"\s*[-–—]\s*").expect("dash separator regex should compile"));
    re.split(rest)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_interior_heading() {
        let heading = parse_scene_heading("INT. COFFEE SHOP - DAY").unwrap();
        assert_eq!(heading.time_of_day, TimeOfDay::Int);
        assert_eq!(heading.location, "COFFEE SHOP");
        assert_eq!(heading.time_period, TimePeriod::Day);
    }

    #[test]
    fn test_exterior_heading() {
        let heading = parse_scene_heading("EXT. CITY STREET - NIGHT").unwrap();
        assert_eq!(heading.time_of_day, TimeOfDay::Ext);
        assert_eq!(heading.time_period, TimePeriod::Night);
    }

    #[test]
    fn test_int_ext_heading() {
        let heading = parse_scene_heading("INT/EXT. CAR - CONTINUOUS").unwrap();
        assert_eq!(heading.time_of_day, TimeOfDay::IntExt);
        assert_eq!(heading.time_period, TimePeriod::Continuous);
    }

    #[test]
    fn test_int_dot_ext_spelling() {
        let heading = parse_scene_heading("INT./EXT. CAR - DAY").unwrap();
        assert_eq!(heading.time_of_day, TimeOfDay::IntExt);
        assert_eq!(heading.location, "CAR");
    }

    #[test]
    fn test_dash_glyphs_parse_identically() {
        let hyphen = parse_scene_heading("INT. LAB - NIGHT").unwrap();
        let en_dash = parse_scene_heading("INT. LAB – NIGHT").unwrap();
        let em_dash = parse_scene_heading("INT. LAB — NIGHT").unwrap();
        assert_eq!(hyphen, en_dash);
        assert_eq!(hyphen, em_dash);
    }

    #[test]
    fn test_markdown_prefix_is_absorbed() {
        let heading = parse_scene_heading("## INT. WAREHOUSE - DUSK").unwrap();
        assert_eq!(heading.location, "WAREHOUSE");
        assert_eq!(heading.time_period, TimePeriod::Dusk);
    }

    #[test]
    fn test_lowercase_heading_is_uppercased() {
        let heading = parse_scene_heading("int. coffee shop - day").unwrap();
        assert_eq!(heading.time_of_day, TimeOfDay::Int);
        assert_eq!(heading.location, "COFFEE SHOP");
    }

    #[test]
    fn test_quoted_sub_location_keeps_first_fragment() {
        let heading = parse_scene_heading("INT. JANE'S HOUSE - \"THE DEN\" - NIGHT").unwrap();
        assert_eq!(heading.location, "JANE'S HOUSE");
        assert_eq!(heading.time_period, TimePeriod::Night);
    }

    #[test]
    fn test_quoted_location_is_stripped() {
        let heading = parse_scene_heading("INT. \"THE DEN\" - NIGHT").unwrap();
        assert_eq!(heading.location, "THE DEN");
        assert!(!heading.location.contains('"'));
    }

    #[test]
    fn test_trailing_scene_number_annotation() {
        let heading = parse_scene_heading("INT. LAB - NIGHT (3)").unwrap();
        assert_eq!(heading.location, "LAB");
        assert_eq!(heading.time_period, TimePeriod::Night);
    }

    #[test]
    fn test_morning_normalizes_to_day() {
        let heading = parse_scene_heading("EXT. PARK - MORNING").unwrap();
        assert_eq!(heading.time_period, TimePeriod::Day);
    }

    #[test]
    fn test_missing_separator_is_not_a_heading() {
        assert!(parse_scene_heading("INT. COFFEE SHOP").is_none());
    }

    #[test]
    fn test_prose_mentioning_int_is_not_a_heading() {
        assert!(parse_scene_heading("She waits by the INT. sign - nervous").is_none());
        assert!(parse_scene_heading("The interior - a mess").is_none());
    }

    #[test]
    fn test_dawn_period() {
        let heading = parse_scene_heading("EXT. ROOFTOP - DAWN").unwrap();
        assert_eq!(heading.time_period, TimePeriod::Dawn);
    }
}
