use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "EXT")]
    Ext,
    #[serde(rename = "INT/EXT")]
    IntExt,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Int => write!(f, "INT"),
            TimeOfDay::Ext => write!(f, "EXT"),
            TimeOfDay::IntExt => write!(f, "INT/EXT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimePeriod {
    Day,
    Night,
    Dawn,
    Dusk,
    Continuous,
}

impl TimePeriod {
    /// Normalizes a heading time token. Loose synonyms like MORNING
    /// collapse to DAY; only the explicit vocabulary maps elsewhere.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_uppercase().as_str() {
            "NIGHT" => TimePeriod::Night,
            "DAWN" => TimePeriod::Dawn,
            "DUSK" => TimePeriod::Dusk,
            "CONTINUOUS" => TimePeriod::Continuous,
            _ => TimePeriod::Day,
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePeriod::Day => write!(f, "DAY"),
            TimePeriod::Night => write!(f, "NIGHT"),
            TimePeriod::Dawn => write!(f, "DAWN"),
            TimePeriod::Dusk => write!(f, "DUSK"),
            TimePeriod::Continuous => write!(f, "CONTINUOUS"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueEntry {
    pub character: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Act {
    pub act_number: u8,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub scene_id: String,
    pub scene_number: usize,
    pub time_of_day: TimeOfDay,
    pub location: String,
    pub time_period: TimePeriod,
    pub description: String,
    pub action: Vec<String>,
    pub dialogue: Vec<DialogueEntry>,
    pub characters: Vec<String>,
    pub duration_estimate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screenplay {
    pub title: String,
    pub logline: String,
    pub acts: Vec<Act>,
    pub scenes: Vec<Scene>,
}
