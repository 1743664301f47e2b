pub mod error;
pub mod parser;

pub use error::{Result, SluglineError};
pub use parser::parse_screenplay_text;
pub use parser::types::{Act, DialogueEntry, Scene, Screenplay, TimeOfDay, TimePeriod};

use std::path::Path;

/// Reads a screenplay file and parses it, mapping unusable input to an
/// error so callers at the file boundary get something to report. The
/// parser itself stays `Option`-based: see [`parse_screenplay_text`].
pub fn parse_screenplay_file(path: &Path) -> Result<Screenplay> {
    let text = std::fs::read_to_string(path)?;
    parse_screenplay_text(&text).ok_or(SluglineError::NoScreenplay)
}
