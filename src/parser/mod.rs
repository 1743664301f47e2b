pub mod acts;
pub mod dialogue;
pub mod duration;
pub mod heading;
pub mod lexer;
pub mod scene;
pub mod types;

use tracing::debug;

use lexer::LineKind;
use types::Screenplay;

/// Parses loosely structured screenplay text into a structured document.
///
/// Returns `None` for empty or whitespace-only input and for input in
/// which no scene heading is recognized, since a screenplay without
/// scenes is not usable downstream. Never panics; malformed lines
/// degrade into the surrounding scene's description pool or are dropped
/// as noise.
pub fn parse_screenplay_text(text: &str) -> Option<Screenplay> {
    if text.trim().is_empty() {
        return None;
    }

    let lines: Vec<LineKind> = text
        .lines()
        .map(lexer::classify_line)
        .filter(|kind| !matches!(kind, LineKind::Blank))
        .collect();

    let acts = acts::extract_acts(&lines);
    let scenes = scene::extract_scenes(&lines);
    if scenes.is_empty() {
        debug!("no scene headings recognized, discarding input");
        return None;
    }
    debug!(scenes = scenes.len(), acts = acts.len(), "parsed screenplay");

    Some(Screenplay {
        title: String::new(),
        logline: String::new(),
        acts,
        scenes,
    })
}
