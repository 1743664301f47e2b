use tracing::debug;

use super::dialogue;
use super::duration;
use super::heading::SceneHeading;
use super::lexer::LineKind;
use super::types::Scene;

const DESCRIPTION_LIMIT: usize = 500;
const FALLBACK_DESCRIPTION: &str = "Scene description";

/// Splits the classified line buffer at scene headings and assembles one
/// `Scene` per boundary. Each extractor only ever sees its own
/// `(start, end)` range, so nothing leaks between scenes.
pub fn extract_scenes(lines: &[LineKind]) -> Vec<Scene> {
    let boundaries: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, kind)| matches!(kind, LineKind::SceneHeading(_)).then_some(idx))
        .collect();

    let mut scenes = Vec::with_capacity(boundaries.len());
    for (pos, &start) in boundaries.iter().enumerate() {
        let end = boundaries.get(pos + 1).copied().unwrap_or(lines.len());
        let LineKind::SceneHeading(heading) = &lines[start] else {
            continue;
        };
        scenes.push(build_scene(pos + 1, heading, &lines[start + 1..end]));
    }
    scenes
}

fn build_scene(number: usize, heading: &SceneHeading, body: &[LineKind]) -> Scene {
    let blocks = dialogue::extract_dialogue(body);
    let (action, description) = extract_action_description(body);
    let spoken_lines: usize = blocks.entries.iter().map(|entry| entry.lines.len()).sum();
    let duration_estimate = duration::estimate_duration(spoken_lines, action.len());
    debug!(
        scene = number,
        dialogue = spoken_lines,
        action = action.len(),
        "assembled scene"
    );

    Scene {
        scene_id: format!("scene_{number}"),
        scene_number: number,
        time_of_day: heading.time_of_day,
        location: heading.location.clone(),
        time_period: heading.time_period,
        description,
        action,
        dialogue: blocks.entries,
        characters: blocks.characters,
        duration_estimate,
    }
}

/// Separates italic action beats from narrative description over the
/// lines dialogue did not claim. Description accumulation stops for good
/// at the first dialogue marker and at the first `CUT TO` line; `CUT TO`
/// lines are excluded from both pools regardless of formatting.
fn extract_action_description(body: &[LineKind]) -> (Vec<String>, String) {
    let mut action = Vec::new();
    let mut parts: Vec<&str> = Vec::new();
    let mut accumulating = true;

    for kind in body {
        match kind {
            LineKind::ActionLine(beat) => {
                if beat.contains("CUT TO") {
                    accumulating = false;
                } else {
                    action.push(beat.clone());
                }
            }
            LineKind::DialogueMarker { .. } => accumulating = false,
            LineKind::Prose(text) => {
                if text.contains("CUT TO") {
                    accumulating = false;
                } else if accumulating {
                    parts.push(text);
                }
            }
            _ => {}
        }
    }

    let mut description = parts.join(" ");
    if description.chars().count() > DESCRIPTION_LIMIT {
        description = description.chars().take(DESCRIPTION_LIMIT).collect();
    }
    if description.is_empty() {
        description = FALLBACK_DESCRIPTION.to_string();
    }

    (action, description)
}
