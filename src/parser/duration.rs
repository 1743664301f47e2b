/// Shortest duration assigned to any scene, in seconds.
pub const MIN_SCENE_SECONDS: u32 = 3;
/// Longest duration assigned to any scene, in seconds.
pub const MAX_SCENE_SECONDS: u32 = 10;

/// Derives a bounded per-scene duration from content volume. Dialogue
/// lines weigh more than action beats; the estimate never decreases when
/// a scene gains content and saturates once roughly eight dialogue lines
/// plus a few beats are present.
pub fn estimate_duration(dialogue_lines: usize, action_beats: usize) -> u32 {
    let volume = (dialogue_lines * 4 + action_beats * 2) / 5;
    (MIN_SCENE_SECONDS + volume as u32).min(MAX_SCENE_SECONDS)
}
