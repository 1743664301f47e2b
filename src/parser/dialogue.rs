use super::lexer::{self, LineKind};
use super::types::DialogueEntry;

/// Dialogue state within one scene: either between turns or accumulating
/// lines for a named character.
enum TurnState {
    Idle,
    InTurn {
        character: String,
        lines: Vec<String>,
    },
}

/// Dialogue turns plus the speaker roster for one scene.
pub struct DialogueBlocks {
    pub entries: Vec<DialogueEntry>,
    pub characters: Vec<String>,
}

/// Walks a scene body and groups consecutive dialogue lines into
/// per-character turns. A new marker closes the previous turn, any
/// non-quoted line closes it too, and the scene end flushes whatever is
/// open. Turns that captured no spoken lines are never emitted.
pub fn extract_dialogue(body: &[LineKind]) -> DialogueBlocks {
    let mut entries = Vec::new();
    let mut characters: Vec<String> = Vec::new();
    let mut state = TurnState::Idle;

    for kind in body {
        match kind {
            LineKind::DialogueMarker { character, spoken } => {
                flush(&mut state, &mut entries);
                note_character(&mut characters, character);
                let mut lines = Vec::new();
                if let Some(text) = spoken {
                    if !lexer::is_parenthetical(text) {
                        lines.push(text.clone());
                    }
                }
                state = TurnState::InTurn {
                    character: character.clone(),
                    lines,
                };
            }
            LineKind::DialogueLine(text) => {
                // A stray continuation with no open turn is dropped.
                if let TurnState::InTurn { lines, .. } = &mut state {
                    if !text.is_empty() && !lexer::is_parenthetical(text) {
                        lines.push(text.clone());
                    }
                }
            }
            LineKind::LegacyCharacter(name) => {
                flush(&mut state, &mut entries);
                note_character(&mut characters, name);
            }
            _ => flush(&mut state, &mut entries),
        }
    }
    flush(&mut state, &mut entries);

    DialogueBlocks {
        entries,
        characters,
    }
}

fn flush(state: &mut TurnState, entries: &mut Vec<DialogueEntry>) {
    if let TurnState::InTurn { character, lines } = std::mem::replace(state, TurnState::Idle) {
        if !lines.is_empty() {
            entries.push(DialogueEntry { character, lines });
        }
    }
}

fn note_character(characters: &mut Vec<String>, name: &str) {
    if !characters.iter().any(|known| known == name) {
        characters.push(name.to_string());
    }
}
