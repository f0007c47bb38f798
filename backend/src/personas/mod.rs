mod roster;

use roster::RosterEntry;
use shared::models::Character;
use std::collections::HashMap;

/// Character used when an unrecognized id is requested. Resolution never
/// fails; unknown ids land here.
pub const DEFAULT_CHARACTER: &str = "gordon";

/// The generation-facing half of a character: steering text for the external
/// provider and a pool of canned critiques for fallback mode.
#[derive(Clone, Copy)]
pub struct Persona {
    pub style_instruction: &'static str,
    pub fallback_pool: &'static [&'static str],
}

/// Immutable character table, built once at startup and injected into the
/// orchestrator.
pub struct PersonaRegistry {
    by_id: HashMap<&'static str, &'static RosterEntry>,
    default: &'static RosterEntry,
}

impl PersonaRegistry {
    pub fn new() -> Self {
        let by_id: HashMap<_, _> = roster::ROSTER.iter().map(|entry| (entry.id, entry)).collect();
        let default = roster::ROSTER
            .iter()
            .find(|entry| entry.id == DEFAULT_CHARACTER)
            .unwrap_or(&roster::ROSTER[0]);
        Self { by_id, default }
    }

    /// Resolve an id to its persona. Unknown ids silently resolve to the
    /// default character; the returned id is always a roster id.
    pub fn resolve(&self, character_id: &str) -> (&'static str, Persona) {
        let entry = self.by_id.get(character_id).copied().unwrap_or(self.default);
        (
            entry.id,
            Persona {
                style_instruction: entry.style,
                fallback_pool: entry.fallbacks,
            },
        )
    }

    /// Display roster for the character selector, in authored order.
    pub fn characters(&self) -> Vec<Character> {
        roster::ROSTER
            .iter()
            .map(|entry| Character {
                id: entry.id.to_string(),
                name: entry.name.to_string(),
                emoji: entry.emoji.to_string(),
                description: entry.description.to_string(),
            })
            .collect()
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
