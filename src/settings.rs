use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::Result,
    drills::DEFAULT_QUIZ_LENGTH,
    flashcards::PracticeDirection,
    persistence,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeSettings {
    pub quiz_length: usize,                      // Questions per quiz round
    pub vocabulary_direction: PracticeDirection, // Side shown first in vocabulary practice
    pub shuffle_verb_deck: bool,                 // Shuffle the verb-only flashcard deck
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            quiz_length: DEFAULT_QUIZ_LENGTH,
            vocabulary_direction: PracticeDirection::default(),
            shuffle_verb_deck: true,
        }
    }
}

impl PracticeSettings {
    pub fn load() -> Self {
        persistence::load_json_or_default::<Self>(SETTINGS_FILE).normalized()
    }

    pub fn load_from(dir: &Path) -> Self {
        persistence::load_json_or_default_in::<Self>(dir, SETTINGS_FILE).normalized()
    }

    pub fn save(&self) -> Result<()> {
        persistence::save_json(self, SETTINGS_FILE)
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        persistence::save_json_in(dir, self, SETTINGS_FILE)
    }

    fn normalized(mut self) -> Self {
        if self.quiz_length == 0 {
            tracing::warn!("quiz_length of 0 is not playable, using 1");
            self.quiz_length = 1;
        }
        self
    }
}
