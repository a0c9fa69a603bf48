//! Hungarian indefinite-present conjugation engine and the drill generators built on it.
//!
//! Collections of verbs and vocabulary are supplied by the caller; every generator
//! takes the random source explicitly so a seeded RNG makes it deterministic.

pub mod conjugation;
pub mod core;
pub mod drills;
pub mod flashcards;
pub mod persistence;
pub mod settings;

pub use conjugation::{
    sample_verbs,
    Conjugator,
    HarmonyRuleTable,
};
pub use crate::core::{
    utils::{
        pick_random,
        shuffle,
    },
    Person,
    RagozoError,
    Result,
    VerbEntry,
    VocabularyEntry,
    VowelHarmony,
};
pub use drills::{
    create_harmony_challenge,
    create_quiz_question,
    HarmonyChallenge,
    QuizQuestion,
    QuizSession,
};
pub use flashcards::{
    build_all_flashcards,
    build_verb_flashcards,
    build_vocabulary_flashcards,
    Flashcard,
    FlashcardDeck,
};
pub use settings::PracticeSettings;
