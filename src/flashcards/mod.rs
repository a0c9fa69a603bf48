pub mod builder;
pub mod deck;

pub use builder::{
    build_all_flashcards,
    build_verb_flashcards,
    build_vocabulary_flashcards,
    build_vocabulary_practice_deck,
    Flashcard,
    FlashcardKind,
    PracticeDirection,
    CARDS_PER_VERB,
};
pub use deck::FlashcardDeck;
