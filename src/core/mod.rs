pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{
    RagozoError,
    Result,
};
pub use models::{
    Difficulty,
    PartOfSpeech,
    Person,
    VerbEntry,
    VocabularyCategory,
    VocabularyEntry,
    VowelHarmony,
};
