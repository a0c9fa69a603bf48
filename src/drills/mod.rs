pub mod harmony;
pub mod quiz;

pub use harmony::{
    create_harmony_challenge,
    HarmonyChallenge,
};
pub use quiz::{
    create_quiz_question,
    QuizQuestion,
    QuizScore,
    QuizSession,
    DEFAULT_QUIZ_LENGTH,
    QUIZ_OPTION_COUNT,
};
