pub mod engine;
pub mod rules;
pub mod samples;

pub use engine::Conjugator;
pub use rules::{
    Ending,
    HarmonyRuleTable,
    SuffixRule,
    NO_ENDING,
};
pub use samples::sample_verbs;
