use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    Person,
    RagozoError,
    Result,
    VowelHarmony,
};

/// Glyph shown in reference tables for persons that take no ending.
pub const NO_ENDING: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// Display form with its hyphen, e.g. "-ok".
    Suffix(String),
    Bare,
}

impl Ending {
    pub fn suffix(display: &str) -> Self {
        Ending::Suffix(display.to_string())
    }

    /// The morpheme to append, hyphen removed. `None` means use the bare stem.
    pub fn morpheme(&self) -> Option<&str> {
        match self {
            Ending::Suffix(display) => Some(display.strip_prefix('-').unwrap_or(display)),
            Ending::Bare => None,
        }
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ending::Suffix(display) => write!(f, "{}", display),
            Ending::Bare => write!(f, "{}", NO_ENDING),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    pub person: Person,
    pub back: Ending,
    pub front: Ending,
    pub mixed: Ending,
    pub note: Option<String>,
}

impl SuffixRule {
    pub fn new(person: Person, back: Ending, front: Ending, mixed: Ending) -> Self {
        SuffixRule { person, back, front, mixed, note: None }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn ending(&self, harmony: VowelHarmony) -> &Ending {
        match harmony {
            VowelHarmony::Back => &self.back,
            VowelHarmony::Front => &self.front,
            VowelHarmony::Mixed => &self.mixed,
        }
    }
}

/// One rule per person, kept in canonical order so `Person::index` addresses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmonyRuleTable {
    rules: Vec<SuffixRule>,
}

impl HarmonyRuleTable {
    /// Builds a table from an arbitrary rule set. Every person must appear exactly once.
    pub fn from_rules(rules: Vec<SuffixRule>) -> Result<Self> {
        if rules.len() != Person::ALL.len() {
            return Err(RagozoError::InvalidRuleTable(format!(
                "expected {} rules, got {}",
                Person::ALL.len(),
                rules.len()
            )));
        }

        let mut slots: Vec<Option<SuffixRule>> = vec![None; Person::ALL.len()];
        for rule in rules {
            let slot = &mut slots[rule.person.index()];
            if slot.is_some() {
                return Err(RagozoError::InvalidRuleTable(format!(
                    "duplicate rule for '{}'",
                    rule.person
                )));
            }
            *slot = Some(rule);
        }

        // Six rules with no duplicates fill every slot
        let rules = slots.into_iter().flatten().collect();
        Ok(HarmonyRuleTable { rules })
    }

    /// The Hungarian indefinite present tense.
    pub fn indefinite_present() -> Self {
        let s = Ending::suffix;
        let rules = vec![
            SuffixRule::new(Person::FirstSingular, s("-ok"), s("-ek"), s("-ök")).with_note(
                "The stem remains unchanged; choose the ending that matches the verb's vowel harmony.",
            ),
            SuffixRule::new(Person::SecondSingular, s("-sz"), s("-sz"), s("-sz")).with_note(
                "Some stems ending in s, sz, z, dz assimilate (e.g. `olvas` → `olvasol`), \
                 but our focus verbs do not require a connecting vowel.",
            ),
            SuffixRule::new(Person::ThirdSingular, Ending::Bare, Ending::Bare, Ending::Bare)
                .with_note("No ending is added in the indefinite present tense. The bare stem is the full form."),
            SuffixRule::new(Person::FirstPlural, s("-unk"), s("-ünk"), s("-ünk")),
            SuffixRule::new(Person::SecondPlural, s("-tok"), s("-tek"), s("-tök")),
            SuffixRule::new(Person::ThirdPlural, s("-nak"), s("-nek"), s("-nek")),
        ];
        HarmonyRuleTable { rules }
    }

    pub fn rule(&self, person: Person) -> &SuffixRule {
        &self.rules[person.index()]
    }

    pub fn ending(&self, person: Person, harmony: VowelHarmony) -> &Ending {
        self.rule(person).ending(harmony)
    }

    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }
}

impl Default for HarmonyRuleTable {
    fn default() -> Self {
        Self::indefinite_present()
    }
}
