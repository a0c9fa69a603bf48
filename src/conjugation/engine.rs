use super::rules::{
    Ending,
    HarmonyRuleTable,
    SuffixRule,
};
use crate::core::{
    Person,
    VerbEntry,
    VowelHarmony,
};

/// Table lookup plus literal concatenation. No assimilation, no linking vowels,
/// no case folding: stems needing those are expected to stay out of the collection.
#[derive(Debug, Clone, Default)]
pub struct Conjugator {
    table: HarmonyRuleTable,
}

impl Conjugator {
    pub fn new(table: HarmonyRuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &HarmonyRuleTable {
        &self.table
    }

    pub fn conjugate(&self, verb: &VerbEntry, person: Person) -> String {
        match self.table.ending(person, verb.harmony).morpheme() {
            Some(morpheme) => format!("{}{}", verb.stem, morpheme),
            None => verb.stem.clone(),
        }
    }

    /// The ending as shown in a reference table: "-ok", or "—" when there is none.
    pub fn describe_ending(&self, person: Person, harmony: VowelHarmony) -> String {
        match self.table.ending(person, harmony) {
            Ending::Suffix(display) => display.clone(),
            bare @ Ending::Bare => bare.to_string(),
        }
    }

    /// All six forms of one verb in canonical person order.
    pub fn conjugations(&self, verb: &VerbEntry) -> Vec<(Person, String)> {
        Person::ALL.into_iter().map(|person| (person, self.conjugate(verb, person))).collect()
    }

    pub fn reference_table(&self) -> &[SuffixRule] {
        self.table.rules()
    }
}
