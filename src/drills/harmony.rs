use rand::Rng;

use crate::{
    conjugation::Conjugator,
    core::{
        utils::pick_random,
        Person,
        Result,
        VerbEntry,
        VowelHarmony,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmonyChallenge {
    pub verb: VerbEntry,
    pub person: Person,
    pub target: String,
}

impl HarmonyChallenge {
    pub fn check(&self, choice: VowelHarmony) -> bool {
        choice == self.verb.harmony
    }
}

/// Third person singular takes no ending, so it is never drawn here.
pub fn create_harmony_challenge<R: Rng + ?Sized>(
    conjugator: &Conjugator,
    verbs: &[VerbEntry],
    rng: &mut R,
) -> Result<HarmonyChallenge> {
    let verb = pick_random(verbs, "verb", rng)?;
    let person = *pick_random(&Person::HARMONY_REVEALING, "person", rng)?;
    let target = conjugator.conjugate(verb, person);

    tracing::debug!(verb = %verb.infinitive, person = %person, "Harmony challenge created");

    Ok(HarmonyChallenge { verb: verb.clone(), person, target })
}
