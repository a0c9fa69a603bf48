use rand::Rng;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    conjugation::Conjugator,
    core::{
        utils::shuffle,
        Difficulty,
        PartOfSpeech,
        Person,
        VerbEntry,
        VocabularyCategory,
        VocabularyEntry,
    },
};

pub const CARDS_PER_VERB: usize = 1 + Person::ALL.len();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FlashcardKind {
    Infinitive,
    Conjugation {
        person: Person,
    },
    #[serde(rename_all = "camelCase")]
    Vocabulary {
        category: VocabularyCategory,
        difficulty: Difficulty,
        part_of_speech: PartOfSpeech,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    pub kind: FlashcardKind,
}

/// Which side of a vocabulary card the learner sees first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeDirection {
    #[default]
    HungarianFirst,
    EnglishFirst,
}

/// One infinitive card then six conjugation cards per verb, in input order.
pub fn build_verb_flashcards(conjugator: &Conjugator, verbs: &[VerbEntry]) -> Vec<Flashcard> {
    let mut cards = Vec::with_capacity(verbs.len() * CARDS_PER_VERB);

    for verb in verbs {
        cards.push(Flashcard {
            front: verb.infinitive.clone(),
            back: verb.english.clone(),
            kind: FlashcardKind::Infinitive,
        });

        for (person, form) in conjugator.conjugations(verb) {
            cards.push(Flashcard {
                front: form,
                back: format!("{} · {}", person.hint(), verb.english_base()),
                kind: FlashcardKind::Conjugation { person },
            });
        }
    }

    cards
}

pub fn build_vocabulary_flashcards(entries: &[VocabularyEntry]) -> Vec<Flashcard> {
    entries
        .iter()
        .map(|entry| Flashcard {
            front: entry.hungarian.clone(),
            back: entry.english.clone(),
            kind: FlashcardKind::Vocabulary {
                category: entry.category,
                difficulty: entry.difficulty,
                part_of_speech: entry.part_of_speech,
            },
        })
        .collect()
}

/// The final practice deck: verb and vocabulary cards together, shuffled.
pub fn build_all_flashcards<R: Rng + ?Sized>(
    conjugator: &Conjugator,
    verbs: &[VerbEntry],
    entries: &[VocabularyEntry],
    rng: &mut R,
) -> Vec<Flashcard> {
    let mut cards = build_verb_flashcards(conjugator, verbs);
    cards.extend(build_vocabulary_flashcards(entries));
    tracing::debug!(verbs = verbs.len(), vocabulary = entries.len(), cards = cards.len(), "Deck built");
    shuffle(&cards, rng)
}

pub fn build_vocabulary_practice_deck<R: Rng + ?Sized>(
    entries: &[VocabularyEntry],
    direction: PracticeDirection,
    rng: &mut R,
) -> Vec<Flashcard> {
    let cards = build_vocabulary_flashcards(&shuffle(entries, rng));
    match direction {
        PracticeDirection::HungarianFirst => cards,
        PracticeDirection::EnglishFirst => cards
            .into_iter()
            .map(|card| Flashcard { front: card.back, back: card.front, kind: card.kind })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;
    use crate::core::VowelHarmony;

    fn verbs() -> Vec<VerbEntry> {
        vec![
            VerbEntry::new("tanulni", "tanul", "to learn", VowelHarmony::Back),
            VerbEntry::new("írni", "ír", "to write", VowelHarmony::Front),
        ]
    }

    fn vocabulary() -> Vec<VocabularyEntry> {
        vec![
            VocabularyEntry::new(
                "szia",
                "hello",
                VocabularyCategory::Essentials,
                Difficulty::Beginner,
                PartOfSpeech::Phrase,
            ),
            VocabularyEntry::new(
                "alma",
                "apple",
                VocabularyCategory::FoodDining,
                Difficulty::Beginner,
                PartOfSpeech::Noun,
            ),
            VocabularyEntry::new(
                "autó",
                "car",
                VocabularyCategory::TravelTransportation,
                Difficulty::Intermediate,
                PartOfSpeech::Noun,
            ),
        ]
    }

    #[test]
    fn test_verb_cards_layout() {
        let cards = build_verb_flashcards(&Conjugator::default(), &verbs());
        assert_eq!(cards.len(), 2 * CARDS_PER_VERB);

        assert_eq!(cards[0].front, "tanulni");
        assert_eq!(cards[0].back, "to learn");
        assert_eq!(cards[0].kind, FlashcardKind::Infinitive);

        assert_eq!(cards[1].front, "tanulok");
        assert_eq!(cards[1].back, "1st person singular · learn");
        assert_eq!(cards[1].kind, FlashcardKind::Conjugation { person: Person::FirstSingular });

        assert_eq!(cards[3].front, "tanul");
        assert_eq!(cards[6].front, "tanulnak");
        assert_eq!(cards[6].back, "3rd person plural · learn");

        assert_eq!(cards[7].front, "írni");
        assert_eq!(cards[13].front, "írnek");

        for card in cards.iter().filter(|c| matches!(c.kind, FlashcardKind::Conjugation { .. })) {
            assert!(card.back.contains(" · "));
            assert!(!card.back.contains("to "));
        }
    }

    #[test]
    fn test_verb_cards_empty() {
        assert!(build_verb_flashcards(&Conjugator::default(), &[]).is_empty());
    }

    #[test]
    fn test_vocabulary_cards_keep_metadata() {
        let entries = vocabulary();
        let cards = build_vocabulary_flashcards(&entries);
        assert_eq!(cards.len(), entries.len());

        for (card, entry) in cards.iter().zip(&entries) {
            assert_eq!(card.front, entry.hungarian);
            assert_eq!(card.back, entry.english);
            assert_eq!(
                card.kind,
                FlashcardKind::Vocabulary {
                    category: entry.category,
                    difficulty: entry.difficulty,
                    part_of_speech: entry.part_of_speech,
                }
            );
        }
        assert!(build_vocabulary_flashcards(&[]).is_empty());
    }

    #[test]
    fn test_all_flashcards_count_and_shuffle() {
        let conjugator = Conjugator::default();
        let mut rng = StdRng::seed_from_u64(17);
        let verbs = verbs();
        let entries = vocabulary();

        let first = build_all_flashcards(&conjugator, &verbs, &entries, &mut rng);
        assert_eq!(first.len(), 2 * CARDS_PER_VERB + entries.len());

        let mut orderings = vec![first];
        for _ in 0..4 {
            orderings.push(build_all_flashcards(&conjugator, &verbs, &entries, &mut rng));
        }
        assert!(orderings.windows(2).any(|pair| pair[0] != pair[1]));

        // Same multiset as the unshuffled parts
        let mut expected: Vec<String> = build_verb_flashcards(&conjugator, &verbs)
            .into_iter()
            .chain(build_vocabulary_flashcards(&entries))
            .map(|c| c.front)
            .collect();
        let mut actual: Vec<String> = orderings[0].iter().map(|c| c.front.clone()).collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_all_flashcards_empty_inputs() {
        let conjugator = Conjugator::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(build_all_flashcards(&conjugator, &[], &[], &mut rng).is_empty());
        assert_eq!(build_all_flashcards(&conjugator, &verbs(), &[], &mut rng).len(), 14);
        assert_eq!(build_all_flashcards(&conjugator, &[], &vocabulary(), &mut rng).len(), 3);
    }

    #[test]
    fn test_practice_deck_direction() {
        let entries = vocabulary();
        let mut rng = StdRng::seed_from_u64(4);

        let english_first = build_vocabulary_practice_deck(&entries, PracticeDirection::EnglishFirst, &mut rng);
        assert_eq!(english_first.len(), entries.len());
        for card in &english_first {
            let entry = entries.iter().find(|e| e.english == card.front).unwrap();
            assert_eq!(card.back, entry.hungarian);
        }

        let hungarian_first =
            build_vocabulary_practice_deck(&entries, PracticeDirection::HungarianFirst, &mut rng);
        assert!(hungarian_first.iter().all(|card| entries.iter().any(|e| e.hungarian == card.front)));
    }

    #[test]
    fn test_card_wire_format() {
        let card = build_vocabulary_flashcards(&vocabulary()[..1]).remove(0);
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["kind"]["type"], "vocabulary");
        assert_eq!(json["kind"]["partOfSpeech"], "phrase");
        assert_eq!(json["kind"]["category"], "essentials");
    }
}
