use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Vowel-harmony class of a verb stem. Assigned by whoever authors the verb,
/// never inferred from spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelHarmony {
    Back,
    Front,
    Mixed,
}

impl VowelHarmony {
    pub const ALL: [VowelHarmony; 3] = [VowelHarmony::Back, VowelHarmony::Front, VowelHarmony::Mixed];

    pub fn label(&self) -> &'static str {
        match self {
            VowelHarmony::Back => "Back (a, á, o, ó, u, ú)",
            VowelHarmony::Front => "Front unrounded (e, é, i, í)",
            VowelHarmony::Mixed => "Front rounded (ö, ő, ü, ű)",
        }
    }
}

impl fmt::Display for VowelHarmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VowelHarmony::Back => "back",
            VowelHarmony::Front => "front",
            VowelHarmony::Mixed => "mixed",
        };
        write!(f, "{}", name)
    }
}

/// Grammatical person/number of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Person {
    #[serde(rename = "én")]
    FirstSingular,
    #[serde(rename = "te")]
    SecondSingular,
    #[serde(rename = "ő")]
    ThirdSingular,
    #[serde(rename = "mi")]
    FirstPlural,
    #[serde(rename = "ti")]
    SecondPlural,
    #[serde(rename = "ők")]
    ThirdPlural,
}

impl Person {
    /// Canonical order: én, te, ő, mi, ti, ők.
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// Persons whose ending reveals the stem's harmony class.
    pub const HARMONY_REVEALING: [Person; 5] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    pub fn index(&self) -> usize {
        match self {
            Person::FirstSingular => 0,
            Person::SecondSingular => 1,
            Person::ThirdSingular => 2,
            Person::FirstPlural => 3,
            Person::SecondPlural => 4,
            Person::ThirdPlural => 5,
        }
    }

    pub fn pronoun(&self) -> &'static str {
        match self {
            Person::FirstSingular => "én",
            Person::SecondSingular => "te",
            Person::ThirdSingular => "ő",
            Person::FirstPlural => "mi",
            Person::SecondPlural => "ti",
            Person::ThirdPlural => "ők",
        }
    }

    pub fn from_pronoun(pronoun: &str) -> Option<Person> {
        Person::ALL.into_iter().find(|person| person.pronoun() == pronoun)
    }

    pub fn english(&self) -> &'static str {
        match self {
            Person::FirstSingular => "I",
            Person::SecondSingular => "you (singular)",
            Person::ThirdSingular => "he / she / it",
            Person::FirstPlural => "we",
            Person::SecondPlural => "you (plural)",
            Person::ThirdPlural => "they",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Person::FirstSingular => "1st person singular",
            Person::SecondSingular => "2nd person singular",
            Person::ThirdSingular => "3rd person singular",
            Person::FirstPlural => "1st person plural",
            Person::SecondPlural => "2nd person plural",
            Person::ThirdPlural => "3rd person plural",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Person::FirstSingular => "I (the speaker)",
            Person::SecondSingular => "you (one person you're talking to)",
            Person::ThirdSingular => "he/she/it (one person or thing being talked about)",
            Person::FirstPlural => "we (the speaker + others)",
            Person::SecondPlural => "you all (multiple people you're talking to)",
            Person::ThirdPlural => "they (multiple people or things being talked about)",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pronoun())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbEntry {
    pub infinitive: String,     // e.g. "tanulni"
    pub stem: String,           // e.g. "tanul", suffixes attach here
    pub english: String,        // Gloss, usually "to ..."
    pub harmony: VowelHarmony,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>, // Example sentence with translation
}

impl VerbEntry {
    pub fn new(infinitive: &str, stem: &str, english: &str, harmony: VowelHarmony) -> Self {
        VerbEntry {
            infinitive: infinitive.to_string(),
            stem: stem.to_string(),
            english: english.to_string(),
            harmony,
            sample: None,
        }
    }

    pub fn with_sample(mut self, sample: &str) -> Self {
        self.sample = Some(sample.to_string());
        self
    }

    /// English gloss without the infinitive marker: "to learn" -> "learn".
    pub fn english_base(&self) -> &str {
        self.english.strip_prefix("to ").unwrap_or(&self.english)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VocabularyCategory {
    Essentials,
    FoodDining,
    TravelTransportation,
    HomeFamily,
    WorkEducation,
    HealthBody,
    ShoppingMoney,
    TimeWeather,
    HobbiesLeisure,
    NatureAnimals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Adverb,
    Verb,
    Phrase,
    Other,
}

/// A headword from the learner's vocabulary list. Never conjugated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub hungarian: String,
    pub english: String,
    pub category: VocabularyCategory,
    pub difficulty: Difficulty,
    pub part_of_speech: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
}

impl VocabularyEntry {
    pub fn new(
        hungarian: &str,
        english: &str,
        category: VocabularyCategory,
        difficulty: Difficulty,
        part_of_speech: PartOfSpeech,
    ) -> Self {
        VocabularyEntry {
            hungarian: hungarian.to_string(),
            english: english.to_string(),
            category,
            difficulty,
            part_of_speech,
            notes: None,
            example_sentence: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_order_and_pronouns() {
        let pronouns: Vec<&str> = Person::ALL.iter().map(|p| p.pronoun()).collect();
        assert_eq!(pronouns, vec!["én", "te", "ő", "mi", "ti", "ők"]);

        for (i, person) in Person::ALL.iter().enumerate() {
            assert_eq!(person.index(), i);
            assert_eq!(Person::from_pronoun(person.pronoun()), Some(*person));
        }
        assert_eq!(Person::from_pronoun("ön"), None);
        assert!(!Person::HARMONY_REVEALING.contains(&Person::ThirdSingular));
    }

    #[test]
    fn test_english_base_strips_infinitive_marker() {
        let verb = VerbEntry::new("tanulni", "tanul", "to learn", VowelHarmony::Back);
        assert_eq!(verb.english_base(), "learn");

        let odd = VerbEntry::new("írni", "ír", "write", VowelHarmony::Front);
        assert_eq!(odd.english_base(), "write");

        // Only the leading marker is removed
        let nested = VerbEntry::new("menni", "men", "to go to town", VowelHarmony::Front);
        assert_eq!(nested.english_base(), "go to town");
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "infinitive": "fürödni",
            "stem": "füröd",
            "english": "to bathe",
            "harmony": "mixed"
        }"#;
        let verb: VerbEntry = serde_json::from_str(json).unwrap();
        assert_eq!(verb.harmony, VowelHarmony::Mixed);
        assert!(verb.sample.is_none());

        let json = r#"{
            "hungarian": "szia",
            "english": "hello",
            "category": "essentials",
            "difficulty": "beginner",
            "partOfSpeech": "phrase",
            "exampleSentence": "Szia, hogy vagy?"
        }"#;
        let entry: VocabularyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.category, VocabularyCategory::Essentials);
        assert_eq!(entry.part_of_speech, PartOfSpeech::Phrase);
        assert_eq!(entry.example_sentence.as_deref(), Some("Szia, hogy vagy?"));

        let category: VocabularyCategory = serde_json::from_str("\"travel-transportation\"").unwrap();
        assert_eq!(category, VocabularyCategory::TravelTransportation);

        assert_eq!(serde_json::to_string(&Person::ThirdPlural).unwrap(), "\"ők\"");
    }
}
