use rand::Rng;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    conjugation::Conjugator,
    core::{
        utils::{
            pick_random,
            shuffle,
        },
        Person,
        Result,
        VerbEntry,
    },
};

pub const QUIZ_OPTION_COUNT: usize = 4;
pub const DEFAULT_QUIZ_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub verb: VerbEntry,
    pub person: Person,
    pub answer: String,
    pub options: Vec<String>,
    pub clue: String, // "{person hint} · {english gloss}"
}

impl QuizQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.answer
    }

    /// Feedback line shown after answering, e.g. "1st person singular · I learn".
    pub fn display_hint(&self) -> String {
        format!("{} · {} {}", self.person.hint(), self.person.english(), self.verb.english_base())
    }
}

/// Builds one multiple-choice question. Distractors come from the chosen verb's own
/// paradigm, so every option is a plausible form of the same verb.
pub fn create_quiz_question<R: Rng + ?Sized>(
    conjugator: &Conjugator,
    verbs: &[VerbEntry],
    rng: &mut R,
) -> Result<QuizQuestion> {
    let verb = pick_random(verbs, "verb", rng)?;
    let person = *pick_random(&Person::ALL, "person", rng)?;
    let answer = conjugator.conjugate(verb, person);
    let clue = format!("{} · {}", person.hint(), verb.english);

    let mut pool: Vec<String> = Vec::with_capacity(Person::ALL.len());
    for (_, form) in conjugator.conjugations(verb) {
        if form != answer && !pool.contains(&form) {
            pool.push(form);
        }
    }

    let mut distractors = shuffle(&pool, rng);
    distractors.truncate(QUIZ_OPTION_COUNT - 1);
    if distractors.len() < QUIZ_OPTION_COUNT - 1 {
        tracing::warn!(
            verb = %verb.infinitive,
            available = distractors.len(),
            "Not enough distinct forms for a full set of distractors"
        );
    }

    let mut options = vec![answer.clone()];
    options.extend(distractors);
    let options = shuffle(&options, rng);

    tracing::debug!(verb = %verb.infinitive, person = %person, answer = %answer, "Quiz question created");

    Ok(QuizQuestion { verb: verb.clone(), person, answer, options, clue })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

/// A fixed-length quiz round. Each question may be answered once; the round
/// completes when `total` reaches the configured length.
#[derive(Debug, Clone)]
pub struct QuizSession {
    length: usize,
    question: QuizQuestion,
    selection: Option<String>,
    score: QuizScore,
}

impl QuizSession {
    pub fn start<R: Rng + ?Sized>(
        conjugator: &Conjugator,
        verbs: &[VerbEntry],
        length: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let question = create_quiz_question(conjugator, verbs, rng)?;
        Ok(Self { length: length.max(1), question, selection: None, score: QuizScore::default() })
    }

    pub fn question(&self) -> &QuizQuestion {
        &self.question
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn score(&self) -> QuizScore {
        self.score
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_answered(&self) -> bool {
        self.selection.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.score.total >= self.length
    }

    /// Records an answer. Returns whether it was correct, or `None` if the pick was ignored.
    pub fn pick(&mut self, option: &str) -> Option<bool> {
        if self.is_answered() || self.is_completed() {
            return None;
        }

        let correct = self.question.is_correct(option);
        self.selection = Some(option.to_string());
        self.score.total += 1;
        if correct {
            self.score.correct += 1;
        }

        if self.is_completed() {
            tracing::info!(correct = self.score.correct, total = self.score.total, "Quiz completed");
        }
        Some(correct)
    }

    /// Moves to a fresh question. Returns false once the round is over.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        conjugator: &Conjugator,
        verbs: &[VerbEntry],
        rng: &mut R,
    ) -> Result<bool> {
        if self.is_completed() {
            return Ok(false);
        }
        self.question = create_quiz_question(conjugator, verbs, rng)?;
        self.selection = None;
        Ok(true)
    }

    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        conjugator: &Conjugator,
        verbs: &[VerbEntry],
        rng: &mut R,
    ) -> Result<()> {
        self.question = create_quiz_question(conjugator, verbs, rng)?;
        self.selection = None;
        self.score = QuizScore::default();
        Ok(())
    }
}
