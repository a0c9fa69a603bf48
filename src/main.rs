use std::env;

use ragozo::{
    build_verb_flashcards,
    conjugation::NO_ENDING,
    create_harmony_challenge,
    create_quiz_question,
    sample_verbs,
    Conjugator,
    FlashcardDeck,
    PracticeSettings,
    RagozoError,
    VerbEntry,
    VowelHarmony,
};
use tracing_subscriber::{
    fmt,
    prelude::*,
    EnvFilter,
};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// The only accepted argument is the infinitive of one of the known verbs.
fn find_requested_verb<'a>(
    verbs: &'a [VerbEntry],
    mut args: impl Iterator<Item = String>,
) -> Result<Option<&'a VerbEntry>, RagozoError> {
    let Some(wanted) = args.next() else {
        return Ok(None);
    };
    if let Some(extra) = args.next() {
        return Err(RagozoError::Custom(format!("Unexpected argument: {extra}")));
    }

    verbs.iter().find(|verb| verb.infinitive == wanted).map(Some).ok_or_else(|| {
        let known: Vec<&str> = verbs.iter().map(|verb| verb.infinitive.as_str()).collect();
        RagozoError::Custom(format!("Unknown verb: {wanted} (known: {})", known.join(", ")))
    })
}

fn run() -> Result<(), RagozoError> {
    let verbs = sample_verbs();
    let requested = find_requested_verb(&verbs, env::args().skip(1))?;

    let settings = PracticeSettings::load();
    let conjugator = Conjugator::default();
    let mut rng = rand::rng();

    print_reference_table(&conjugator);

    let verb = match requested {
        Some(verb) => verb,
        None => ragozo::pick_random(&verbs, "verb", &mut rng)?,
    };

    println!("\n{} ({}, {})", verb.infinitive, verb.english, verb.harmony);
    for (person, form) in conjugator.conjugations(verb) {
        println!("  {:<3} {}", person.pronoun(), form);
    }
    if let Some(sample) = &verb.sample {
        println!("  {}", sample);
    }

    let question = create_quiz_question(&conjugator, &verbs, &mut rng)?;
    println!(
        "\nQuiz (1 of {}): {} + {}",
        settings.quiz_length,
        question.person.pronoun(),
        question.clue
    );
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }

    let challenge = create_harmony_challenge(&conjugator, &verbs, &mut rng)?;
    println!(
        "\nHarmony: {} {} -> which class is {}?",
        challenge.person.pronoun(),
        challenge.target,
        challenge.verb.stem
    );

    let mut deck = FlashcardDeck::new(build_verb_flashcards(&conjugator, &verbs));
    if settings.shuffle_verb_deck {
        deck.restart_shuffled(&mut rng);
    }
    if let Some(card) = deck.current() {
        println!("\nFlashcard {}: {}", deck.progress(), card.front);
        deck.flip();
        println!("  {}", deck.visible_text().unwrap_or_default());
    }

    Ok(())
}

fn print_reference_table(conjugator: &Conjugator) {
    println!("{:<4} {:<16} {:>6} {:>6} {:>6}", "", "", "back", "front", "mixed");
    for rule in conjugator.reference_table() {
        let endings: Vec<String> = VowelHarmony::ALL
            .iter()
            .map(|harmony| conjugator.describe_ending(rule.person, *harmony))
            .collect();
        println!(
            "{:<4} {:<16} {:>6} {:>6} {:>6}",
            rule.person.pronoun(),
            rule.person.english(),
            endings[0],
            endings[1],
            endings[2]
        );
    }
    println!("({} = no ending)", NO_ENDING);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|v| v.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_find_requested_verb() {
        let verbs = sample_verbs();

        assert!(find_requested_verb(&verbs, args(&[])).unwrap().is_none());

        let verb = find_requested_verb(&verbs, args(&["fürödni"])).unwrap().unwrap();
        assert_eq!(verb.stem, "füröd");

        // Flags are not verbs and are rejected before anything is printed
        let err = find_requested_verb(&verbs, args(&["--help"])).unwrap_err();
        assert!(err.to_string().contains("Unknown verb: --help"));

        let err = find_requested_verb(&verbs, args(&["tanulni", "írni"])).unwrap_err();
        assert!(err.to_string().contains("Unexpected argument: írni"));
    }
}
