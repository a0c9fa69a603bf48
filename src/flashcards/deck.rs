use rand::Rng;

use super::builder::Flashcard;
use crate::core::utils::shuffle;

/// A deck being studied: the cards plus a cursor and which side is showing.
#[derive(Debug, Clone, Default)]
pub struct FlashcardDeck {
    cards: Vec<Flashcard>,
    index: usize,
    flipped: bool,
}

impl FlashcardDeck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self { cards, index: 0, flipped: false }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.index)
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Text on the visible side of the current card.
    pub fn visible_text(&self) -> Option<&str> {
        self.current().map(|card| if self.flipped { card.back.as_str() } else { card.front.as_str() })
    }

    pub fn flip(&mut self) {
        if !self.is_empty() {
            self.flipped = !self.flipped;
        }
    }

    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// "3 / 14"
    pub fn progress(&self) -> String {
        if self.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.cards.len())
    }

    pub fn restart_shuffled<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = shuffle(&self.cards, rng);
        self.index = 0;
        self.flipped = false;
    }
}
