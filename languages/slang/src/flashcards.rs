use genalpha_types::VocabularyEntry;
use rand::Rng;

/// A deck over the vocabulary: term on the front, meaning and example on the back
#[derive(Debug, Clone)]
pub struct FlashcardDeck<'a> {
    entries: &'a [VocabularyEntry],
    index: usize,
    revealed: bool,
}

impl<'a> FlashcardDeck<'a> {
    /// Start on a random card, front side up. `None` for an empty table.
    pub fn new<R: Rng + ?Sized>(entries: &'a [VocabularyEntry], rng: &mut R) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            entries,
            index: rng.gen_range(0..entries.len()),
            revealed: false,
        })
    }

    pub fn current(&self) -> &'a VocabularyEntry {
        &self.entries[self.index]
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Turn the current card over
    pub fn flip(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    /// Move to a random card other than the current one, front side up
    pub fn next_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'a VocabularyEntry {
        self.revealed = false;
        let len = self.entries.len();
        if len > 1 {
            let next = rng.gen_range(0..len);
            self.index = if next == self.index {
                (next + 1) % len
            } else {
                next
            };
        }
        self.current()
    }
}
