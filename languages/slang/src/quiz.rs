use std::collections::HashSet;

use genalpha_core::preprocess::{DefaultPreprocessor, Preprocessor};
use genalpha_types::VocabularyEntry;
use rand::Rng;
use rand::seq::SliceRandom;

pub const QUIZ_LENGTH: usize = 5;
pub const DISTRACTOR_COUNT: usize = 3;

/// One multiple-choice question: pick the meaning of `term`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub term: String,
    pub prompt: String,
    pub answer: String,
    /// The answer plus up to [`DISTRACTOR_COUNT`] other meanings, shuffled
    pub options: Vec<String>,
}

/// A round of questions and the choices made so far
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
    choices: Vec<Option<String>>,
}

impl Quiz {
    /// Draw up to `total` distinct entries and build a question for each.
    /// Distractors are meanings of other entries, never repeated within a question.
    pub fn build<R: Rng + ?Sized>(entries: &[VocabularyEntry], total: usize, rng: &mut R) -> Self {
        let mut pool: Vec<&VocabularyEntry> = entries.iter().collect();
        pool.shuffle(rng);

        let questions: Vec<QuizQuestion> = pool
            .iter()
            .take(total)
            .map(|entry| question_for(entry, entries, rng))
            .collect();

        Self {
            choices: vec![None; questions.len()],
            questions,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Record `option` as the choice for question `index`; a later call replaces it.
    /// Returns whether the choice is correct, or `None` for an unknown question.
    pub fn answer(&mut self, index: usize, option: &str) -> Option<bool> {
        let question = self.questions.get(index)?;
        let correct = question.answer == option;
        self.choices[index] = Some(option.to_string());
        Some(correct)
    }

    pub fn answered_count(&self) -> usize {
        self.choices.iter().filter(|c| c.is_some()).count()
    }

    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.choices)
            .filter(|(q, c)| c.as_deref() == Some(q.answer.as_str()))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.questions.len()
    }

    /// Forget every choice, keeping the same questions
    pub fn reset(&mut self) {
        self.choices.iter_mut().for_each(|c| *c = None);
    }
}

fn question_for<R: Rng + ?Sized>(
    entry: &VocabularyEntry,
    entries: &[VocabularyEntry],
    rng: &mut R,
) -> QuizQuestion {
    let term_key = DefaultPreprocessor.match_key(&entry.term);

    let mut others: Vec<&VocabularyEntry> = entries
        .iter()
        .filter(|e| DefaultPreprocessor.match_key(&e.term) != term_key)
        .collect();
    others.shuffle(rng);

    let mut seen = HashSet::from([entry.meaning.clone()]);
    let mut options = vec![entry.meaning.clone()];
    for other in others {
        if options.len() > DISTRACTOR_COUNT {
            break;
        }
        if seen.insert(other.meaning.clone()) {
            options.push(other.meaning.clone());
        }
    }
    options.shuffle(rng);

    QuizQuestion {
        term: entry.term.clone(),
        prompt: format!("What does \u{201c}{}\u{201d} mean?", entry.term),
        answer: entry.meaning.clone(),
        options,
    }
}
