//! Interactive quiz and flashcard sessions on the terminal

use std::io::{self, BufRead, Write};

use genalpha_lang_slang::{FlashcardDeck, Quiz, Vocabulary};
use rand::Rng;

/// Next trimmed input line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask each question until a valid option number is entered. Returns the score.
pub fn run_quiz<R, W, G>(
    vocabulary: &Vocabulary,
    total: usize,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut quiz = Quiz::build(vocabulary.entries(), total, rng);
    if quiz.questions().is_empty() {
        writeln!(out, "No vocabulary loaded.")?;
        return Ok(0);
    }

    let count = quiz.questions().len();
    'questions: for index in 0..count {
        let question = quiz.questions()[index].clone();
        writeln!(out, "\n{}/{} {}", index + 1, count, question.prompt)?;
        for (n, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}) {}", n + 1, option)?;
        }

        let choice = loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                break 'questions;
            };
            match line.parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => break n - 1,
                _ => writeln!(
                    out,
                    "Pick a number between 1 and {}.",
                    question.options.len()
                )?,
            }
        };

        if quiz.answer(index, &question.options[choice]) == Some(true) {
            writeln!(out, "Correct!")?;
        } else {
            writeln!(out, "Not quite. It means: {}", question.answer)?;
        }
    }

    let score = quiz.score();
    writeln!(out, "\nScore: {}/{}", score, count)?;
    tracing::debug!(score, answered = quiz.answered_count(), "Quiz finished");
    Ok(score)
}

/// Flip with Enter, `n` for another card, `q` to stop. Returns the number of cards shown.
pub fn run_flashcards<R, W, G>(
    vocabulary: &Vocabulary,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let Some(mut deck) = FlashcardDeck::new(vocabulary.entries(), rng) else {
        writeln!(out, "No vocabulary loaded.")?;
        return Ok(0);
    };

    let mut shown = 1;
    writeln!(out, "\n{}", deck.current().term)?;

    loop {
        write!(out, "[enter] flip, [n] next, [q] quit > ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => {
                let card = deck.current();
                if deck.flip() {
                    writeln!(out, "{}", card.meaning)?;
                    writeln!(out, "  \"{}\"", card.example)?;
                } else {
                    writeln!(out, "\n{}", card.term)?;
                }
            }
            "n" => {
                let card = deck.next_random(rng);
                shown += 1;
                writeln!(out, "\n{}", card.term)?;
            }
            "q" => break,
            other => writeln!(out, "Unknown choice '{other}'.")?,
        }
    }

    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use genalpha_lang_slang::VocabularyLoader;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn vocabulary() -> Vocabulary {
        VocabularyLoader::load_embedded().unwrap()
    }

    /// Option numbers (1-based) of the right answers for a quiz built from `seed`
    fn right_choices(vocab: &Vocabulary, total: usize, seed: u64) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(seed);
        Quiz::build(vocab.entries(), total, &mut rng)
            .questions()
            .iter()
            .map(|q| q.options.iter().position(|o| *o == q.answer).unwrap() + 1)
            .collect()
    }

    #[test]
    fn test_quiz_scores_correct_answers() {
        let vocab = vocabulary();
        let right = right_choices(&vocab, 3, 21);
        let wrong = right[2] % 4 + 1;
        let script = format!("{}\nnine\n7\n{}\n{}\n", right[0], right[1], wrong);

        let mut rng = StdRng::seed_from_u64(21);
        let mut out = Vec::new();
        let score =
            run_quiz(&vocab, 3, &mut rng, &mut Cursor::new(script), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(score, 2);
        assert_eq!(text.matches("Correct!").count(), 2);
        assert_eq!(text.matches("Pick a number between 1 and 4.").count(), 2);
        assert!(text.contains("Not quite. It means: "));
        assert!(text.contains("Score: 2/3"));
    }

    #[test]
    fn test_quiz_stops_at_end_of_input() {
        let vocab = vocabulary();
        let right = right_choices(&vocab, 5, 8);

        let mut rng = StdRng::seed_from_u64(8);
        let mut out = Vec::new();
        let input = format!("{}\n", right[0]);
        let score = run_quiz(&vocab, 5, &mut rng, &mut Cursor::new(input), &mut out).unwrap();

        assert_eq!(score, 1);
        assert!(String::from_utf8(out).unwrap().contains("Score: 1/5"));
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = Vocabulary::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut out = Vec::new();

        assert_eq!(
            run_quiz(&vocab, 5, &mut rng, &mut Cursor::new(""), &mut out).unwrap(),
            0
        );
        assert_eq!(
            run_flashcards(&vocab, &mut rng, &mut Cursor::new(""), &mut out).unwrap(),
            0
        );
        assert_eq!(
            String::from_utf8(out).unwrap().matches("No vocabulary loaded.").count(),
            2
        );
    }

    #[test]
    fn test_flashcards_flip_next_and_quit() {
        let vocab = vocabulary();
        let mut rng = StdRng::seed_from_u64(3);
        let first = FlashcardDeck::new(vocab.entries(), &mut rng)
            .unwrap()
            .current()
            .clone();

        let mut rng = StdRng::seed_from_u64(3);
        let mut out = Vec::new();
        let shown = run_flashcards(
            &vocab,
            &mut rng,
            &mut Cursor::new("\n\nn\nx\nq\nn\n"),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(shown, 2);
        assert!(text.contains(&first.meaning));
        assert!(text.contains(&format!("\"{}\"", first.example)));
        assert!(text.contains("Unknown choice 'x'."));
    }
}
